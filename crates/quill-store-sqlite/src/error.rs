//! Internal error type for `quill-store-sqlite`.
//!
//! Converted into the shared [`StoreError`](quill_core::store::StoreError)
//! taxonomy at the trait boundary; the conversion site decides which
//! operation wrapper (write/query/delete) applies.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
