//! The `EntryStore` trait and its error taxonomy.
//!
//! The trait is implemented by storage backends (e.g. `quill-store-sqlite`).
//! Higher layers (`quill-http`, [`Journal`](crate::journal::Journal)) depend
//! on this abstraction, not on any concrete backend.
//!
//! Every operation carries the requesting principal so the backend can
//! evaluate [`policy::owner_only`](crate::policy::owner_only) at the store
//! boundary. The owner filter inside a backend's query is a convenience
//! filter; the policy predicate is the authoritative check.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::entry::{Entry, NewEntry, PrincipalId};

// ─── Error taxonomy ──────────────────────────────────────────────────────────

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Failures a store backend can report.
///
/// `Write`/`Query`/`Delete` are thin wrappers over the backend's own error;
/// network, quota, and I/O causes are deliberately conflated. Policy
/// denials and missing delete targets are distinct kinds so callers can
/// report them precisely.
#[derive(Debug, Error)]
pub enum StoreError {
  /// A create failed. No partial state remains: a single-record write is
  /// atomic at the store level.
  #[error("write failed: {source}")]
  Write { source: Source },

  /// A list failed. Callers must leave already-rendered state unchanged.
  #[error("query failed: {source}")]
  Query { source: Source },

  /// A delete failed for a transient reason; the target entry remains.
  #[error("delete failed: {source}")]
  Delete { source: Source },

  /// The store policy denied the operation.
  #[error("store policy denied access for principal {principal}")]
  PermissionDenied { principal: PrincipalId },

  /// The delete target does not exist.
  #[error("entry not found: {0}")]
  EntryNotFound(Uuid),
}

impl StoreError {
  pub fn write(source: impl Into<Source>) -> Self {
    Self::Write { source: source.into() }
  }

  pub fn query(source: impl Into<Source>) -> Self {
    Self::Query { source: source.into() }
  }

  pub fn delete(source: impl Into<Source>) -> Self {
    Self::Delete { source: source.into() }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a journal entry store backend.
///
/// Entries are create-or-delete only; no update operation exists, by
/// design. Each method is a single independent request/response exchange —
/// there is no transaction or subscription surface.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EntryStore: Send + Sync {
  /// Persist a new entry for `principal`.
  ///
  /// The store assigns `entry_id` and captures `created_at` from its own
  /// clock at write time (client clocks would reintroduce skew-ordering
  /// bugs). Denied unless `principal` equals the entry's owner.
  fn create<'a>(
    &'a self,
    principal: &'a PrincipalId,
    input: NewEntry,
  ) -> impl Future<Output = Result<Entry, StoreError>> + Send + 'a;

  /// All of `principal`'s entries, ordered by `created_at` descending
  /// (ties broken by `entry_id` for determinism).
  ///
  /// An owner with no entries gets an empty vec, not an error. The result
  /// is finite and materialised at call time — not a live subscription.
  fn list_by_owner<'a>(
    &'a self,
    principal: &'a PrincipalId,
  ) -> impl Future<Output = Result<Vec<Entry>, StoreError>> + Send + 'a;

  /// Remove the entry with `entry_id`.
  ///
  /// The store loads the record's owner and evaluates the policy; a
  /// non-owner gets [`StoreError::PermissionDenied`] and the row survives.
  fn delete<'a>(
    &'a self,
    principal: &'a PrincipalId,
    entry_id: Uuid,
  ) -> impl Future<Output = Result<(), StoreError>> + Send + 'a;
}
