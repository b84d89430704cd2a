//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; UUIDs as hyphenated lowercase
//! strings.

use chrono::{DateTime, Utc};
use quill_core::entry::{Entry, PrincipalId};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `entries` row.
pub struct RawEntry {
  pub entry_id:   String,
  pub owner_id:   String,
  pub content:    String,
  pub created_at: String,
}

impl RawEntry {
  pub fn into_entry(self) -> Result<Entry> {
    Ok(Entry {
      entry_id:   decode_uuid(&self.entry_id)?,
      owner_id:   PrincipalId::new(self.owner_id),
      content:    self.content,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
