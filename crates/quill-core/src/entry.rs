//! Entry — the sole domain entity of the journal.
//!
//! Entries are immutable: they are created and deleted, never updated.
//! `owner_id` and `created_at` are fixed at creation; `created_at` is
//! assigned by the store from its own clock, never by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Principal ───────────────────────────────────────────────────────────────

/// Opaque identifier of an authenticated principal, as issued by the
/// identity provider. Used as the `owner_id` of every entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for PrincipalId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

/// An authenticated identity plus the display attributes the identity
/// provider supplies. The attributes are display-only; authorization uses
/// `id` exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
  pub id:           PrincipalId,
  pub display_name: Option<String>,
  pub email:        Option<String>,
  pub avatar_url:   Option<String>,
}

// ─── Entry ───────────────────────────────────────────────────────────────────

/// A persisted journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
  /// Assigned by the store at creation; immutable.
  pub entry_id:   Uuid,
  /// The principal that created the entry; immutable.
  pub owner_id:   PrincipalId,
  pub content:    String,
  /// Write-time store clock; immutable.
  pub created_at: DateTime<Utc>,
}

/// Validated input for [`EntryStore::create`](crate::store::EntryStore).
///
/// Content validation happens here, at the producing caller, not in the
/// repository: the store trusts that a `NewEntry` carries non-empty text.
#[derive(Debug, Clone)]
pub struct NewEntry {
  pub owner_id: PrincipalId,
  pub content:  String,
}

impl NewEntry {
  /// Trim surrounding whitespace and reject empty content.
  pub fn new(owner_id: PrincipalId, content: impl AsRef<str>) -> Result<Self> {
    let trimmed = content.as_ref().trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyContent);
    }
    Ok(Self {
      owner_id,
      content: trimmed.to_owned(),
    })
  }
}
