//! [`SqliteStore`] — the SQLite implementation of [`EntryStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use quill_core::{
  entry::{Entry, NewEntry, PrincipalId},
  policy,
  store::{EntryStore, StoreError},
};

use crate::{
  Result,
  encode::{RawEntry, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A journal entry store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Look up the owner of an entry. `None` when the row does not exist.
  async fn entry_owner(&self, entry_id: Uuid) -> Result<Option<PrincipalId>> {
    let id_str = encode_uuid(entry_id);

    let owner: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT owner_id FROM entries WHERE entry_id = ?1",
              rusqlite::params![id_str],
              |r| r.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(owner.map(PrincipalId::new))
  }

  #[cfg(test)]
  pub(crate) fn raw_conn(&self) -> &tokio_rusqlite::Connection { &self.conn }
}

// ─── EntryStore impl ─────────────────────────────────────────────────────────

impl EntryStore for SqliteStore {
  async fn create(
    &self,
    principal: &PrincipalId,
    input: NewEntry,
  ) -> Result<Entry, StoreError> {
    if !policy::owner_only(principal, &input.owner_id).is_allowed() {
      return Err(StoreError::PermissionDenied {
        principal: principal.clone(),
      });
    }

    let entry = Entry {
      entry_id:   Uuid::new_v4(),
      owner_id:   input.owner_id,
      content:    input.content,
      // Write-time store clock, never the client's.
      created_at: Utc::now(),
    };

    let id_str    = encode_uuid(entry.entry_id);
    let owner_str = entry.owner_id.as_str().to_owned();
    let content   = entry.content.clone();
    let at_str    = encode_dt(entry.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO entries (entry_id, owner_id, content, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, owner_str, content, at_str],
        )?;
        Ok(())
      })
      .await
      .map_err(StoreError::write)?;

    Ok(entry)
  }

  async fn list_by_owner(
    &self,
    principal: &PrincipalId,
  ) -> Result<Vec<Entry>, StoreError> {
    let owner_str = principal.as_str().to_owned();

    let raws: Vec<RawEntry> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT entry_id, owner_id, content, created_at
           FROM entries
           WHERE owner_id = ?1
           ORDER BY created_at DESC, entry_id DESC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![owner_str], |row| {
            Ok(RawEntry {
              entry_id:   row.get(0)?,
              owner_id:   row.get(1)?,
              content:    row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(StoreError::query)?;

    // The WHERE clause above is the convenience filter; the policy predicate
    // is the authoritative check on every row.
    let mut entries = Vec::with_capacity(raws.len());
    for raw in raws {
      let entry = raw.into_entry().map_err(StoreError::query)?;
      if policy::owner_only(principal, &entry.owner_id).is_allowed() {
        entries.push(entry);
      }
    }
    Ok(entries)
  }

  async fn delete(
    &self,
    principal: &PrincipalId,
    entry_id: Uuid,
  ) -> Result<(), StoreError> {
    let owner = self
      .entry_owner(entry_id)
      .await
      .map_err(StoreError::delete)?
      .ok_or(StoreError::EntryNotFound(entry_id))?;

    if !policy::owner_only(principal, &owner).is_allowed() {
      return Err(StoreError::PermissionDenied {
        principal: principal.clone(),
      });
    }

    let id_str = encode_uuid(entry_id);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM entries WHERE entry_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await
      .map_err(StoreError::delete)?;

    Ok(())
  }
}
