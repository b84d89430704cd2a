//! `Journal` — the consumer-facing facade over an [`EntryStore`].
//!
//! A view layer holds one `Journal` per signed-in session. Every call
//! resolves the session principal first (no ambient identity), and list
//! refreshes are sequenced so a stale response can never overwrite a newer
//! one.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::{
  Error,
  entry::{Entry, NewEntry},
  refresh::RefreshSequence,
  session::Session,
  store::{EntryStore, StoreError},
};

/// Errors surfaced to the view layer.
///
/// All are recoverable by the user retrying the action; none mutate state
/// the caller has already rendered.
#[derive(Debug, Error)]
pub enum JournalError {
  #[error(transparent)]
  Domain(#[from] Error),

  #[error(transparent)]
  Store(#[from] StoreError),
}

pub struct Journal<S> {
  store:   Arc<S>,
  session: Session,
  refresh: RefreshSequence,
}

impl<S: EntryStore> Journal<S> {
  pub fn new(store: Arc<S>, session: Session) -> Self {
    Self {
      store,
      session,
      refresh: RefreshSequence::new(),
    }
  }

  pub fn session(&self) -> &Session { &self.session }

  /// Trim, validate, and persist a new entry for the current principal.
  ///
  /// On failure the composed text is untouched — the caller keeps it for
  /// resubmission.
  pub async fn write_entry(&self, content: &str) -> Result<Entry, JournalError> {
    let principal = self.session.principal()?;
    let input = NewEntry::new(principal.id.clone(), content)?;
    Ok(self.store.create(&principal.id, input).await?)
  }

  /// Fetch the current principal's entries, most recent first.
  ///
  /// Returns `Ok(None)` when a newer refresh was issued while this one was
  /// in flight; the caller must discard the stale result and keep whatever
  /// it already rendered.
  pub async fn refresh(&self) -> Result<Option<Vec<Entry>>, JournalError> {
    let principal = self.session.principal()?;
    let token = self.refresh.issue();

    let entries = self.store.list_by_owner(&principal.id).await?;

    if !self.refresh.is_current(token) {
      return Ok(None);
    }
    Ok(Some(entries))
  }

  /// Delete one of the current principal's entries.
  pub async fn delete_entry(&self, entry_id: Uuid) -> Result<(), JournalError> {
    let principal = self.session.principal()?;
    Ok(self.store.delete(&principal.id, entry_id).await?)
  }
}
