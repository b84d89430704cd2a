//! Latest-wins guard for repeated list refreshes.
//!
//! Concurrent refreshes of the same logical query are not coordinated by
//! the store, so the last *resolving* response would otherwise win. This
//! guard makes the last *issued* request win instead: issuing a token
//! supersedes all earlier tokens, and a response is applied only while its
//! token is still current.

use std::sync::atomic::{AtomicU64, Ordering};

/// A sequence token for one in-flight refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// Monotonically increasing token source for one logical query.
#[derive(Debug, Default)]
pub struct RefreshSequence {
  latest: AtomicU64,
}

impl RefreshSequence {
  pub fn new() -> Self { Self::default() }

  /// Issue the next token, superseding every previously issued token.
  pub fn issue(&self) -> RefreshToken {
    RefreshToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
  }

  /// Whether `token` is the most recently issued token.
  pub fn is_current(&self, token: RefreshToken) -> bool {
    self.latest.load(Ordering::SeqCst) == token.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn freshly_issued_token_is_current() {
    let seq = RefreshSequence::new();
    let token = seq.issue();
    assert!(seq.is_current(token));
  }

  #[test]
  fn newer_issue_supersedes_older_token() {
    let seq = RefreshSequence::new();
    let first = seq.issue();
    let second = seq.issue();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
  }

  #[test]
  fn tokens_are_strictly_increasing() {
    let seq = RefreshSequence::new();
    let a = seq.issue();
    let b = seq.issue();
    let c = seq.issue();
    assert!(a != b && b != c && a != c);
    assert!(seq.is_current(c));
  }
}
