//! Explicit authentication state.
//!
//! Rather than an ambient process-wide "current user", the session is a
//! value threaded to every call site that needs an identity. A session
//! starts `Unresolved` until the identity provider reports, then settles
//! into `Anonymous` or `Authenticated`.

use crate::{Error, Result, entry::Principal};

/// The three states a sign-in flow can be in.
#[derive(Debug, Clone, Default)]
pub enum AuthState {
  /// The identity provider has not reported yet.
  #[default]
  Unresolved,
  /// Resolved: nobody is signed in.
  Anonymous,
  /// Resolved: `Principal` is signed in.
  Authenticated(Principal),
}

/// A resolved-or-pending authentication context.
#[derive(Debug, Clone, Default)]
pub struct Session {
  state: AuthState,
}

impl Session {
  pub fn new(state: AuthState) -> Self { Self { state } }

  pub fn authenticated(principal: Principal) -> Self {
    Self::new(AuthState::Authenticated(principal))
  }

  pub fn state(&self) -> &AuthState { &self.state }

  /// Record a sign-in/sign-out transition reported by the identity provider.
  pub fn resolve(&mut self, state: AuthState) { self.state = state; }

  /// The signed-in principal, or why there is none.
  pub fn principal(&self) -> Result<&Principal> {
    match &self.state {
      AuthState::Authenticated(p) => Ok(p),
      AuthState::Anonymous => Err(Error::NotAuthenticated),
      AuthState::Unresolved => Err(Error::AuthPending),
    }
  }
}
