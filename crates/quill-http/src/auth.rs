//! Bearer-token extractor and the identity-provider adapter.
//!
//! The federated sign-in flow that issues tokens is an external
//! collaborator; this module only resolves an already-issued token to an
//! [`AuthState`]. Configuration holds SHA-256 digests of tokens, never the
//! tokens themselves.

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use quill_core::{
  entry::{Principal, PrincipalId},
  session::AuthState,
  store::EntryStore,
};
use sha2::{Digest, Sha256};

use crate::{AppState, PrincipalConfig, error::ApiError};

// ─── Identity provider ────────────────────────────────────────────────────────

/// Resolves presented credentials to an authentication state.
pub trait IdentityProvider: Send + Sync {
  fn resolve(&self, bearer_token: Option<&str>) -> AuthState;
}

/// An identity provider backed by the static token table in `config.toml`.
pub struct StaticTokenProvider {
  principals: HashMap<String, Principal>,
}

impl StaticTokenProvider {
  pub fn from_config(entries: &[PrincipalConfig]) -> Self {
    let principals = entries
      .iter()
      .map(|p| {
        (p.token_sha256.to_lowercase(), Principal {
          id:           PrincipalId::new(p.id.clone()),
          display_name: p.display_name.clone(),
          email:        p.email.clone(),
          avatar_url:   p.avatar_url.clone(),
        })
      })
      .collect();
    Self { principals }
  }
}

impl IdentityProvider for StaticTokenProvider {
  fn resolve(&self, bearer_token: Option<&str>) -> AuthState {
    let Some(token) = bearer_token else {
      return AuthState::Anonymous;
    };
    match self.principals.get(&token_digest(token)) {
      Some(p) => AuthState::Authenticated(p.clone()),
      None => AuthState::Anonymous,
    }
  }
}

/// SHA-256 hex digest of a raw bearer token.
pub fn token_digest(token: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(token.as_bytes());
  hex::encode(hasher.finalize())
}

// ─── Extractor ────────────────────────────────────────────────────────────────

fn bearer_from_headers(headers: &HeaderMap) -> Option<&str> {
  headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
}

/// The authenticated principal for this request.
///
/// Present in a handler signature means the request carried a valid token;
/// anonymous requests are rejected with 401 before the handler runs.
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<AppState<S>> for CurrentPrincipal
where
  S: EntryStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_from_headers(&parts.headers);
    match state.idp.resolve(token) {
      AuthState::Authenticated(principal) => Ok(CurrentPrincipal(principal)),
      AuthState::Anonymous | AuthState::Unresolved => {
        Err(ApiError::Unauthorized)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::http::{Request, header};
  use quill_core::entry::{Entry, NewEntry};
  use quill_core::store::StoreError;
  use uuid::Uuid;

  use super::*;

  // A minimal no-op store for testing auth only.
  #[derive(Clone)]
  struct NoopStore;

  impl EntryStore for NoopStore {
    async fn create(
      &self,
      _: &PrincipalId,
      _: NewEntry,
    ) -> Result<Entry, StoreError> {
      unimplemented!()
    }
    async fn list_by_owner(
      &self,
      _: &PrincipalId,
    ) -> Result<Vec<Entry>, StoreError> {
      unimplemented!()
    }
    async fn delete(&self, _: &PrincipalId, _: Uuid) -> Result<(), StoreError> {
      unimplemented!()
    }
  }

  fn make_state(token: &str) -> AppState<NoopStore> {
    let cfg = PrincipalConfig {
      token_sha256: token_digest(token),
      id:           "user-abc".to_string(),
      display_name: Some("A. User".to_string()),
      email:        None,
      avatar_url:   None,
    };
    AppState {
      store: Arc::new(NoopStore),
      idp:   Arc::new(StaticTokenProvider::from_config(&[cfg])),
    }
  }

  async fn extract(
    req: Request<axum::body::Body>,
    state: &AppState<NoopStore>,
  ) -> Result<CurrentPrincipal, ApiError> {
    let (mut parts, _) = req.into_parts();
    CurrentPrincipal::from_request_parts(&mut parts, state).await
  }

  #[tokio::test]
  async fn valid_token_resolves_principal() {
    let state = make_state("secret-token");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Bearer secret-token")
      .body(axum::body::Body::empty())
      .unwrap();
    let CurrentPrincipal(principal) = extract(req, &state).await.unwrap();
    assert_eq!(principal.id.as_str(), "user-abc");
  }

  #[tokio::test]
  async fn unknown_token_is_rejected() {
    let state = make_state("secret-token");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Bearer wrong-token")
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn missing_header_is_rejected() {
    let state = make_state("secret-token");
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn non_bearer_scheme_is_rejected() {
    let state = make_state("secret-token");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Basic c2VjcmV0")
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[test]
  fn digest_is_lowercase_hex() {
    let digest = token_digest("secret-token");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(digest, digest.to_lowercase());
  }
}
