//! JSON HTTP surface for Quill.
//!
//! Exposes an axum [`Router`] backed by any
//! [`EntryStore`](quill_core::store::EntryStore), with bearer-token
//! authentication resolved through an [`IdentityProvider`](auth::IdentityProvider)
//! adapter. Sign-in itself (the federated flow that issues tokens) happens
//! outside this process.

pub mod auth;
pub mod entries;
pub mod error;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{delete, get},
};
use quill_core::store::EntryStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::IdentityProvider;

// ─── Configuration ────────────────────────────────────────────────────────────

/// One provisioned principal in `config.toml`.
#[derive(Deserialize, Clone)]
pub struct PrincipalConfig {
  /// SHA-256 hex digest of the bearer token (see `server --hash-token`).
  pub token_sha256: String,
  /// Opaque principal identifier; becomes the `owner_id` of every entry.
  pub id:           String,
  pub display_name: Option<String>,
  pub email:        Option<String>,
  pub avatar_url:   Option<String>,
}

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  #[serde(default)]
  pub principals: Vec<PrincipalConfig>,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: EntryStore> {
  pub store: Arc<S>,
  pub idp:   Arc<dyn IdentityProvider>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the journal API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: EntryStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/entries", get(entries::list::<S>).post(entries::create::<S>))
    .route("/entries/{id}", delete(entries::delete_one::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[cfg(test)]
mod tests;
