//! Handlers for `/entries` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/entries` | Current principal's entries, most recent first |
//! | `POST`   | `/entries` | Body: `{"content":"..."}`; returns 201 + stored entry |
//! | `DELETE` | `/entries/{id}` | 204; 403 when owned by another principal |
//!
//! All routes require a valid bearer token. Failures never mutate state:
//! a rejected create adds nothing, a rejected delete removes nothing.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use quill_core::{
  entry::{Entry, NewEntry},
  store::EntryStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, auth::CurrentPrincipal, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /entries`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<Vec<Entry>>, ApiError>
where
  S: EntryStore + Clone + Send + Sync + 'static,
{
  let entries = state.store.list_by_owner(&principal.id).await?;
  Ok(Json(entries))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /entries`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub content: String,
}

/// `POST /entries` — returns 201 + the stored [`Entry`].
pub async fn create<S>(
  State(state): State<AppState<S>>,
  CurrentPrincipal(principal): CurrentPrincipal,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EntryStore + Clone + Send + Sync + 'static,
{
  let input = NewEntry::new(principal.id.clone(), &body.content)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  let entry = state.store.create(&principal.id, input).await?;
  Ok((StatusCode::CREATED, Json(entry)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /entries/{id}`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  CurrentPrincipal(principal): CurrentPrincipal,
  Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EntryStore + Clone + Send + Sync + 'static,
{
  state.store.delete(&principal.id, id).await?;
  Ok(StatusCode::NO_CONTENT)
}
