//! End-to-end router tests against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Request, StatusCode, header},
  response::Response,
};
use quill_core::entry::Entry;
use quill_store_sqlite::SqliteStore;
use serde_json::json;
use tower::ServiceExt as _;

use crate::{
  AppState, PrincipalConfig,
  auth::{StaticTokenProvider, token_digest},
  router,
};

const ALICE_TOKEN: &str = "alice-token";
const BOB_TOKEN: &str = "bob-token";

fn principal_cfg(token: &str, id: &str) -> PrincipalConfig {
  PrincipalConfig {
    token_sha256: token_digest(token),
    id:           id.to_string(),
    display_name: None,
    email:        None,
    avatar_url:   None,
  }
}

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  let principals = vec![
    principal_cfg(ALICE_TOKEN, "user-alice"),
    principal_cfg(BOB_TOKEN, "user-bob"),
  ];
  let state = AppState {
    store: Arc::new(store),
    idp:   Arc::new(StaticTokenProvider::from_config(&principals)),
  };
  router(state)
}

fn get_entries(token: &str) -> Request<Body> {
  Request::builder()
    .uri("/entries")
    .header(header::AUTHORIZATION, format!("Bearer {token}"))
    .body(Body::empty())
    .unwrap()
}

fn post_entry(token: &str, content: &str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/entries")
    .header(header::AUTHORIZATION, format!("Bearer {token}"))
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(json!({ "content": content }).to_string()))
    .unwrap()
}

fn delete_entry(token: &str, id: &str) -> Request<Body> {
  Request::builder()
    .method("DELETE")
    .uri(format!("/entries/{id}"))
    .header(header::AUTHORIZATION, format!("Bearer {token}"))
    .body(Body::empty())
    .unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(res: Response) -> T {
  let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

// ─── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unauthenticated_list_is_rejected() {
  let app = app().await;
  let res = app.oneshot(get_entries_without_auth()).await.unwrap();
  assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
  assert!(res.headers().contains_key(header::WWW_AUTHENTICATE));
}

fn get_entries_without_auth() -> Request<Body> {
  Request::builder()
    .uri("/entries")
    .body(Body::empty())
    .unwrap()
}

// ─── Create / list ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_list() {
  let app = app().await;

  let res = app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "My journal entry"))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::CREATED);
  let created: Entry = json_body(res).await;
  assert_eq!(created.content, "My journal entry");
  assert_eq!(created.owner_id.as_str(), "user-alice");

  let res = app.oneshot(get_entries(ALICE_TOKEN)).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  let entries: Vec<Entry> = json_body(res).await;
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].entry_id, created.entry_id);
}

#[tokio::test]
async fn create_trims_content() {
  let app = app().await;
  let res = app
    .oneshot(post_entry(ALICE_TOKEN, "  padded  "))
    .await
    .unwrap();
  let created: Entry = json_body(res).await;
  assert_eq!(created.content, "padded");
}

#[tokio::test]
async fn blank_content_is_rejected() {
  let app = app().await;
  let res = app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "   \n\t"))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::BAD_REQUEST);

  // The rejected create added nothing.
  let res = app.oneshot(get_entries(ALICE_TOKEN)).await.unwrap();
  let entries: Vec<Entry> = json_body(res).await;
  assert!(entries.is_empty());
}

#[tokio::test]
async fn list_is_scoped_to_requesting_principal() {
  let app = app().await;

  app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "alice's entry"))
    .await
    .unwrap();

  let res = app.oneshot(get_entries(BOB_TOKEN)).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  let entries: Vec<Entry> = json_body(res).await;
  assert!(entries.is_empty());
}

#[tokio::test]
async fn list_is_most_recent_first() {
  let app = app().await;

  app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "first"))
    .await
    .unwrap();
  app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "second"))
    .await
    .unwrap();

  let res = app.oneshot(get_entries(ALICE_TOKEN)).await.unwrap();
  let entries: Vec<Entry> = json_body(res).await;
  assert_eq!(entries.len(), 2);
  assert!(entries[0].created_at >= entries[1].created_at);
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_own_entry() {
  let app = app().await;

  let res = app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "short-lived"))
    .await
    .unwrap();
  let created: Entry = json_body(res).await;

  let res = app
    .clone()
    .oneshot(delete_entry(ALICE_TOKEN, &created.entry_id.to_string()))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::NO_CONTENT);

  let res = app.oneshot(get_entries(ALICE_TOKEN)).await.unwrap();
  let entries: Vec<Entry> = json_body(res).await;
  assert!(entries.is_empty());
}

#[tokio::test]
async fn delete_other_owners_entry_is_forbidden() {
  let app = app().await;

  let res = app
    .clone()
    .oneshot(post_entry(ALICE_TOKEN, "private"))
    .await
    .unwrap();
  let created: Entry = json_body(res).await;

  let res = app
    .clone()
    .oneshot(delete_entry(BOB_TOKEN, &created.entry_id.to_string()))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::FORBIDDEN);

  // The denied delete left the entry in place.
  let res = app.oneshot(get_entries(ALICE_TOKEN)).await.unwrap();
  let entries: Vec<Entry> = json_body(res).await;
  assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn delete_unknown_entry_is_not_found() {
  let app = app().await;
  let res = app
    .oneshot(delete_entry(
      ALICE_TOKEN,
      "00000000-0000-0000-0000-000000000000",
    ))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
