// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP route table and handlers for the local controller.
//!
//! This is the transport binding: each store operation maps to one
//! path/verb pair under `/api`, plus a `/alive` liveness probe. Handlers are
//! thin wrappers that decode path/query parameters and delegate straight to
//! the store; every piece of semantics lives in the domain layer.
//!
//! Route shape:
//!
//! - `GET  /alive` — liveness, returns `"alive"`
//! - `GET  /api/dump` — top-level dump, optional JSON filter body
//! - `GET  /api/:key` — get
//! - `GET  /api/:key/dump` — namespace dump, optional JSON filter body
//! - `GET  /api/:key/:sub` — get within namespace
//! - `PUT  /api/:key/:sub` — set
//! - `POST /api/:key/:sub?delim=` — add
//! - `PUT  /api/:key/:sub/:value` — set within namespace
//! - `POST /api/:key/:sub/:value?delim=` — add within namespace

use crate::domain::ConfigStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path prefix shared by every store operation route.
pub(crate) const API_PREFIX: &str = "/api";

/// Query parameters accepted by the append routes.
#[derive(Debug, Deserialize)]
struct AddParams {
    /// Delimiter inserted between the existing value and the appended one
    #[serde(default)]
    delim: String,
}

/// Builds the controller router over the given store.
pub(crate) fn router(store: Arc<ConfigStore>) -> Router {
    Router::new()
        .route("/alive", get(alive))
        .route("/api/dump", get(dump))
        .route("/api/:key", get(get_value))
        .route("/api/:key/dump", get(dump_for))
        .route("/api/:key/:sub", get(get_for).put(set_value).post(add_value))
        .route("/api/:key/:sub/:value", put(set_for).post(add_for))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn alive() -> &'static str {
    "alive"
}

async fn get_value(State(store): State<Arc<ConfigStore>>, Path(key): Path<String>) -> Response {
    match store.get(&key) {
        Some(value) => (StatusCode::OK, value).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

async fn get_for(
    State(store): State<Arc<ConfigStore>>,
    Path((prefix, key)): Path<(String, String)>,
) -> Response {
    match store.get_for(&prefix, &key) {
        Some(value) => (StatusCode::OK, value).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

async fn set_value(
    State(store): State<Arc<ConfigStore>>,
    Path((key, value)): Path<(String, String)>,
) -> &'static str {
    store.set(&key, &value);
    "ok"
}

async fn set_for(
    State(store): State<Arc<ConfigStore>>,
    Path((prefix, key, value)): Path<(String, String, String)>,
) -> &'static str {
    store.set_for(&prefix, &key, &value);
    "ok"
}

async fn add_value(
    State(store): State<Arc<ConfigStore>>,
    Path((key, value)): Path<(String, String)>,
    Query(params): Query<AddParams>,
) -> &'static str {
    store.add(&key, &value, &params.delim);
    "ok"
}

async fn add_for(
    State(store): State<Arc<ConfigStore>>,
    Path((prefix, key, value)): Path<(String, String, String)>,
    Query(params): Query<AddParams>,
) -> &'static str {
    store.add_for(&prefix, &key, &value, &params.delim);
    "ok"
}

async fn dump(
    State(store): State<Arc<ConfigStore>>,
    filter: Option<Json<Vec<String>>>,
) -> Json<Vec<String>> {
    let filter = filter.map(|Json(f)| f).unwrap_or_default();
    let filter: Vec<&str> = filter.iter().map(String::as_str).collect();
    Json(store.dump_env(&filter))
}

async fn dump_for(
    State(store): State<Arc<ConfigStore>>,
    Path(prefix): Path<String>,
    filter: Option<Json<Vec<String>>>,
) -> Json<Vec<String>> {
    let filter = filter.map(|Json(f)| f).unwrap_or_default();
    let filter: Vec<&str> = filter.iter().map(String::as_str).collect();
    Json(store.dump_env_for(&prefix, &filter))
}
