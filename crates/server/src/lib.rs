//! HTTP routing layer (axum).
//!
//! Two JSON routes under `/api/todos` plus the embedded client page.
//! Storage is injected through [`AppState`] so tests can substitute a
//! double.

pub mod config;
pub mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_storage::{MemStorage, Storage};

/// Shared application state, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            storage: Arc::new(MemStorage::new()),
        }
    }
}

/// Router over a fresh in-memory store.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Router with injected state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/app.js", get(handlers::client_js))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .with_state(state)
}
