use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use todo_schema::{InsertTodo, ValidationError};

use crate::error::ApiError;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const APP_JS: &str = include_str!("../assets/app.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn client_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], APP_JS)
}

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    tracing::info!(method = "GET", path = "/api/todos", "incoming request");

    let todos = state
        .storage
        .all_todos()
        .map_err(|e| ApiError::internal("Failed to fetch todos", e))?;
    Ok((StatusCode::OK, Json(todos)).into_response())
}

/// POST /api/todos
///
/// The body is parsed by hand rather than with the `Json` extractor so a
/// malformed body surfaces as the same 400 shape as a failed validation.
pub async fn create_todo(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, ApiError> {
    tracing::info!(method = "POST", path = "/api/todos", "incoming request");

    let value: Value = serde_json::from_str(&body)
        .map_err(|e| ValidationError::new("body", format!("Invalid JSON: {e}")))?;
    let input = InsertTodo::validate(&value)?;

    let todo = state
        .storage
        .create_todo(input)
        .map_err(|e| ApiError::internal("Failed to create todo", e))?;

    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)).into_response())
}
