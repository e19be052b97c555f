use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ValidationError;

/// A stored todo. `id` is server-assigned at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
}

/// Validated payload for creating a todo.
///
/// Only obtainable through [`InsertTodo::validate`], so the title is
/// guaranteed trimmed and non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTodo {
    title: String,
}

impl InsertTodo {
    /// Validates an arbitrary JSON value into a creation payload.
    ///
    /// Accepts only a `title` field that is a string with trimmed length
    /// >= 1. Every other field (including a client-supplied `id`) is
    /// ignored.
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if title.is_empty() {
            return Err(ValidationError::new("title", "Title cannot be empty"));
        }
        Ok(Self {
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_title(self) -> String {
        self.title
    }
}
