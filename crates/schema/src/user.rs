use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ValidationError;

/// A stored user.
///
/// `username` is declared unique but creation does not enforce it, and the
/// password is stored verbatim. No route exercises this entity; it exists
/// so the storage interface covers both collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Validated payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl InsertUser {
    /// Requires `username` and `password` to be present as strings.
    /// Presence only; emptiness is not checked beyond that.
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let username = value
            .get("username")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::new("username", "Username is required"))?;
        let password = value
            .get("password")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::new("password", "Password is required"))?;
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
