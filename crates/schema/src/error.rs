use thiserror::Error;

/// A field-level validation failure.
///
/// Returned as a value, never thrown across the boundary. `message` is the
/// human-readable detail surfaced to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
