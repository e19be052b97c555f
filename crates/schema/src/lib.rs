//! Entity types and boundary validation.
//!
//! Untrusted input only becomes an `InsertTodo` / `InsertUser` by passing
//! through `validate`, so storage never sees a malformed payload.

pub mod error;
pub mod todo;
pub mod user;

pub use error::ValidationError;
pub use todo::{InsertTodo, Todo};
pub use user::{InsertUser, User};
