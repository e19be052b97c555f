//! Storage interface and the in-memory implementation.
//!
//! `Storage` is the extension point: the routing layer only depends on
//! `Arc<dyn Storage>`, so a durable backend can be substituted without
//! touching it. Exactly one concrete variant exists in scope.

mod mem;

pub use mem::MemStorage;

use thiserror::Error;
use todo_schema::{InsertTodo, InsertUser, Todo, User};
use uuid::Uuid;

/// Storage-layer failure. `MemStorage` only fails if a lock is poisoned;
/// a durable backend would surface its I/O faults here.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// The five operations the application needs. Absence is `Ok(None)`,
/// never an error.
pub trait Storage: Send + Sync {
    /// Fetch a user by id.
    fn user(&self, id: Uuid) -> Result<Option<User>, StorageError>;

    /// Fetch a user by exact username match. Behavior with duplicate
    /// usernames is unspecified; creation does not enforce uniqueness.
    fn user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Assign a fresh id, store the user, return the stored record.
    fn create_user(&self, data: InsertUser) -> Result<User, StorageError>;

    /// Snapshot of all todos in insertion order. The returned vec is a
    /// copy; mutating it does not affect the store.
    fn all_todos(&self) -> Result<Vec<Todo>, StorageError>;

    /// Assign a fresh id, store the todo, return the stored record.
    /// Input is already validated upstream.
    fn create_todo(&self, data: InsertTodo) -> Result<Todo, StorageError>;
}
