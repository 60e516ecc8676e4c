//! Persistence
//!
//! Key-to-JSON-blob storage behind an injectable backend, with a typed
//! repository facade over the tracked collections.

mod backend;
pub mod keys;
mod repository;

pub use backend::{MemoryBackend, SqliteBackend, StorageBackend, StoreError, StoreResult};
pub use repository::Repository;
