//! Core domain logic for the phonebook service.
//!
//! Provides the entry model, request-payload validation, and the
//! record store abstraction with its in-memory implementation.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;
pub mod validate;

pub use entry::{Entry, EntryPatch, NewEntry};
pub use error::StoreError;
pub use store::{EntryStore, MemoryStore};
pub use validate::ValidationError;
