//! Record store abstraction and implementations.

mod memory;

pub use memory::MemoryStore;

use crate::entry::{Entry, EntryPatch, NewEntry};
use crate::error::StoreError;

/// Record store over the single entry table.
///
/// Handlers hold this as `Arc<dyn EntryStore>` so tests can inject
/// isolated stores. Implementations never inspect field content; the
/// validator runs before any mutation reaches the store.
pub trait EntryStore: Send + Sync {
    /// Returns all entries in insertion order.
    fn list(&self) -> Result<Vec<Entry>, StoreError>;

    /// Inserts a new entry and returns its assigned id.
    fn create(&self, entry: NewEntry) -> Result<u64, StoreError>;

    /// Returns whether an entry with the given id exists.
    fn exists(&self, id: u64) -> Result<bool, StoreError>;

    /// Applies the supplied fields to an entry as a column-level
    /// partial update; unsupplied fields keep their prior values.
    ///
    /// Updating an id that vanished after an `exists` probe is a
    /// silent no-op. Callers must reject an all-empty patch first.
    fn update(&self, id: u64, patch: EntryPatch) -> Result<(), StoreError>;

    /// Removes the entry. Hard delete, no tombstone; the id is never
    /// assigned again within the process lifetime.
    fn delete(&self, id: u64) -> Result<(), StoreError>;
}
