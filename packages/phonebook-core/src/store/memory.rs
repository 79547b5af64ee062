//! In-memory entry table.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::entry::{Entry, EntryPatch, NewEntry};
use crate::error::StoreError;
use crate::store::EntryStore;

/// Entry store backed by a single in-memory row table.
///
/// Each operation takes the table lock exactly once, so concurrent
/// requests see per-statement atomicity and nothing stronger.
#[derive(Debug)]
pub struct MemoryStore {
    /// Entry rows in insertion order
    rows: RwLock<Vec<Entry>>,
    /// Next id to assign
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Creates an empty store with an initial row capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: RwLock::new(Vec::with_capacity(capacity)),
            next_id: AtomicU64::new(1), // Start IDs at 1
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for MemoryStore {
    fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.clone())
    }

    fn create(&self, entry: NewEntry) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.push(Entry {
            id,
            firstname: entry.firstname,
            surname: entry.surname,
            number: entry.number,
            address: entry.address,
        });
        tracing::debug!("created entry {}", id);
        Ok(id)
    }

    fn exists(&self, id: u64) -> Result<bool, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.iter().any(|row| row.id == id))
    }

    fn update(&self, id: u64, patch: EntryPatch) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            patch.apply_to(row);
            tracing::debug!("updated entry {}", id);
        }
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned)?;
        rows.retain(|row| row.id != id);
        tracing::debug!("deleted entry {}", id);
        Ok(())
    }
}
