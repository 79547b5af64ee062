//! Store error types.

use thiserror::Error;

/// Record store failures.
///
/// Validation problems never surface here; the store trusts its callers
/// to have validated field content already.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}
