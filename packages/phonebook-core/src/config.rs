//! Service configuration.

/// Service configuration shared with the HTTP layer.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Initial row capacity for the in-memory store
    pub initial_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000, // 5 seconds default
            initial_capacity: 1024,
        }
    }
}
