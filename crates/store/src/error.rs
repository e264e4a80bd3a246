//! Storage fault taxonomy.

/// Failure raised by a [`StorageBackend`](crate::backend::StorageBackend).
///
/// The store absorbs these at its boundary (logged, never propagated), but
/// they are typed so embedders wiring a custom backend can report precise
/// causes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Backend(String),
}
