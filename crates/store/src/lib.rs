//! Persisted account collection for the account-list editor.
//!
//! [`AccountStore`] owns the canonical, ordered account list and writes it
//! through to a pluggable [`StorageBackend`] after every mutation. The
//! backend is best-effort in both directions: load failures fall back to
//! the seed set and save failures leave the in-memory list authoritative
//! for the session, each logged at `warn` rather than surfaced.

pub mod backend;
pub mod error;
pub mod seed;
pub mod store;

pub use accbook_core::{labels_to_string, parse_labels};
pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use error::StorageError;
pub use seed::seed_accounts;
pub use store::{AccountStore, STORAGE_KEY};
