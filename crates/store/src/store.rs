//! Canonical account collection with write-through persistence.

use accbook_core::{Account, AccountPatch};
use uuid::Uuid;

use crate::backend::StorageBackend;
use crate::seed::seed_accounts;

/// Key the serialized account list is persisted under.
pub const STORAGE_KEY: &str = "accounts";

/// Owner of the account list; all mutations go through here.
///
/// Every successful mutation serializes the whole list and saves it under
/// [`STORAGE_KEY`]. Persistence is best-effort: a backend that cannot load
/// yields the seed set, and a backend that cannot save leaves the in-memory
/// list authoritative for the session.
#[derive(Debug)]
pub struct AccountStore<S: StorageBackend> {
    backend: S,
    items: Vec<Account>,
}

impl<S: StorageBackend> AccountStore<S> {
    /// Load prior state from the backend, falling back to the seed set
    /// when nothing usable is stored.
    pub fn new(backend: S) -> Self {
        let items = load_initial(&backend);
        Self { backend, items }
    }

    /// The current account list, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.items
    }

    /// The backend this store writes through to.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Append a fresh record with default values and return it, so the
    /// caller can begin editing it immediately.
    pub fn add_account(&mut self) -> Account {
        let account = Account::new(Uuid::new_v4().to_string());
        self.items.push(account.clone());
        self.persist();
        account
    }

    /// Remove the record with the given id. Unknown ids are a silent no-op
    /// on the list, though the (unchanged) list is still persisted.
    pub fn remove_account(&mut self, id: &str) {
        self.items.retain(|account| account.id != id);
        self.persist();
    }

    /// Merge a partial update into the record with the given id.
    ///
    /// `labels`, `kind`, and `login` are replaced only when the patch
    /// carries them. `password` is replaced whenever the outer option is
    /// set, so `Some(None)` deliberately blanks a stored password while an
    /// unset field keeps it. Unknown ids are a silent no-op and skip the
    /// persist.
    pub fn update_account(&mut self, id: &str, patch: AccountPatch) {
        let Some(account) = self.items.iter_mut().find(|account| account.id == id) else {
            return;
        };
        if let Some(labels) = patch.labels {
            account.labels = labels;
        }
        if let Some(kind) = patch.kind {
            account.kind = kind;
        }
        if let Some(login) = patch.login {
            account.login = login;
        }
        if let Some(password) = patch.password {
            account.password = password;
        }
        self.persist();
    }

    /// Write the current list through to the backend. Failures are logged
    /// and swallowed so a misbehaving backend never interrupts editing.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(key = STORAGE_KEY, error = %error, "Failed to serialize accounts");
                return;
            }
        };
        if let Err(error) = self.backend.save(STORAGE_KEY, &payload) {
            tracing::warn!(key = STORAGE_KEY, error = %error, "Failed to persist accounts");
        }
    }
}

/// Read and parse the persisted list; any failure falls back to seed data.
fn load_initial<S: StorageBackend>(backend: &S) -> Vec<Account> {
    let raw = match backend.load(STORAGE_KEY) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(key = STORAGE_KEY, error = %error, "Failed to load persisted accounts");
            None
        }
    };
    let Some(raw) = raw else {
        return seed_accounts();
    };
    match serde_json::from_str::<Vec<Account>>(&raw) {
        Ok(items) => items,
        Err(error) => {
            tracing::debug!(key = STORAGE_KEY, error = %error, "Persisted accounts unusable, using seed data");
            seed_accounts()
        }
    }
}
