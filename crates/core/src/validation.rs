//! Per-record, per-field validation for the account editor.
//!
//! [`AccountValidator`] keeps one error slot per `(account id, field)` pair.
//! Validation failures are data in that map, never `Err` and never a panic;
//! the `validate_*` methods also return a bool so a caller can gate a save
//! without re-reading the map.

use std::collections::HashMap;

use crate::account::AccountType;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum raw length of the delimited labels string.
pub const LABELS_MAX: usize = 50;

/// Maximum trimmed length of a login.
pub const LOGIN_MAX: usize = 100;

/// Maximum length of a password.
pub const PASSWORD_MAX: usize = 100;

/// Message recorded for an empty required field.
const REQUIRED_MESSAGE: &str = "This field is required";

fn max_length_message(max: usize) -> String {
    format!("Maximum {max} characters")
}

// ---------------------------------------------------------------------------
// Error state
// ---------------------------------------------------------------------------

/// The editable fields an error can be recorded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Labels,
    Login,
    Password,
}

/// Per-field validation messages for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountErrors {
    pub labels: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl AccountErrors {
    /// True when no field has an active error.
    pub fn is_empty(&self) -> bool {
        self.labels.is_none() && self.login.is_none() && self.password.is_none()
    }

    fn slot_mut(&mut self, field: AccountField) -> &mut Option<String> {
        match field {
            AccountField::Labels => &mut self.labels,
            AccountField::Login => &mut self.login,
            AccountField::Password => &mut self.password,
        }
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Error state for every account currently being edited.
///
/// One instance backs one editing session; construct more for independent
/// sessions (tests do). Ids with no active errors hold no map entry at all.
#[derive(Debug, Default)]
pub struct AccountValidator {
    errors: HashMap<String, AccountErrors>,
}

impl AccountValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current errors for a record, or an empty set if none are recorded.
    pub fn errors_for(&self, id: &str) -> AccountErrors {
        self.errors.get(id).cloned().unwrap_or_default()
    }

    /// True when the record has any recorded error.
    pub fn has_errors(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }

    /// Store or clear a single field error.
    ///
    /// Clearing the last field for a record drops the whole entry, so a
    /// clean id never leaves an empty placeholder behind.
    pub fn set_error(&mut self, id: &str, field: AccountField, message: Option<String>) {
        match message {
            Some(message) => {
                let entry = self.errors.entry(id.to_string()).or_default();
                *entry.slot_mut(field) = Some(message);
            }
            None => {
                if let Some(entry) = self.errors.get_mut(id) {
                    *entry.slot_mut(field) = None;
                    if entry.is_empty() {
                        self.errors.remove(id);
                    }
                }
            }
        }
    }

    /// Validate the delimited labels string.
    ///
    /// The raw length is checked, so separators and surrounding whitespace
    /// count against the limit.
    pub fn validate_labels(&mut self, id: &str, value: &str) -> bool {
        if value.len() > LABELS_MAX {
            self.set_error(id, AccountField::Labels, Some(max_length_message(LABELS_MAX)));
            return false;
        }
        self.set_error(id, AccountField::Labels, None);
        true
    }

    /// Validate a login. Emptiness is checked before length, so an
    /// all-whitespace value over the limit still reports "required".
    pub fn validate_login(&mut self, id: &str, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.set_error(id, AccountField::Login, Some(REQUIRED_MESSAGE.to_string()));
            return false;
        }
        if trimmed.len() > LOGIN_MAX {
            self.set_error(id, AccountField::Login, Some(max_length_message(LOGIN_MAX)));
            return false;
        }
        self.set_error(id, AccountField::Login, None);
        true
    }

    /// Validate a password for the given account type.
    ///
    /// Passwords do not apply to LDAP accounts: any prior error is cleared
    /// and the value is accepted as-is. Local passwords are required
    /// (untrimmed) and length-limited.
    pub fn validate_password(&mut self, id: &str, value: &str, kind: AccountType) -> bool {
        if kind == AccountType::Ldap {
            self.set_error(id, AccountField::Password, None);
            return true;
        }
        if value.is_empty() {
            self.set_error(id, AccountField::Password, Some(REQUIRED_MESSAGE.to_string()));
            return false;
        }
        if value.len() > PASSWORD_MAX {
            self.set_error(
                id,
                AccountField::Password,
                Some(max_length_message(PASSWORD_MAX)),
            );
            return false;
        }
        self.set_error(id, AccountField::Password, None);
        true
    }

    /// Drop every error for a record. Called when its editing session ends.
    pub fn clear_errors(&mut self, id: &str) {
        self.errors.remove(id);
    }
}
