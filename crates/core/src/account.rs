//! Account record types shared by the store and the editing UI.

use serde::{Deserialize, Serialize};

use crate::labels::{labels_to_string, parse_labels};

// ---------------------------------------------------------------------------
// Account type
// ---------------------------------------------------------------------------

/// Kind of credential an account holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Local,
    Ldap,
}

impl AccountType {
    /// Human-readable label for type pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Ldap => "LDAP",
        }
    }

    /// Serialized name, matching the persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Ldap => "ldap",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single free-text tag attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelItem {
    pub text: String,
}

impl LabelItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A stored credential record.
///
/// `id` is opaque and immutable after creation. `password` is `None` for
/// LDAP accounts (serialized as JSON `null`); it carries no meaning there
/// and never blocks validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub labels: Vec<LabelItem>,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub login: String,
    pub password: Option<String>,
}

impl Account {
    /// A fresh record with default field values, ready for editing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            kind: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// Editing representations
// ---------------------------------------------------------------------------

/// Partial field set accepted by `AccountStore::update_account`.
///
/// `labels`, `kind`, and `login` mean "keep the current value" when unset.
/// `password` nests a second option so a caller can distinguish "keep"
/// (`None`) from "overwrite, possibly with null" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub labels: Option<Vec<LabelItem>>,
    pub kind: Option<AccountType>,
    pub login: Option<String>,
    pub password: Option<Option<String>>,
}

/// Transient editing representation of an account.
///
/// Labels are flattened to one `;`-delimited string while the record sits
/// in the editor. Never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFormState {
    pub labels: String,
    pub kind: AccountType,
    pub login: String,
    pub password: String,
}

impl AccountFormState {
    /// Build the editable view of a stored record.
    pub fn from_account(account: &Account) -> Self {
        Self {
            labels: labels_to_string(&account.labels),
            kind: account.kind,
            login: account.login.clone(),
            password: account.password.clone().unwrap_or_default(),
        }
    }

    /// Convert the edited fields back into a patch for the store.
    ///
    /// LDAP accounts get their password nulled out on submit, so a record
    /// switched from local to LDAP does not keep a stale secret around.
    pub fn into_patch(self) -> AccountPatch {
        let password = match self.kind {
            AccountType::Ldap => Some(None),
            AccountType::Local => Some(Some(self.password)),
        };
        AccountPatch {
            labels: Some(parse_labels(&self.labels)),
            kind: Some(self.kind),
            login: Some(self.login),
            password,
        }
    }
}
