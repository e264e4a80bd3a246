//! Domain model and validation for the account-list editor.
//!
//! Everything here is pure in-memory logic with zero I/O:
//!
//! - [`Account`] and its companion types — the credential record family.
//! - [`labels`] — codec between the stored label list and the editable
//!   delimited-string form.
//! - [`AccountValidator`] — per-record, per-field error tracking.
//!
//! Persistence lives in `accbook-store`; rendering belongs to the embedding
//! application.

pub mod account;
pub mod labels;
pub mod validation;

pub use account::{Account, AccountFormState, AccountPatch, AccountType, LabelItem};
pub use labels::{labels_to_string, parse_labels};
pub use validation::{
    AccountErrors, AccountField, AccountValidator, LABELS_MAX, LOGIN_MAX, PASSWORD_MAX,
};
