//! Fallback example accounts used when no valid persisted state exists.

use accbook_core::{Account, AccountType, LabelItem};

/// The fixed first-run account set: three local accounts with labels and
/// two LDAP accounts without passwords.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".into(),
            labels: vec![LabelItem::new("XXX")],
            kind: AccountType::Local,
            login: "username1".into(),
            password: Some("password1".into()),
        },
        Account {
            id: "2".into(),
            labels: vec![
                LabelItem::new("XXX"),
                LabelItem::new("YYYYYYYYYY"),
                LabelItem::new("IIIIIIII"),
                LabelItem::new("MMMMMMMMM"),
            ],
            kind: AccountType::Local,
            login: "username2".into(),
            password: Some("password2".into()),
        },
        Account {
            id: "3".into(),
            labels: vec![LabelItem::new("XXX")],
            kind: AccountType::Local,
            login: "username3".into(),
            password: Some("password3".into()),
        },
        Account {
            id: "4".into(),
            labels: vec![],
            kind: AccountType::Ldap,
            login: "username4".into(),
            password: None,
        },
        Account {
            id: "5".into(),
            labels: vec![],
            kind: AccountType::Ldap,
            login: "username5".into(),
            password: None,
        },
    ]
}
