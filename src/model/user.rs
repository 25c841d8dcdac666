//! # Users
//!
//! Accounts are stored in `users.json` keyed by normalized login.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vote::truthy;

/// All accounts, keyed by normalized login
pub type UserTable = BTreeMap<String, UserRecord>;

/// A stored account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredUser")]
pub struct UserRecord {
    /// Argon2id password hash (never plaintext)
    #[serde(rename = "pw")]
    pub password_hash: String,

    pub admin: bool,
}

/// On-disk forms of a user value
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredUser {
    Current {
        pw: String,
        /// Read by truthiness
        #[serde(default)]
        admin: Value,
    },
    /// Early files stored only the hash
    Legacy(String),
}

impl From<StoredUser> for UserRecord {
    fn from(stored: StoredUser) -> Self {
        match stored {
            StoredUser::Current { pw, admin } => Self {
                password_hash: pw,
                admin: truthy(&admin),
            },
            StoredUser::Legacy(pw) => Self {
                password_hash: pw,
                admin: false,
            },
        }
    }
}

/// Read a stored user table record by record, dropping unreadable entries
pub fn decode_user_table(raw: BTreeMap<String, Value>) -> UserTable {
    raw.into_iter()
        .filter_map(|(login, value)| Some((login, serde_json::from_value(value).ok()?)))
        .collect()
}

/// Logins are case-insensitive and ignore surrounding whitespace.
pub fn normalize_login(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_string_user() {
        let table: UserTable = serde_json::from_str(r#"{"ann": "hash-a"}"#).unwrap();
        let user = &table["ann"];
        assert_eq!(user.password_hash, "hash-a");
        assert!(!user.admin);
    }

    #[test]
    fn test_current_user_round_trip_shape() {
        let table: UserTable =
            serde_json::from_str(r#"{"bob": {"pw": "hash-b", "admin": true}}"#).unwrap();
        assert!(table["bob"].admin);

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["bob"]["pw"], "hash-b");
        assert_eq!(json["bob"]["admin"], true);
    }

    #[test]
    fn test_decode_user_table_drops_only_bad_entries() {
        let raw: BTreeMap<String, Value> = serde_json::from_str(
            r#"{"ann": "hash-a", "bob": {"pw": "hash-b", "admin": 1}, "cat": 42, "dan": {"admin": true}}"#,
        )
        .unwrap();

        let table = decode_user_table(raw);

        assert_eq!(table.len(), 2);
        assert!(!table["ann"].admin);
        assert!(table["bob"].admin);
    }

    #[test]
    fn test_normalize_login() {
        assert_eq!(normalize_login("  Alice "), "alice");
        assert_eq!(normalize_login("   "), "");
    }
}
