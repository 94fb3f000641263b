//! User identity and account models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every per-user snapshot key.
pub const STORAGE_PREFIX: &str = "trainpi-user-";
/// Key suffix used when nobody is signed in.
pub const GUEST_KEY: &str = "guest";
/// Key of the global account list.
pub const ACCOUNTS_KEY: &str = "trainpi-users";

/// Identifier of a registered user.
///
/// Account ids are numeric, but identities handed over by an auth layer may
/// be any string, so the id is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whose snapshot a store operation targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UserIdentity {
    /// Nobody is signed in.
    #[default]
    Guest,
    /// A signed-in user.
    User(UserId),
}

impl UserIdentity {
    pub fn user(id: impl Into<UserId>) -> Self {
        Self::User(id.into())
    }

    /// Resolves an identity from the auth layer's state.
    ///
    /// Without authentication or without an id the identity is `Guest`.
    pub fn from_auth(is_authenticated: bool, user_id: Option<UserId>) -> Self {
        match user_id {
            Some(id) if is_authenticated && !id.as_str().trim().is_empty() => Self::User(id),
            _ => Self::Guest,
        }
    }

    /// The key-value store key holding this identity's snapshot.
    pub fn storage_key(&self) -> String {
        match self {
            UserIdentity::Guest => format!("{}{}", STORAGE_PREFIX, GUEST_KEY),
            UserIdentity::User(id) => format!("{}{}", STORAGE_PREFIX, id),
        }
    }
}

/// An entry of the global account list.
///
/// Passwords are stored and compared as plain text; the account list is a
/// convenience for local sign-in, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl AccountRecord {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::user(self.id)
    }
}

/// The public part of an account, handed to the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u64,
    pub email: String,
    pub full_name: String,
}

impl From<&AccountRecord> for AuthUser {
    fn from(account: &AccountRecord) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            full_name: account.full_name.clone(),
        }
    }
}

/// Result of a successful register or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
}

impl AuthSession {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::user(self.user.id)
    }
}
