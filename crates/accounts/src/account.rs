//! Account record and credential rules.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inkshop_core::DomainError;

/// Unique identifier for an account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// Username must be 3-20 characters of letters, digits, `_` or `-`.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Password must be at least 6 characters with a letter and a digit.
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// The password hasher itself failed (not a policy rejection).
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// A registered store account.
///
/// The password is held only as a salted argon2 hash; the plaintext never
/// outlives registration or an authentication attempt.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: String,
    password_hash: String,
    registered_at: DateTime<Utc>,
}

impl Account {
    /// Validate credentials and build the account with a freshly salted
    /// password hash.
    pub fn new(username: &str, password: &str) -> Result<Self, AccountError> {
        if !is_valid_username(username) {
            return Err(AccountError::InvalidUsername(format!(
                "'{username}' must be 3-20 characters of letters, digits, '_' or '-'"
            )));
        }
        if !is_valid_password(password) {
            return Err(AccountError::InvalidPassword(
                "must be at least 6 characters and contain a letter and a digit".to_string(),
            ));
        }

        Ok(Self {
            id: AccountId::new(),
            username: username.to_string(),
            password_hash: hash_password(password)?,
            registered_at: Utc::now(),
        })
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Verify a login attempt against the stored hash. Case-sensitive, no
    /// normalization.
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[cfg(test)]
    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Hash a password using Argon2id with a generated salt.
fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::PasswordHash(e.to_string()))
}
