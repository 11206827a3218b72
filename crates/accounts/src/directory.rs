//! Account directory: username-keyed registry with authentication.

use std::collections::HashMap;

use inkshop_core::DomainError;

use crate::account::{Account, AccountError};

/// Username-keyed account registry for one application session.
///
/// Registration runs in the single-threaded bootstrap phase, so the
/// directory needs no internal locking; afterwards it is only read.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, hash and store a new account.
    ///
    /// Usernames are unique keys: registering a name that is already taken
    /// is a conflict, never a silent overwrite of the existing credentials.
    pub fn register(&mut self, username: &str, password: &str) -> Result<&Account, AccountError> {
        if self.accounts.contains_key(username) {
            return Err(DomainError::conflict(format!(
                "username '{username}' is already registered"
            ))
            .into());
        }

        let account = Account::new(username, password)?;
        tracing::info!(username, account_id = %account.id(), "account registered");

        Ok(self.accounts.entry(username.to_string()).or_insert(account))
    }

    /// Exact-match lookup by username.
    pub fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Authenticate a login attempt.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller; both come back as `None`.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Account> {
        match self.account(username) {
            Some(account) if account.verify_password(password) => {
                tracing::debug!(username, "authentication succeeded");
                Some(account)
            }
            _ => {
                tracing::warn!(username, "authentication failed");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
