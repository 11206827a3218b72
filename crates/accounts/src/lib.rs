//! Accounts domain module.
//!
//! Registration, credential storage and authentication for store accounts.
//! The directory is an explicit value handed to whoever needs it; there is
//! no process-wide registry hiding behind a static.

pub mod account;
pub mod directory;

pub use account::{Account, AccountError, AccountId};
pub use directory::AccountDirectory;
