//! Inventory domain module.
//!
//! The ledger is the mutable source of truth for per-book available stock.
//! [`InventoryLedger`] holds the counts; [`SharedLedger`] is the only door
//! concurrent code goes through.

pub mod ledger;
pub mod shared;

pub use ledger::{InventoryLedger, StockEntry};
pub use shared::SharedLedger;
