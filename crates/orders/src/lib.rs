//! Orders domain module.
//!
//! An order is a priced snapshot of a cart with a terminal fulfillment
//! outcome: Priced → Fulfilled or Priced → Rejected, decided exactly once
//! against the shared inventory ledger.

pub mod order;
pub mod processor;

pub use order::{Order, OrderId, OrderSequence, OrderStatus};
pub use processor::{FulfillmentOutcome, FulfillmentReport, OrderProcessor};
