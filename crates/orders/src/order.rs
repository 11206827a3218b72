//! Order record, identifier sequence and lifecycle states.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use inkshop_accounts::AccountId;
use inkshop_catalog::Book;
use inkshop_core::Money;

/// Sequential order identifier: unique and monotonic for the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out order ids starting at 1. Safe to share across worker threads.
#[derive(Debug)]
pub struct OrderSequence {
    next: AtomicU64,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> OrderId {
        OrderId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Order lifecycle.
///
/// `Priced` is the only state a fulfillment attempt may start from;
/// `Fulfilled` and `Rejected` are terminal. There is no retry or
/// resubmission path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Priced,
    Fulfilled,
    Rejected,
}

/// A priced order: one line per cart appearance, quantity one each.
///
/// Id, lines and total are fixed at creation; only the status moves, and
/// only once.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    account_id: AccountId,
    lines: Vec<Book>,
    total: Money,
    status: OrderStatus,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Price a cart snapshot: the total is the sum of unit prices, one per
    /// line appearance. No quantity discounts, no tax.
    pub(crate) fn priced(id: OrderId, account_id: AccountId, lines: Vec<Book>) -> Self {
        let total = lines.iter().map(Book::unit_price).sum();
        Self {
            id,
            account_id,
            lines,
            total,
            status: OrderStatus::Priced,
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn lines(&self) -> &[Book] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub(crate) fn finalize(&mut self, status: OrderStatus) {
        debug_assert_eq!(self.status, OrderStatus::Priced, "order finalized twice");
        self.status = status;
    }
}
