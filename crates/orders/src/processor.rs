//! Order processor: prices cart snapshots and attempts atomic fulfillment.

use inkshop_accounts::Account;
use inkshop_catalog::Book;
use inkshop_core::{DomainError, Money};
use inkshop_inventory::{SharedLedger, StockEntry};

use crate::order::{Order, OrderId, OrderSequence, OrderStatus};

/// Result of a successful fulfillment.
///
/// The inventory snapshot is captured inside the same exclusion scope as
/// the debit, so it is always consistent with it.
#[derive(Debug, Clone)]
pub struct FulfillmentReport {
    pub order_id: OrderId,
    pub total: Money,
    pub inventory: Vec<StockEntry>,
}

/// Terminal outcome of a fulfillment attempt.
#[derive(Debug, Clone)]
pub enum FulfillmentOutcome {
    Fulfilled(FulfillmentReport),
    /// The order could not be covered; nothing was debited.
    Rejected {
        order_id: OrderId,
        /// First line (in cart order) whose requirement exceeded stock.
        out_of_stock: Book,
    },
}

/// Prices orders and debits the shared inventory ledger.
///
/// One processor serves all concurrent checkout workers; it owns the id
/// sequence and a handle to the ledger.
#[derive(Debug)]
pub struct OrderProcessor {
    ledger: SharedLedger,
    sequence: OrderSequence,
}

impl OrderProcessor {
    pub fn new(ledger: SharedLedger) -> Self {
        Self {
            ledger,
            sequence: OrderSequence::new(),
        }
    }

    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Assign the next order id and price the cart snapshot.
    ///
    /// The returned order is `Priced` and ready for exactly one
    /// fulfillment attempt.
    pub fn place_order(&self, account: &Account, cart_snapshot: Vec<Book>) -> Order {
        let order = Order::priced(self.sequence.next_id(), account.id(), cart_snapshot);
        tracing::debug!(
            order_id = %order.id(),
            username = account.username(),
            lines = order.lines().len(),
            total = %order.total(),
            "order priced"
        );
        order
    }

    /// One-shot fulfillment against the ledger, all-or-nothing.
    ///
    /// The whole attempt (tallying requirements, verifying them against
    /// available stock, debiting one unit per line in cart order, and
    /// capturing the report snapshot) runs inside a single exclusion
    /// scope. Every requirement is verified before the first debit, so a
    /// rejected order leaves the ledger exactly as it found it.
    ///
    /// Calling this on an order that is already `Fulfilled` or `Rejected`
    /// is a contract violation and returns an invariant error.
    pub fn fulfill(&self, order: &mut Order) -> Result<FulfillmentOutcome, DomainError> {
        if order.status() != OrderStatus::Priced {
            return Err(DomainError::invariant(format!(
                "order {} is already finalized as {:?}",
                order.id(),
                order.status()
            )));
        }

        let outcome = self.ledger.with_exclusive(|ledger| {
            // Units required per distinct book, preserving cart order.
            let mut required: Vec<(&Book, u32)> = Vec::new();
            for book in order.lines() {
                match required.iter_mut().find(|(candidate, _)| *candidate == book) {
                    Some((_, units)) => *units += 1,
                    None => required.push((book, 1)),
                }
            }

            for &(book, units) in &required {
                if ledger.available_stock(book) < units {
                    return FulfillmentOutcome::Rejected {
                        order_id: order.id(),
                        out_of_stock: book.clone(),
                    };
                }
            }

            // Everything is covered; debit one unit per line appearance.
            for book in order.lines() {
                let debited = ledger.try_remove(book, 1);
                debug_assert!(debited, "verified stock vanished inside the exclusion scope");
            }

            FulfillmentOutcome::Fulfilled(FulfillmentReport {
                order_id: order.id(),
                total: order.total(),
                inventory: ledger.snapshot_all(),
            })
        });

        match &outcome {
            FulfillmentOutcome::Fulfilled(report) => {
                order.finalize(OrderStatus::Fulfilled);
                tracing::info!(order_id = %report.order_id, total = %report.total, "order fulfilled");
            }
            FulfillmentOutcome::Rejected { order_id, out_of_stock } => {
                order.finalize(OrderStatus::Rejected);
                tracing::warn!(
                    order_id = %order_id,
                    title = out_of_stock.title(),
                    "order rejected: insufficient stock"
                );
            }
        }

        Ok(outcome)
    }
}
