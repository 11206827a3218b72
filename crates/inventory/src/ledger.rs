//! Per-book stock counts with check-and-decrement semantics.

use serde::Serialize;

use inkshop_catalog::Book;

/// One ledger row: a book and its on-hand quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockEntry {
    pub book: Book,
    pub on_hand: u32,
}

/// Mutable per-book stock counts, kept in first-seen order.
///
/// Quantities are unsigned, so stock can structurally never go negative;
/// `try_remove` refuses any debit the current count cannot cover.
///
/// The ledger itself is not synchronized. Concurrent access goes through
/// [`crate::SharedLedger`], which serializes every operation behind one
/// mutex.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    entries: Vec<StockEntry>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the available quantity for `book`, creating the row the
    /// first time a book is seen.
    pub fn add(&mut self, book: &Book, quantity: u32) {
        match self.entries.iter_mut().find(|entry| &entry.book == book) {
            Some(entry) => entry.on_hand += quantity,
            None => self.entries.push(StockEntry {
                book: book.clone(),
                on_hand: quantity,
            }),
        }
    }

    /// Check-and-decrement: debit `quantity` units if available.
    ///
    /// On shortfall the ledger is left untouched and `false` is returned.
    /// A book the ledger has never seen counts as zero stock.
    pub fn try_remove(&mut self, book: &Book, quantity: u32) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.book == book) {
            Some(entry) if entry.on_hand >= quantity => {
                entry.on_hand -= quantity;
                true
            }
            _ => {
                tracing::debug!(title = book.title(), quantity, "debit refused: insufficient stock");
                false
            }
        }
    }

    /// Current quantity for `book`.
    ///
    /// Advisory only under concurrent access: the value may be stale by the
    /// time the caller acts on it. Mutations must re-check inside
    /// `try_remove`, never gate on this read alone.
    pub fn available_stock(&self, book: &Book) -> u32 {
        self.entries
            .iter()
            .find(|entry| &entry.book == book)
            .map(|entry| entry.on_hand)
            .unwrap_or(0)
    }

    /// Point-in-time copy of every row, in first-seen order.
    pub fn snapshot_all(&self) -> Vec<StockEntry> {
        self.entries.clone()
    }
}
