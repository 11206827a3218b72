//! Shared, mutex-guarded handle to the inventory ledger.

use std::sync::{Arc, Mutex};

use inkshop_catalog::Book;

use crate::ledger::{InventoryLedger, StockEntry};

/// Cloneable handle that serializes all ledger access behind one mutex.
///
/// Single operations each take the lock for their own duration and may
/// interleave between concurrent orders. Anything that must span several
/// operations atomically (a multi-book debit plus the report built from
/// it) runs inside [`SharedLedger::with_exclusive`], so no other task can
/// observe or mutate the ledger mid-sequence. `snapshot_all` can therefore
/// never see a half-applied debit.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<InventoryLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: InventoryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn add(&self, book: &Book, quantity: u32) {
        self.with_exclusive(|ledger| ledger.add(book, quantity));
    }

    pub fn try_remove(&self, book: &Book, quantity: u32) -> bool {
        self.with_exclusive(|ledger| ledger.try_remove(book, quantity))
    }

    pub fn available_stock(&self, book: &Book) -> u32 {
        self.with_exclusive(|ledger| ledger.available_stock(book))
    }

    pub fn snapshot_all(&self) -> Vec<StockEntry> {
        self.with_exclusive(|ledger| ledger.snapshot_all())
    }

    /// Run `f` under the ledger's exclusion scope.
    ///
    /// The lock is held for the whole closure. Whichever task acquires it
    /// first is serviced first; everyone else blocks. A poisoned mutex
    /// means a task panicked mid-mutation: a contract violation, not a
    /// recoverable state.
    pub fn with_exclusive<T>(&self, f: impl FnOnce(&mut InventoryLedger) -> T) -> T {
        let mut guard = self.inner.lock().expect("inventory ledger mutex poisoned");
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkshop_core::Money;
    use std::thread;

    fn book(title: &str) -> Book {
        Book::new(title, "Test Author", Money::from_cents(1000), 0).unwrap()
    }

    #[test]
    fn clones_share_the_same_ledger() {
        let ledger = SharedLedger::new(InventoryLedger::new());
        let dune = book("Dune");

        let clone = ledger.clone();
        clone.add(&dune, 4);

        assert_eq!(ledger.available_stock(&dune), 4);
    }

    #[test]
    fn concurrent_debits_never_lose_an_update() {
        let ledger = SharedLedger::new(InventoryLedger::new());
        let dune = book("Dune");

        let seeded: u32 = 40;
        let attempts_per_worker: u32 = 30;
        ledger.add(&dune, seeded);

        // Two workers demand 60 units of a 40-unit supply: exactly 40
        // debits may succeed no matter how the threads interleave.
        let successes: u32 = thread::scope(|scope| {
            let workers: Vec<_> = (0..2)
                .map(|_| {
                    let handle = ledger.clone();
                    let dune = dune.clone();
                    scope.spawn(move || {
                        (0..attempts_per_worker)
                            .filter(|_| handle.try_remove(&dune, 1))
                            .count() as u32
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).sum()
        });

        assert_eq!(successes, seeded);
        assert_eq!(ledger.available_stock(&dune), 0);
    }

    #[test]
    fn exclusive_scope_spans_multiple_operations() {
        let ledger = SharedLedger::new(InventoryLedger::new());
        let a = book("A");
        let b = book("B");
        ledger.add(&a, 1);
        ledger.add(&b, 1);

        // Debit two books and snapshot inside one scope; the snapshot must
        // reflect both debits.
        let snapshot = ledger.with_exclusive(|inner| {
            assert!(inner.try_remove(&a, 1));
            assert!(inner.try_remove(&b, 1));
            inner.snapshot_all()
        });

        assert!(snapshot.iter().all(|entry| entry.on_hand == 0));
    }
}
