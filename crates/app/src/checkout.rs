//! Concurrent checkout: a fixed pool of worker threads, one per order.

use std::io::Write;
use std::sync::Mutex;
use std::thread;

use inkshop_accounts::Account;
use inkshop_catalog::Book;
use inkshop_orders::{FulfillmentOutcome, OrderProcessor};

use crate::report;

/// One unit of checkout work: an account and the cart snapshot it submits.
pub struct CheckoutJob<'a> {
    pub account: &'a Account,
    pub cart_snapshot: Vec<Book>,
}

/// Run every job on its own worker thread against the shared processor.
///
/// Workers block on the ledger lock; whichever gets there first is
/// serviced first, and one order's rejection never stops another. Each
/// worker renders its whole report and writes it through the shared writer
/// as one block, so reports from concurrent orders never interleave
/// line-by-line.
///
/// Outcomes are returned in job order, regardless of completion order.
pub fn run_checkouts<W: Write + Send>(
    processor: &OrderProcessor,
    jobs: Vec<CheckoutJob<'_>>,
    out: &Mutex<W>,
) -> Vec<FulfillmentOutcome> {
    thread::scope(|scope| {
        let workers: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                scope.spawn(move || {
                    let mut order = processor.place_order(job.account, job.cart_snapshot);
                    let outcome = processor
                        .fulfill(&mut order)
                        .expect("a freshly priced order is fulfillable exactly once");

                    let block = report::render(&outcome);
                    let mut out = out.lock().expect("report writer lock poisoned");
                    out.write_all(block.as_bytes())
                        .and_then(|_| out.flush())
                        .expect("failed to write order report");

                    outcome
                })
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().expect("checkout worker panicked"))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkshop_accounts::AccountDirectory;
    use inkshop_inventory::{InventoryLedger, SharedLedger};
    use crate::seed;

    #[test]
    fn one_unit_of_stock_satisfies_exactly_one_of_two_orders() {
        let mut directory = AccountDirectory::new();
        let storefront = seed::seed(&mut directory).unwrap();
        let book1 = &storefront.books.0;

        // Rebuild the ledger with a single contested unit.
        let ledger = SharedLedger::new(InventoryLedger::new());
        ledger.add(book1, 1);
        let processor = OrderProcessor::new(ledger.clone());

        let jobs = vec![
            CheckoutJob {
                account: directory.account(seed::USER1).unwrap(),
                cart_snapshot: vec![book1.clone()],
            },
            CheckoutJob {
                account: directory.account(seed::USER2).unwrap(),
                cart_snapshot: vec![book1.clone()],
            },
        ];

        let out = Mutex::new(Vec::new());
        let outcomes = run_checkouts(&processor, jobs, &out);

        let fulfilled = outcomes
            .iter()
            .filter(|o| matches!(o, FulfillmentOutcome::Fulfilled(_)))
            .count();
        assert_eq!(fulfilled, 1);
        assert_eq!(ledger.available_stock(book1), 0);

        let output = String::from_utf8(out.into_inner().unwrap()).unwrap();
        assert_eq!(
            output.matches("failed. Not enough stock.").count(),
            1,
            "unexpected output:\n{output}"
        );
    }
}
