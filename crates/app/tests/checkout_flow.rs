//! End-to-end checkout flow over the seeded storefront.

use std::sync::Mutex;

use inkshop_accounts::AccountDirectory;
use inkshop_app::checkout::{CheckoutJob, run_checkouts};
use inkshop_app::seed;
use inkshop_orders::{FulfillmentOutcome, OrderProcessor};

#[test]
fn both_seeded_orders_fulfill_against_the_shared_ledger() {
    let mut directory = AccountDirectory::new();
    let storefront = seed::seed(&mut directory).unwrap();
    let (book1, book2) = &storefront.books;

    let processor = OrderProcessor::new(storefront.ledger.clone());
    let jobs = vec![
        CheckoutJob {
            account: directory.account(seed::USER1).unwrap(),
            cart_snapshot: storefront.carts.0.snapshot(),
        },
        CheckoutJob {
            account: directory.account(seed::USER2).unwrap(),
            cart_snapshot: storefront.carts.1.snapshot(),
        },
    ];

    let out = Mutex::new(Vec::new());
    let outcomes = run_checkouts(&processor, jobs, &out);

    assert!(
        outcomes
            .iter()
            .all(|o| matches!(o, FulfillmentOutcome::Fulfilled(_)))
    );

    // Each order debits one unit per line: book1 twice in total, book2 once.
    assert_eq!(storefront.ledger.available_stock(book1), 48);
    assert_eq!(storefront.ledger.available_stock(book2), 29);

    let output = String::from_utf8(out.into_inner().unwrap()).unwrap();
    assert!(output.contains("Total: $45.98"), "output was:\n{output}");
    assert!(output.contains("Total: $25.99"), "output was:\n{output}");
    assert_eq!(output.matches("Current Inventory:").count(), 2);

    // Ids are assigned per placement: 1 and 2 in some order.
    assert!(output.contains("Order 1 Total:"));
    assert!(output.contains("Order 2 Total:"));
}

#[test]
fn order_ids_stay_unique_when_checkouts_repeat() {
    let mut directory = AccountDirectory::new();
    let storefront = seed::seed(&mut directory).unwrap();
    let processor = OrderProcessor::new(storefront.ledger.clone());

    for round in 0..3 {
        let jobs = vec![
            CheckoutJob {
                account: directory.account(seed::USER1).unwrap(),
                cart_snapshot: storefront.carts.1.snapshot(),
            },
            CheckoutJob {
                account: directory.account(seed::USER2).unwrap(),
                cart_snapshot: storefront.carts.1.snapshot(),
            },
        ];

        let out = Mutex::new(Vec::new());
        let outcomes = run_checkouts(&processor, jobs, &out);
        assert_eq!(outcomes.len(), 2);

        let output = String::from_utf8(out.into_inner().unwrap()).unwrap();
        let first = 2 * round + 1;
        let second = 2 * round + 2;
        assert!(output.contains(&format!("Order {first} ")));
        assert!(output.contains(&format!("Order {second} ")));
    }
}
