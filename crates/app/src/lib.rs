//! `inkshop-app` — the interactive bookstore simulation binary.
//!
//! Wires the seeded storefront, console login and the two concurrent
//! checkout workers together. Everything testable lives here; `main` only
//! initializes observability and calls [`run`].

pub mod checkout;
pub mod report;
pub mod seed;
pub mod session;

use std::io;
use std::sync::Mutex;

use inkshop_orders::OrderProcessor;

use crate::checkout::CheckoutJob;

/// Run the whole simulation against real stdin/stdout.
///
/// A failed login is a clean exit (status 0), not an error.
pub fn run() -> anyhow::Result<()> {
    let mut directory = inkshop_accounts::AccountDirectory::new();
    let storefront = seed::seed(&mut directory)?;

    let stdin = io::stdin();
    let Some(account) =
        session::login(&directory, &mut stdin.lock(), &mut io::stdout())?
    else {
        return Ok(());
    };
    tracing::info!(username = account.username(), "session started");

    // The two hard-coded orders: one per seeded account, independent of
    // who just logged in.
    let user1 = directory
        .account(seed::USER1)
        .expect("seeded account missing");
    let user2 = directory
        .account(seed::USER2)
        .expect("seeded account missing");

    let processor = OrderProcessor::new(storefront.ledger.clone());
    let jobs = vec![
        CheckoutJob {
            account: user1,
            cart_snapshot: storefront.carts.0.snapshot(),
        },
        CheckoutJob {
            account: user2,
            cart_snapshot: storefront.carts.1.snapshot(),
        },
    ];

    checkout::run_checkouts(&processor, jobs, &Mutex::new(io::stdout()));

    Ok(())
}
