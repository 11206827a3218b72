//! Hard-coded bootstrap data for the simulation.

use inkshop_accounts::AccountDirectory;
use inkshop_cart::Cart;
use inkshop_catalog::Book;
use inkshop_core::Money;
use inkshop_inventory::{InventoryLedger, SharedLedger};

pub const USER1: &str = "user1";
pub const USER2: &str = "user2";

/// Everything the session starts with: the two catalog books, one cart per
/// seeded account, and the stocked ledger.
pub struct Storefront {
    pub books: (Book, Book),
    pub carts: (Cart, Cart),
    pub ledger: SharedLedger,
}

/// Seed the directory and build the storefront.
///
/// Cart 1 holds one of each book; cart 2 holds only the first book. The
/// ledger is stocked to each book's nominal level.
pub fn seed(directory: &mut AccountDirectory) -> anyhow::Result<Storefront> {
    let book1 = Book::new("Java Programming", "John Doe", Money::from_cents(2599), 50)?;
    let book2 = Book::new(
        "Python for Beginners",
        "Jane Smith",
        Money::from_cents(1999),
        30,
    )?;

    directory.register(USER1, "password1")?;
    directory.register(USER2, "password2")?;

    let mut cart1 = Cart::new();
    cart1.add(book1.clone());
    cart1.add(book2.clone());

    let mut cart2 = Cart::new();
    cart2.add(book1.clone());

    let ledger = SharedLedger::new(InventoryLedger::new());
    ledger.add(&book1, book1.nominal_stock());
    ledger.add(&book2, book2.nominal_stock());

    tracing::debug!(
        books = 2,
        accounts = directory.len(),
        "storefront seeded"
    );

    Ok(Storefront {
        books: (book1, book2),
        carts: (cart1, cart2),
        ledger,
    })
}
