//! Shopping cart domain module.

pub mod cart;

pub use cart::Cart;
