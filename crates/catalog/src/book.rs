//! Catalog item: an immutable book record.

use serde::{Deserialize, Serialize};

use inkshop_core::{DomainError, Money};

/// A book in the store catalog.
///
/// # Identity
/// Two books are the same catalog item when `(title, author)` match; the
/// unit price and nominal stock never participate in equality. Fields are
/// private; a book does not change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    unit_price: Money,
    nominal_stock: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        unit_price: Money,
        nominal_stock: u32,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if author.trim().is_empty() {
            return Err(DomainError::validation("author cannot be empty"));
        }

        Ok(Self {
            title,
            author,
            unit_price,
            nominal_stock,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Stock level the catalog record was created with. The inventory
    /// ledger, not this field, is the source of truth for availability.
    pub fn nominal_stock(&self) -> u32 {
        self.nominal_stock
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.author == other.author
    }
}

impl Eq for Book {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_title_and_author_only() {
        let first = Book::new("Dune", "Frank Herbert", Money::from_cents(1299), 10).unwrap();
        let reprint = Book::new("Dune", "Frank Herbert", Money::from_cents(1599), 3).unwrap();
        let other = Book::new("Dune", "Someone Else", Money::from_cents(1299), 10).unwrap();

        assert_eq!(first, reprint);
        assert_ne!(first, other);
    }

    #[test]
    fn blank_title_or_author_is_rejected() {
        let err = Book::new("  ", "Frank Herbert", Money::ZERO, 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = Book::new("Dune", "", Money::ZERO, 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
