//! Bookshelf Core Library
//!
//! This crate provides the in-memory book catalog for the Bookshelf system.
//! A [`Catalog`] tracks book names, assigns each a genre from a fixed
//! [`GenrePolicy`], keeps a favorites list, and answers two derived queries:
//! books of a given genre and books suitable for children.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{BooksGenre, Catalog, CatalogReport, Operation};
pub use error::{PolicyError, Result, ShelfError};
pub use types::{is_valid_name, BookEntry, GenreConfig, GenrePolicy, MAX_NAME_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.policy(), &GenrePolicy::default());
        assert!(catalog.favorites().is_empty());
    }
}
