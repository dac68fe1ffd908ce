//! Owned snapshot of a catalog for display

use crate::types::BookEntry;
use serde::Serialize;

/// Catalog contents plus its derived views, as shown by hosts
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CatalogReport {
    /// Every book in insertion order
    pub books: Vec<BookEntry>,

    /// Favorites in the order they were added
    pub favorites: Vec<String>,

    /// Books suitable for children
    pub children: Vec<String>,
}
