//! The book catalog: names, genres and favorites
//!
//! Every mutating method validates its input and silently ignores anything
//! that does not pass. Nothing here returns an error, so callers can retry
//! an invalid operation without checking results. Rejections are logged at
//! `debug` level.

mod operation;
mod report;

pub use operation::Operation;
pub use report::CatalogReport;

use crate::types::{is_valid_name, BookEntry, GenrePolicy};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// In-memory book catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    policy: GenrePolicy,

    /// Entries in insertion order
    entries: Vec<BookEntry>,

    /// Book name -> position in `entries`. Entries are never removed, so
    /// positions stay valid.
    index: HashMap<String, usize>,

    /// Favorite book names in the order they were added
    favorites: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog with the default genre policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with a custom genre policy
    pub fn with_policy(policy: GenrePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The genre policy this catalog validates against
    pub fn policy(&self) -> &GenrePolicy {
        &self.policy
    }

    /// Add a book with no genre.
    ///
    /// Ignored if the name is empty, longer than 40 characters, or already
    /// in the catalog.
    pub fn add_new_book(&mut self, name: &str) {
        if !is_valid_name(name) {
            tracing::debug!(name, "rejected book: name must be 1 to 40 characters");
            return;
        }
        if self.index.contains_key(name) {
            tracing::debug!(name, "rejected book: already in catalog");
            return;
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(BookEntry::new(name));
        tracing::trace!(name, "added book");
    }

    /// Read-only view of every book and its genre
    pub fn books_genre(&self) -> BooksGenre<'_> {
        BooksGenre {
            entries: &self.entries,
            index: &self.index,
        }
    }

    /// Genre of `name`: `Some("")` while unassigned, `None` if the book is
    /// not in the catalog
    pub fn book_genre(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|entry| entry.genre.as_str())
    }

    /// Assign a genre to an existing book.
    ///
    /// Ignored if the book is unknown or the genre is not allowed by the
    /// policy.
    pub fn set_book_genre(&mut self, name: &str, genre: &str) {
        if !self.policy.is_allowed(genre) {
            tracing::debug!(name, genre, "rejected genre: not in allowed set");
            return;
        }
        let Some(&position) = self.index.get(name) else {
            tracing::debug!(name, genre, "rejected genre: book not in catalog");
            return;
        };

        self.entries[position].genre = genre.to_string();
        tracing::trace!(name, genre, "set genre");
    }

    /// Names of books whose genre is exactly `genre`, in insertion order.
    /// Unassigned books never match, so an empty `genre` yields nothing.
    pub fn books_with_specific_genre(&self, genre: &str) -> Vec<&str> {
        if genre.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.genre == genre)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Names of books with an assigned genre that is not age-restricted, in
    /// insertion order
    pub fn books_for_children(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.has_genre() && !self.policy.is_age_restricted(&entry.genre))
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Mark a book as a favorite.
    ///
    /// Ignored if the book is unknown or already a favorite.
    pub fn add_book_in_favorites(&mut self, name: &str) {
        if !self.contains(name) {
            tracing::debug!(name, "rejected favorite: book not in catalog");
            return;
        }
        if self.is_favorite(name) {
            tracing::debug!(name, "rejected favorite: already a favorite");
            return;
        }

        self.favorites.push(name.to_string());
        tracing::trace!(name, "added favorite");
    }

    /// Favorite book names in the order they were added
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Remove a book from favorites. The book itself stays in the catalog.
    /// Ignored if the book is not a favorite.
    pub fn delete_book_from_favorites(&mut self, name: &str) {
        match self.favorites.iter().position(|fav| fav == name) {
            Some(position) => {
                self.favorites.remove(position);
                tracing::trace!(name, "removed favorite");
            }
            None => tracing::debug!(name, "ignored unfavorite: not a favorite"),
        }
    }

    /// Whether `name` is in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `name` is a favorite
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|fav| fav == name)
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the catalog and its derived views
    pub fn report(&self) -> CatalogReport {
        CatalogReport {
            books: self.entries.clone(),
            favorites: self.favorites.clone(),
            children: self
                .books_for_children()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    fn entry(&self, name: &str) -> Option<&BookEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }
}

/// Borrowed, insertion-ordered view of book name -> genre.
///
/// Serializes as a JSON object whose keys keep catalog order.
#[derive(Debug, Clone, Copy)]
pub struct BooksGenre<'a> {
    entries: &'a [BookEntry],
    index: &'a HashMap<String, usize>,
}

impl<'a> BooksGenre<'a> {
    /// Genre for `name`, if present
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].genre.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Book names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// (name, genre) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.genre.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BooksGenre<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, genre) in self.iter() {
            map.serialize_entry(name, genre)?;
        }
        map.end()
    }
}
