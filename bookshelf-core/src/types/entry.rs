//! Book entry type

use serde::Serialize;

/// Longest accepted book name, counted in characters
pub const MAX_NAME_LEN: usize = 40;

/// A single catalog entry: a book name and its genre
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookEntry {
    /// Unique book name
    pub name: String,

    /// Assigned genre, empty while unassigned
    pub genre: String,
}

impl BookEntry {
    /// Create an entry with no genre
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: String::new(),
        }
    }

    /// Whether a genre has been assigned
    pub fn has_genre(&self) -> bool {
        !self.genre.is_empty()
    }
}

/// Check a candidate name against the naming rule: non-empty and at most
/// [`MAX_NAME_LEN`] characters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LEN
}
