//! Core types for the Bookshelf catalog

mod entry;
mod genre;

pub use entry::{is_valid_name, BookEntry, MAX_NAME_LEN};
pub use genre::{GenreConfig, GenrePolicy, DEFAULT_AGE_RESTRICTED, DEFAULT_GENRES};
