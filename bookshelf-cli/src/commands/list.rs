//! List command implementation

use super::script::replay;
use anyhow::Result;
use bookshelf_core::GenrePolicy;

/// Which derived view to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Genre(String),
    Children,
    Favorites,
}

/// Replay a script and print one view of the resulting catalog
pub fn list(script: &str, policy: GenrePolicy, view: &View, json: bool) -> Result<()> {
    let catalog = replay(script, policy)?;

    let names: Vec<&str> = match view {
        View::Genre(genre) => {
            if !catalog.policy().is_allowed(genre) {
                tracing::warn!("'{}' is not an allowed genre, no books can match", genre);
            }
            catalog.books_with_specific_genre(genre)
        }
        View::Children => catalog.books_for_children(),
        View::Favorites => catalog.favorites().iter().map(String::as_str).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}
