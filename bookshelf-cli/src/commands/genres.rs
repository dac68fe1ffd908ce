//! Genres command implementation

use anyhow::Result;
use bookshelf_core::{GenreConfig, GenrePolicy};

/// Print the allowed genres, marking age-restricted ones
pub fn genres(policy: &GenrePolicy, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&GenreConfig::from(policy))?);
        return Ok(());
    }

    for genre in policy.allowed() {
        if policy.is_age_restricted(genre) {
            println!("{} (age-restricted)", genre);
        } else {
            println!("{}", genre);
        }
    }

    Ok(())
}
