//! Apply command implementation

use super::script::replay;
use anyhow::Result;
use bookshelf_core::GenrePolicy;

/// Replay a script and print the catalog with its derived views
pub fn apply(script: &str, policy: GenrePolicy, json: bool) -> Result<()> {
    let catalog = replay(script, policy)?;
    let report = catalog.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Books ({}):", report.books.len());
    for book in &report.books {
        let genre = if book.has_genre() {
            book.genre.as_str()
        } else {
            "-"
        };
        println!("  {:<40}  {}", book.name, genre);
    }

    println!("Favorites ({}):", report.favorites.len());
    for name in &report.favorites {
        println!("  {}", name);
    }

    println!("For children ({}):", report.children.len());
    for name in &report.children {
        println!("  {}", name);
    }

    Ok(())
}
