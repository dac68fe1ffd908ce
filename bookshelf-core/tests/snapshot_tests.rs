//! Snapshot tests for bookshelf-core using insta
//!
//! These capture the serialized shape of catalog views so that hosts
//! consuming the JSON notice any change.

use bookshelf_core::{Catalog, GenreConfig, GenrePolicy};

/// Helper to create a sample catalog for testing
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for name in ["The Hound", "Smeshariki", "Untagged", "Dracula"] {
        catalog.add_new_book(name);
    }
    catalog.set_book_genre("The Hound", "Detectives");
    catalog.set_book_genre("Smeshariki", "Cartoons");
    catalog.set_book_genre("Dracula", "Horror");
    catalog.add_book_in_favorites("Dracula");
    catalog.add_book_in_favorites("Smeshariki");
    catalog
}

#[test]
fn test_report_snapshot() {
    let catalog = sample_catalog();

    insta::assert_json_snapshot!(catalog.report(), @r###"
    {
      "books": [
        {
          "name": "The Hound",
          "genre": "Detectives"
        },
        {
          "name": "Smeshariki",
          "genre": "Cartoons"
        },
        {
          "name": "Untagged",
          "genre": ""
        },
        {
          "name": "Dracula",
          "genre": "Horror"
        }
      ],
      "favorites": [
        "Dracula",
        "Smeshariki"
      ],
      "children": [
        "The Hound",
        "Smeshariki"
      ]
    }
    "###);
}

#[test]
fn test_books_genre_snapshot() {
    let catalog = sample_catalog();

    insta::assert_json_snapshot!(catalog.books_genre(), @r###"
    {
      "The Hound": "Detectives",
      "Smeshariki": "Cartoons",
      "Untagged": "",
      "Dracula": "Horror"
    }
    "###);
}

#[test]
fn test_default_genre_config_snapshot() {
    let config = GenreConfig::from(&GenrePolicy::default());

    insta::assert_json_snapshot!(config, @r###"
    {
      "allowed": [
        "Comedies",
        "Cartoons",
        "Detectives",
        "Horror",
        "Fantasy"
      ],
      "age_restricted": [
        "Horror"
      ]
    }
    "###);
}
