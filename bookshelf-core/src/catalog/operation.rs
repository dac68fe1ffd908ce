//! Serializable catalog mutations, replayed by hosts such as the CLI

use super::Catalog;
use serde::{Deserialize, Serialize};

/// A single catalog mutation
///
/// Serialized with an `op` tag:
///
/// ```json
/// [
///   { "op": "add", "name": "Dune" },
///   { "op": "set_genre", "name": "Dune", "genre": "Fantasy" },
///   { "op": "favorite", "name": "Dune" },
///   { "op": "unfavorite", "name": "Dune" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// [`Catalog::add_new_book`]
    Add { name: String },

    /// [`Catalog::set_book_genre`]
    SetGenre { name: String, genre: String },

    /// [`Catalog::add_book_in_favorites`]
    Favorite { name: String },

    /// [`Catalog::delete_book_from_favorites`]
    Unfavorite { name: String },
}

impl Catalog {
    /// Apply one operation. Invalid operations are ignored exactly as the
    /// direct method calls ignore them.
    pub fn apply(&mut self, operation: &Operation) {
        match operation {
            Operation::Add { name } => self.add_new_book(name),
            Operation::SetGenre { name, genre } => self.set_book_genre(name, genre),
            Operation::Favorite { name } => self.add_book_in_favorites(name),
            Operation::Unfavorite { name } => self.delete_book_from_favorites(name),
        }
    }

    /// Apply operations in order
    pub fn apply_all<'a, I>(&mut self, operations: I)
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        for operation in operations {
            self.apply(operation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"op": "add", "name": "Dune"},
            {"op": "set_genre", "name": "Dune", "genre": "Fantasy"},
            {"op": "favorite", "name": "Dune"},
            {"op": "unfavorite", "name": "Dune"}
        ]"#;
        let ops: Vec<Operation> = serde_json::from_str(script).unwrap();
        assert_eq!(ops.len(), 4);
        assert_eq!(
            ops[1],
            Operation::SetGenre {
                name: "Dune".to_string(),
                genre: "Fantasy".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_op_is_parse_error() {
        let result: Result<Vec<Operation>, _> =
            serde_json::from_str(r#"[{"op": "delete", "name": "Dune"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_all() {
        let ops = vec![
            Operation::Add {
                name: "Dune".to_string(),
            },
            Operation::Add {
                name: String::new(),
            },
            Operation::SetGenre {
                name: "Dune".to_string(),
                genre: "Fantasy".to_string(),
            },
            Operation::Favorite {
                name: "Dune".to_string(),
            },
            Operation::Favorite {
                name: "Missing".to_string(),
            },
        ];

        let mut catalog = Catalog::new();
        catalog.apply_all(&ops);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.book_genre("Dune"), Some("Fantasy"));
        assert_eq!(catalog.favorites(), ["Dune"]);

        catalog.apply(&Operation::Unfavorite {
            name: "Dune".to_string(),
        });
        assert!(catalog.favorites().is_empty());
    }
}
