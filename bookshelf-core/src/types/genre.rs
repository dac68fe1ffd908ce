//! Genre policy: the fixed set of allowed genres and the age-restricted subset

use crate::error::{PolicyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Genres accepted by the default policy, in display order
pub const DEFAULT_GENRES: [&str; 5] = ["Comedies", "Cartoons", "Detectives", "Horror", "Fantasy"];

/// Genres excluded from the children's view by the default policy
pub const DEFAULT_AGE_RESTRICTED: [&str; 1] = ["Horror"];

/// The allowed genre set and the age-restricted subset.
///
/// A policy is validated once at construction and is immutable afterwards,
/// so every catalog built from it sees the same rules for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePolicy {
    allowed: Vec<String>,
    restricted: Vec<String>,
}

impl GenrePolicy {
    /// Build a custom policy.
    ///
    /// Fails if a genre is blank, an allowed genre is listed twice, the
    /// allowed set is empty, or a restricted genre is not allowed.
    /// Duplicate restricted entries are collapsed.
    pub fn new<A, R>(allowed: A, restricted: R) -> std::result::Result<Self, PolicyError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut allowed_list = Vec::new();
        for genre in allowed {
            let genre = genre.into();
            if genre.trim().is_empty() {
                return Err(PolicyError::BlankGenre);
            }
            if !seen.insert(genre.clone()) {
                return Err(PolicyError::DuplicateGenre(genre));
            }
            allowed_list.push(genre);
        }

        if allowed_list.is_empty() {
            return Err(PolicyError::NoGenres);
        }

        let mut restricted_list: Vec<String> = Vec::new();
        for genre in restricted {
            let genre = genre.into();
            if genre.trim().is_empty() {
                return Err(PolicyError::BlankGenre);
            }
            if !seen.contains(&genre) {
                return Err(PolicyError::UnknownRestricted(genre));
            }
            if !restricted_list.contains(&genre) {
                restricted_list.push(genre);
            }
        }

        Ok(Self {
            allowed: allowed_list,
            restricted: restricted_list,
        })
    }

    /// Whether `genre` may be assigned to a book
    pub fn is_allowed(&self, genre: &str) -> bool {
        self.allowed.iter().any(|g| g == genre)
    }

    /// Whether books of `genre` are hidden from the children's view
    pub fn is_age_restricted(&self, genre: &str) -> bool {
        self.restricted.iter().any(|g| g == genre)
    }

    /// Allowed genres in configuration order
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Age-restricted genres in configuration order
    pub fn restricted(&self) -> &[String] {
        &self.restricted
    }
}

impl Default for GenrePolicy {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            restricted: DEFAULT_AGE_RESTRICTED.iter().map(|g| g.to_string()).collect(),
        }
    }
}

/// On-disk shape of a genre policy
///
/// ```json
/// { "allowed": ["Poetry", "Drama"], "age_restricted": ["Drama"] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreConfig {
    pub allowed: Vec<String>,

    #[serde(default)]
    pub age_restricted: Vec<String>,
}

impl GenreConfig {
    /// Parse a config document from JSON
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Validate into a policy
    pub fn into_policy(self) -> Result<GenrePolicy> {
        Ok(GenrePolicy::new(self.allowed, self.age_restricted)?)
    }
}

impl From<&GenrePolicy> for GenreConfig {
    fn from(policy: &GenrePolicy) -> Self {
        Self {
            allowed: policy.allowed.clone(),
            age_restricted: policy.restricted.clone(),
        }
    }
}
