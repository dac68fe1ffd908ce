//! Loading genre policies and operation scripts from disk

use anyhow::{Context, Result};
use bookshelf_core::{Catalog, GenreConfig, GenrePolicy, Operation};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load the genre policy from `path`, or the built-in one if no path is given
pub fn load_policy(path: Option<&Path>) -> Result<GenrePolicy> {
    let Some(path) = path else {
        return Ok(GenrePolicy::default());
    };

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read genre config: {}", path.display()))?;
    let policy = GenreConfig::from_json(&data)
        .and_then(GenreConfig::into_policy)
        .with_context(|| format!("Invalid genre config: {}", path.display()))?;

    tracing::debug!(
        allowed = policy.allowed().len(),
        restricted = policy.restricted().len(),
        "Loaded genre policy from {}",
        path.display()
    );
    Ok(policy)
}

/// Read a script and replay it into a fresh catalog
pub fn replay(script: &str, policy: GenrePolicy) -> Result<Catalog> {
    let data = if script == "-" {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read script from stdin")?;
        data
    } else {
        fs::read_to_string(script)
            .with_context(|| format!("Failed to open script file: {}", script))?
    };

    let operations: Vec<Operation> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse script {}", script))?;

    let mut catalog = Catalog::with_policy(policy);
    catalog.apply_all(&operations);

    tracing::info!(
        "Replayed {} operations: {} books, {} favorites",
        operations.len(),
        catalog.len(),
        catalog.favorites().len()
    );

    Ok(catalog)
}
