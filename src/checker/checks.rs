// src/checker/checks.rs
// =============================================================================
// This module loads the list of selectors to check.
//
// The checks file is plain JSON: an array of CSS selector strings.
//
//   ["h1", "a[href]", "div.container"]
//
// The list comes back sorted so the report lists selectors alphabetically.
//
// Rust concepts:
// - serde_json::from_str: deserializes JSON straight into a Vec<String>
// - Result and the ? operator: to pass errors up to the caller
// =============================================================================

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GraderError, Result};

// Reads and parses the checks file at `path`
//
// Returns the selectors sorted in ascending order.
// Fails with ChecksNotFound if the file is missing, ChecksParse if it is not
// a JSON array of strings.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(GraderError::ChecksNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;

    let checks = parse_checks(&text).map_err(|source| GraderError::ChecksParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded {} check(s) from {}", checks.len(), path.display());
    Ok(checks)
}

// Parses checks from an in-memory JSON string and sorts them
//
// Example:
//   r#"["p", "h1"]"# -> vec!["h1", "p"]
pub fn parse_checks(text: &str) -> serde_json::Result<Vec<String>> {
    let mut checks: Vec<String> = serde_json::from_str(text)?;
    checks.sort();
    Ok(checks)
}
