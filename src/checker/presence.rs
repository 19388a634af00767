// src/checker/presence.rs
// =============================================================================
// This module answers one question per selector: does the document contain
// at least one element matching it?
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Rust concepts:
// - BTreeMap: a map that keeps its keys sorted
// - Iterators: .next().is_some() stops at the first match
// - Borrowing: the document is only read, never modified
// =============================================================================

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{GraderError, Result};

/// Selector -> "at least one element matches"
///
/// A BTreeMap keeps keys in ascending order, so the report comes out in the
/// same order as the sorted checks list, and a selector listed twice ends up
/// as a single key.
pub type CheckResult = BTreeMap<String, bool>;

// Checks every selector against an already-parsed document
//
// Parameters:
//   document: the parsed HTML (borrowed, read-only)
//   selectors: CSS selectors as written in the checks file
//
// Returns: CheckResult, or InvalidSelector for the first selector scraper
// cannot parse
//
// Example:
//   document = "<h1>Hi</h1>"
//   selectors = ["h1", "p"]
//   result = {"h1": true, "p": false}
pub fn check_presence(document: &Html, selectors: &[String]) -> Result<CheckResult> {
    let mut results = CheckResult::new();

    for raw in selectors {
        let selector = Selector::parse(raw).map_err(|e| GraderError::InvalidSelector {
            selector: raw.clone(),
            reason: e.to_string(),
        })?;

        // We only need to know about the first match
        let present = document.select(&selector).next().is_some();
        debug!("{} -> {}", raw, present);

        results.insert(raw.clone(), present);
    }

    Ok(results)
}

// Parses `html` and runs check_presence on it
pub fn check_html(html: &str, selectors: &[String]) -> Result<CheckResult> {
    let document = Html::parse_document(html);
    check_presence(&document, selectors)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why parse the selector for every check?
//    - Selectors come from the user's checks file, not from our code
//    - Selector::parse returns a Result, so a typo like "a[" becomes a
//      proper error instead of a panic
//
// 2. Why .next().is_some() instead of .count() > 0?
//    - select() returns a lazy iterator over matching elements
//    - next() stops after the first match, count() would walk the whole tree
//
// 3. Why BTreeMap and not HashMap?
//    - HashMap iteration order is random
//    - The report must list selectors in a stable, sorted order
// -----------------------------------------------------------------------------
