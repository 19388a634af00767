// src/checker/mod.rs
// =============================================================================
// This module contains the checking logic.
//
// Submodules:
// - checks: Loads the selector list from the checks file
// - presence: Tests each selector against the parsed document
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::check_presence()` instead of
// `checker::presence::check_presence()`.
// =============================================================================

mod checks;
mod presence;

pub use checks::{load_checks, parse_checks};
pub use presence::{check_html, check_presence, CheckResult};
