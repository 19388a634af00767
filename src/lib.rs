// src/lib.rs
// =============================================================================
// html-grader checks an HTML page for the presence of CSS selectors.
//
// Modules:
// - cli: Command-line arguments
// - checker: Loading the checks file and testing selectors
// - source: Getting the HTML, from disk or over HTTP
// - report: JSON output
// - error: The GraderError type
// - logger: tracing setup
//
// The binary (main.rs) glues these together; check_html_file below does the
// same for a local file so the pipeline can be used as a library.
// =============================================================================

pub mod checker;
pub mod cli;
pub mod error;
pub mod logger;
pub mod report;
pub mod source;

use std::path::Path;

pub use checker::CheckResult;
pub use error::{GraderError, Result};

// Checks a local HTML file against a checks file
//
// Example:
//   let result = check_html_file(Path::new("index.html"), Path::new("checks.json"))?;
//   println!("{}", report::render(&result)?);
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<CheckResult> {
    let html = source::read_document(html_path)?;
    let checks = checker::load_checks(checks_path)?;
    checker::check_html(&html, &checks)
}
