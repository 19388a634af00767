// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   html-grader                                  # index.html + checks.json
//   html-grader -f page.html -c my_checks.json
//   html-grader -u https://example.com -c checks.json
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{GraderError, Result};
use crate::source::{DocumentSource, FetchOptions};

/// Default checks file, looked up in the current directory
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Default HTML file, looked up in the current directory
pub const HTML_FILE_DEFAULT: &str = "index.html";

// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Check an HTML page for the presence of CSS selectors",
    long_about = "html-grader loads a list of CSS selectors from a JSON checks file and reports, \
                  for each one, whether the page contains at least one matching element."
)]
pub struct Cli {
    /// Path to the checks file (JSON array of CSS selectors)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to the HTML file to check
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTML_FILE_DEFAULT)]
    pub file: PathBuf,

    /// URL of a page to check instead of --file
    ///
    /// The page is downloaded to a temporary tempIndex<n>.html in the current
    /// directory, which is removed once the check is done.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Request timeout in seconds for --url (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Makes sure every input path we are going to read exists
    //
    // --checks is always needed; --file only when no --url is given.
    pub fn validate_paths(&self) -> Result<()> {
        if !self.checks.exists() {
            return Err(GraderError::ChecksNotFound(self.checks.clone()));
        }

        if self.url.is_none() && !self.file.exists() {
            return Err(GraderError::DocumentNotFound(self.file.clone()));
        }

        Ok(())
    }

    // --url wins over --file
    pub fn document_source(&self) -> DocumentSource {
        match &self.url {
            Some(url) => DocumentSource::Remote(url.clone()),
            None => DocumentSource::LocalFile(self.file.clone()),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.timeout.map(Duration::from_secs),
            ..FetchOptions::default()
        }
    }
}
