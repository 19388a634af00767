// src/error.rs
// =============================================================================
// Error types for the grader library.
//
// Two classes of failure matter to the command line:
// - A required input path is missing: fatal, exit code 1, reported on stdout
// - Everything else (fetch, parse, bad selector, I/O): exit code 2, stderr
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert foreign errors automatically
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    /// The checks file given with --checks does not exist
    #[error("{} does not exist. Exiting.", .0.display())]
    ChecksNotFound(PathBuf),

    /// The HTML file given with --file does not exist
    #[error("{} does not exist. Exiting.", .0.display())]
    DocumentNotFound(PathBuf),

    /// The checks file is not a JSON array of strings
    #[error("could not parse checks file {}: {source}", path.display())]
    ChecksParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Remote mode could not retrieve the page
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GraderError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            GraderError::ChecksNotFound(_) | GraderError::DocumentNotFound(_) => 1,
            _ => 2,
        }
    }

    /// True for the "input path does not exist" failures
    pub fn is_missing_input(&self) -> bool {
        self.exit_code() == 1
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_exit_with_one() {
        let err = GraderError::DocumentNotFound(PathBuf::from("missing.html"));
        assert_eq!(err.exit_code(), 1);
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "missing.html does not exist. Exiting.");

        let err = GraderError::ChecksNotFound(PathBuf::from("checks.json"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_other_failures_exit_with_two() {
        let err = GraderError::Fetch {
            url: "http://localhost/".to_string(),
            message: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(!err.is_missing_input());

        let err = GraderError::InvalidSelector {
            selector: "a[".to_string(),
            reason: "unexpected end".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
