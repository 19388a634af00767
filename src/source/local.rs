// src/source/local.rs
// Reads an HTML document from disk.

use std::fs;
use std::path::Path;

use crate::error::{GraderError, Result};

// Reads the file at `path` as text
//
// Existence is checked before reading so a missing file is reported as
// DocumentNotFound (exit code 1) rather than a generic I/O error.
// Bytes that are not valid UTF-8 are replaced, the parser copes with that.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GraderError::DocumentNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
