// src/report.rs
// Writes the check results as JSON with 4-space indentation.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::checker::CheckResult;
use crate::error::{GraderError, Result};

// Renders the result as a pretty JSON object
//
// Example:
//   {
//       "h1": true,
//       "p": false
//   }
pub fn render(result: &CheckResult) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    result.serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    String::from_utf8(buffer)
        .map_err(|e| GraderError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

// Prints the rendered report to stdout in a single write
pub fn print_report(result: &CheckResult) -> Result<()> {
    let output = render(result)?;
    println!("{}", output);
    Ok(())
}
