// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::FoamError;
use crate::ast::Value;
use crate::parser::Parser;

/// Export a parsed Foam tree to pretty-printed JSON.
///
/// Conversion:
/// - Strings → JSON strings (Foam scalars stay text, including numbers
///   that came from a parse)
/// - Lists → JSON arrays
/// - Dicts → JSON objects, keys in insertion order
/// - Null / numeric scalars (write-side values) → JSON null / numbers
///
/// The root must be a dict, same as the writer.
pub fn export_to_json(tree: &Value) -> Result<String, FoamError> {
    if tree.as_dict().is_none() {
        return Err(FoamError::InvalidRootElement);
    }
    Ok(serde_json::to_string_pretty(tree).unwrap())
}

/// Export a Foam file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file can't be read or contains invalid Foam
/// syntax.
pub fn export_foam_file<P: AsRef<Path>>(path: P) -> Result<String, FoamError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| FoamError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
    })?;

    let tree = Parser::new(&input).parse()?;
    export_to_json(&tree)
}
