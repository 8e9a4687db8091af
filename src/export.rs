use std::fs;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::ast::Document;
use crate::{parser, strip, QuillError};

/// Render a parsed document as a JSON object.
///
/// Keys appear in declaration order, values map directly (Integer → number,
/// Text → string, List → array, Null → null), and the output is indented
/// with four spaces.
pub fn export_document_to_json(doc: &Document) -> Result<String, QuillError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);

    doc.serialize(&mut serializer)
        .map_err(|e| QuillError::SyntaxError {
            message: format!("Failed to serialize document: {}", e),
            line: 0,
            hint: None,
            code: Some(500),
        })?;

    Ok(String::from_utf8(out).unwrap())
}

/// Run the whole pipeline on raw source: strip comments, parse, export.
pub fn export_str(input: &str) -> Result<String, QuillError> {
    let doc = parser::parse_document(&strip::strip(input))?;
    export_document_to_json(&doc)
}

/// Export a QUILL file directly to JSON.
///
/// Convenience function that reads, strips, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file cannot be read or contains invalid QUILL
/// syntax.
pub fn export_quill_file(path: &str) -> Result<String, QuillError> {
    let input = fs::read_to_string(path).map_err(|e| QuillError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    export_str(&input)
}
