pub mod ast;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod parser;
pub mod strip;

pub use ast::{Document, Value};
pub use error::QuillError;

/// Parse raw QUILL source into a [`Document`].
///
/// Strips comments and blank lines first, then parses the cleaned text line
/// by line. The first malformed declaration aborts the whole parse.
pub fn parse_str(input: &str) -> Result<Document, QuillError> {
    parser::parse_document(&strip::strip(input))
}
