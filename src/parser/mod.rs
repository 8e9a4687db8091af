use crate::ast::Document;
use crate::evaluator;
use crate::QuillError;

mod statement;
mod value;

/// Parse cleaned source text (see [`crate::strip`]) into a [`Document`].
///
/// Lines are handled one at a time, top to bottom. Each declaration is bound
/// into the document before the next line is read, so expressions can refer
/// to any earlier name but never to a later one or to the name being
/// declared. The first error aborts the parse; no partial document is
/// returned.
pub fn parse_document(cleaned: &str) -> Result<Document, QuillError> {
    let mut document = Document::new();

    for (index, raw_line) in cleaned.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let declaration = statement::parse_declaration(line, line_no)?;

        let bound = match expression_body(declaration.rhs) {
            Some(expression) => evaluator::evaluate(expression.trim(), &document, line_no)?,
            None => value::parse_value(declaration.rhs, line_no)?,
        };

        document.bind(declaration.name.to_string(), bound);
    }

    Ok(document)
}

/// The inner text of a `${ ... }` wrapper, if the RHS is one.
fn expression_body(rhs: &str) -> Option<&str> {
    rhs.strip_prefix("${").and_then(|rest| rest.strip_suffix('}'))
}

#[cfg(test)]
mod tests;
