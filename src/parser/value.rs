use crate::ast::Value;
use crate::evaluator::{is_digits, parse_integer};
use crate::QuillError;

/// Parse a literal right-hand side into a [`Value`].
///
/// Shapes are tried in order: quoted string, `array(...)`, integer. Anything
/// else is an unknown value carrying the offending text.
pub(super) fn parse_value(text: &str, line_no: usize) -> Result<Value, QuillError> {
    let text = text.trim();

    if let Some(inner) = unquote(text) {
        // No escape processing: an embedded quote cannot be written.
        return Ok(Value::Text(inner.to_string()));
    }

    if let Some(interior) = text
        .strip_prefix("array(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_array(interior, line_no);
    }

    if is_digits(text) {
        return Ok(Value::Integer(parse_integer(text, line_no)?));
    }

    Err(QuillError::UnknownValue {
        text: text.to_string(),
        line: line_no,
        hint: Some("Expected 'text', array(...), or an unsigned integer".into()),
        code: Some(202),
    })
}

/// Split an array interior on commas and classify each trimmed item
/// independently: quoted items become text, all-digit items become integers,
/// and any other token is kept verbatim as text, even when it looks like an
/// identifier. No lookup is performed inside array literals.
///
/// A fully empty interior is an empty list, not a list of one empty string.
fn parse_array(interior: &str, line_no: usize) -> Result<Value, QuillError> {
    if interior.trim().is_empty() {
        return Ok(Value::List(Vec::new()));
    }

    let mut items = Vec::new();
    for raw_item in interior.split(',') {
        let item = raw_item.trim();
        if let Some(inner) = unquote(item) {
            items.push(Value::Text(inner.to_string()));
        } else if is_digits(item) {
            items.push(Value::Integer(parse_integer(item, line_no)?));
        } else {
            items.push(Value::Text(item.to_string()));
        }
    }

    Ok(Value::List(items))
}

/// The interior of a single-quoted string, if `text` is one.
fn unquote(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
