use crate::QuillError;

/// One `let NAME = RHS` line, borrowed from the cleaned source. Consumed by
/// the document driver and not retained.
#[derive(Debug, PartialEq)]
pub(super) struct Declaration<'a> {
    pub name: &'a str,
    pub rhs: &'a str,
}

/// Parse a trimmed, non-empty line into a [`Declaration`].
///
/// Shape: the keyword `let`, whitespace, an identifier of ASCII letters and
/// underscores (digits are not part of the name grammar), whitespace, `=`,
/// whitespace, then a non-empty right-hand side. Anything else is a syntax
/// error carrying the line number and the offending text.
pub(super) fn parse_declaration(line: &str, line_no: usize) -> Result<Declaration<'_>, QuillError> {
    let rest = line
        .strip_prefix("let")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .ok_or_else(|| syntax_error(line, line_no, "Expected a 'let' declaration"))?;
    let rest = rest.trim_start();

    let name_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'_')
        .count();
    if name_len == 0 {
        return Err(syntax_error(
            line,
            line_no,
            "Expected an identifier after 'let'",
        ));
    }
    let (name, rest) = rest.split_at(name_len);

    let rest = if rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        return Err(syntax_error(
            line,
            line_no,
            "Identifiers may only contain ASCII letters and '_'",
        ));
    };

    let rest = rest
        .strip_prefix('=')
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .ok_or_else(|| syntax_error(line, line_no, "Expected '=' followed by a value"))?;

    let rhs = rest.trim();
    if rhs.is_empty() {
        return Err(syntax_error(line, line_no, "Declaration has no right-hand side"));
    }

    Ok(Declaration { name, rhs })
}

fn syntax_error(line: &str, line_no: usize, message: &str) -> QuillError {
    QuillError::SyntaxError {
        message: format!("{} in '{}'", message, line),
        line: line_no,
        hint: Some("Declarations look like: let name = value".into()),
        code: Some(201),
    }
}
