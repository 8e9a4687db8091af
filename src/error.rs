use std::fmt;

/// The main error type for QUILL parsing and evaluation.
///
/// Every variant is terminal for the whole parse: declarations can depend on
/// earlier ones, so there is no partial-document recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum QuillError {
    /// A line does not match the `let NAME = RHS` shape.
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A right-hand side matched none of the literal shapes.
    UnknownValue {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A postfix token is neither a number, a bound name, nor an operator.
    UnknownToken {
        token: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An operator was applied to operands of the wrong value kind.
    TypeMismatch {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An operator needed more operands than the value stack holds.
    StackUnderflow {
        operator: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for QuillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuillError::SyntaxError { message, line, hint, code } =>
                write!(f, "[QUILL] Syntax Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::UnknownValue { text, line, hint, code } =>
                write!(f, "[QUILL] Unknown Value '{}' at line {}{}{}",
                    text, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::UnknownToken { token, line, hint, code } =>
                write!(f, "[QUILL] Unknown Token '{}' at line {}{}{}",
                    token, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::TypeMismatch { message, line, hint, code } =>
                write!(f, "[QUILL] Type Mismatch at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::StackUnderflow { operator, line, hint, code } =>
                write!(f, "[QUILL] Stack Underflow for '{}' at line {}{}{}",
                    operator, line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            QuillError::FileError { message, path, hint, code } =>
                write!(f, "[QUILL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for QuillError {}
