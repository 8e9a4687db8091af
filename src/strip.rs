use once_cell::sync::Lazy;
use regex::Regex;

// Block comments span lines and are not nested: the first `+/` closes the
// block regardless of any `/+` in between (non-greedy match).
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\+.*?\+/").unwrap());

// Line comments run from the first `::` or `#` to the end of the line.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(::|#).*").unwrap());

/// Remove comments and blank lines from raw QUILL source.
///
/// Applied in fixed order: block comments first, then line comments, then
/// empty-line removal. A `/+` with no matching `+/` is left untouched rather
/// than deleted to end-of-input. The result of `strip` is stable under a
/// second `strip`.
pub fn strip(input: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(input, "");
    let without_lines = LINE_COMMENT.replace_all(&without_blocks, "");

    without_lines
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// -- Tests --
