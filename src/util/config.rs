//! Configuration file parsing utilities.
//!
//! `settings.conf` is a flat `key = value` file; these helpers keep the
//! line handling in one place.

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing `key = value`
///
/// Output:
/// - `Some((key, value))` with the key normalized to lower-case snake form and any
///   trailing ` # comment` removed from the value; `None` when there is no `=`.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key
        .trim()
        .to_lowercase()
        .replace(['.', '-', ' '], "_");
    let value = strip_inline_comment(raw_val.trim()).to_string();
    Some((key, value))
}

/// Remove a trailing ` # comment` from a value.
fn strip_inline_comment(val: &str) -> &str {
    val.find(" #").map_or(val, |i| val[..i].trim_end())
}

/// Interpret common truthy/falsy spellings.
#[must_use]
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
