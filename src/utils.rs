//! String helpers for titles, escaping and logging.
//!
//! This module provides helper functions used throughout the application:
//! - Title derivation from file names when a page carries no heading
//! - Escaping for template-literal bodies and single-quoted titles
//! - String truncation for log fields

use std::path::Path;

/// Title-case a string word by word.
///
/// The first letter of every run of letters is uppercased and the rest of
/// the run lowercased; any non-letter starts a new run.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("user manual"), "User Manual");
/// assert_eq!(title_case("SEVEN basic plots"), "Seven Basic Plots");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Derive a display title from an article file name.
///
/// Drops the directory and extension, turns hyphens into spaces and
/// title-cases the result: `writing/user-manual.html` becomes `User Manual`.
pub fn title_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem.replace('-', " "))
}

/// Escape a body for embedding inside a JavaScript template literal.
///
/// Backticks are escaped first, then `${`. The order is fixed; input that
/// already contains escapes is not normalised.
pub fn escape_template_literal(s: &str) -> String {
    s.replace('`', "\\`").replace("${", "\\${")
}

/// Escape a title for a single-quoted JavaScript string literal.
///
/// Line breaks are escaped too, since headings can span lines.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at `max` bytes (moved back to a char boundary) with
/// an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
