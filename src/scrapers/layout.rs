//! Layout detection for writing pages.
//!
//! Patterns are compiled once and shared. Detection tries
//! [`Layout::ContentBody`] before [`Layout::MainContent`] because the flat
//! `<main class="content">` pattern can also match templated pages.

use crate::models::Layout;
use once_cell::sync::Lazy;
use regex::Regex;

/// Templated pages: the body div must close immediately before `</main>`.
static CONTENT_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="content-body">(.*?)</div>\s*</main>"#)
        .expect("content-body pattern is valid")
});

/// Flat pages: everything inside the content `<main>`.
static MAIN_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<main class="content">(.*?)</main>"#).expect("main-content pattern is valid")
});

/// Page title heading used by templated pages, searched across the whole document.
static PAGE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<h1[^>]*class="page-title"[^>]*>([^<]+)</h1>"#)
        .expect("page-title pattern is valid")
});

/// Inner text of a plain-text `<h1>`.
static HEADING_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h1[^>]*>([^<]+)</h1>").expect("heading pattern is valid"));

/// A whole `<h1>` element on a single line, markup included.
static HEADING_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h1[^>]*>.*?</h1>").expect("heading element pattern is valid"));

/// Find the article body block and the layout it was found in.
///
/// Returns the untrimmed inner text of the matched container, or `None` when
/// the page matches neither layout.
pub fn detect(html: &str) -> Option<(Layout, &str)> {
    if let Some(block) = capture(&CONTENT_BODY, html) {
        return Some((Layout::ContentBody, block));
    }
    capture(&MAIN_CONTENT, html).map(|block| (Layout::MainContent, block))
}

/// Trimmed text of the `page-title` heading, if the page has one.
pub fn page_title(html: &str) -> Option<&str> {
    capture(&PAGE_TITLE, html).map(str::trim)
}

/// Trimmed text of the first plain-text `<h1>` in `fragment`.
pub fn first_heading(fragment: &str) -> Option<&str> {
    capture(&HEADING_TEXT, fragment).map(str::trim)
}

/// Remove the first `<h1>…</h1>` element from `fragment`, leaving the rest untouched.
pub fn strip_first_heading(fragment: &str) -> String {
    HEADING_ELEMENT.replacen(fragment, 1, "").into_owned()
}

fn capture<'h>(re: &Regex, haystack: &'h str) -> Option<&'h str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
