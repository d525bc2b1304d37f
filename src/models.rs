//! Data models for article specs, extracted articles and sync outcomes.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleSpec`]: One `(key, file)` pair from the configured article list
//! - [`Layout`]: Which of the two known page layouts an article was found in
//! - [`Article`]: The title and sanitized body extracted from one page
//! - [`SyncReport`]: Per-key outcomes of a single sync run

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// One entry of the article list: a stable key and the HTML file it is read from.
///
/// The key becomes the property name in the generated `writingContent` object,
/// so it must be unique within a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSpec {
    /// Property name in the generated object, e.g. `"culture"`.
    pub key: String,
    /// File name relative to the base directory, e.g. `"culture.html"`.
    pub file: String,
}

impl ArticleSpec {
    pub fn new(key: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            file: file.into(),
        }
    }
}

/// The HTML structure an article body was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Templated pages: body inside `<div class="content-body">`, title in an
    /// `<h1 class="page-title">` elsewhere on the page.
    ContentBody,
    /// Older flat pages: everything inside `<main class="content">`, with the
    /// first `<h1>` acting as the title.
    MainContent,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::ContentBody => f.write_str("content-body"),
            Layout::MainContent => f.write_str("main-content"),
        }
    }
}

/// An article as extracted from one HTML page.
///
/// `content` is already escaped for embedding inside a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub layout: Layout,
}

impl Article {
    /// Whether both title and content carry text; only such articles are emitted.
    pub fn is_emittable(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Outcome of one sync run, keyed by article key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys written to the output, in output order.
    pub written: Vec<String>,
    /// Keys whose source file did not exist.
    pub missing: Vec<String>,
    /// Keys whose page matched neither layout or could not be read.
    pub failed: Vec<String>,
    /// Keys that extracted but had no title or no content.
    pub empty: Vec<String>,
    /// Where the document was written (or compared, in check mode).
    pub output_path: PathBuf,
}

impl SyncReport {
    /// Number of keys that did not make it into the output.
    pub fn skipped(&self) -> usize {
        self.missing.len() + self.failed.len() + self.empty.len()
    }
}
