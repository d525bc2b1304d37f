//! Writing article extractor.
//!
//! Reads one static article page and produces an [`Article`]: a title and a
//! body fragment escaped for a template literal. Failures are returned as
//! [`ExtractError`] and are never fatal to a sync run.

use crate::models::{Article, Layout};
use crate::scrapers::layout;
use crate::utils::{escape_template_literal, title_from_filename, truncate_for_log};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Why a page produced no article.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be read or was not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Neither layout matched.
    #[error("no article content found in {}", .path.display())]
    NoContentBlock { path: PathBuf },
}

/// Read and extract a single article page.
///
/// The file handle is closed before this returns, on success or error.
///
/// # Errors
///
/// [`ExtractError::Read`] when the file can't be read as UTF-8 text, and
/// [`ExtractError::NoContentBlock`] when the page matches neither layout.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn extract_article(path: &Path) -> Result<Article, ExtractError> {
    let html = fs::read_to_string(path).await.map_err(|source| {
        warn!(error = %source, "Failed to read article page");
        ExtractError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(bytes = html.len(), "Read article page");

    let article = extract_from_html(path, &html)?;
    info!(
        layout = %article.layout,
        title = %article.title,
        content_bytes = article.content.len(),
        "Extracted article"
    );
    Ok(article)
}

/// Extract an article from already-loaded HTML.
///
/// `path` is only used for the file-name title fallback and for errors.
pub fn extract_from_html(path: &Path, html: &str) -> Result<Article, ExtractError> {
    let Some((kind, block)) = layout::detect(html) else {
        warn!(path = %path.display(), "Page matches neither layout");
        return Err(ExtractError::NoContentBlock {
            path: path.to_path_buf(),
        });
    };

    let (title, content) = match kind {
        Layout::ContentBody => (layout::page_title(html), block.trim().to_string()),
        Layout::MainContent => {
            let block = block.trim();
            let title = layout::first_heading(block);
            (title, layout::strip_first_heading(block).trim().to_string())
        }
    };

    let title = match title.filter(|t| !t.is_empty()) {
        Some(title) => title.to_string(),
        None => {
            let fallback = title_from_filename(path);
            debug!(%fallback, "No heading found; using file name as title");
            fallback
        }
    };

    debug!(preview = %truncate_for_log(&content, 120), "Article body");

    Ok(Article {
        title,
        content: escape_template_literal(&content),
        layout: kind,
    })
}
