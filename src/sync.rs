//! The sync run: read every configured page, keep what extracts cleanly, and
//! write one generated script.
//!
//! Pages are processed strictly one after another in article-list order.
//! Per-page problems (missing file, unknown layout, unreadable file, empty
//! body) are reported and skipped. The only fatal outcome is failing to
//! write the output, or stale output in check mode.

use crate::config::SyncConfig;
use crate::models::{Article, SyncReport};
use crate::outputs::console::Transcript;
use crate::outputs::script::{render_document, write_document};
use crate::scrapers::writing::{ExtractError, extract_article};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{error, info, instrument, warn};

/// Failures that end a sync run with a non-zero exit.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Writing the generated script failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Check mode found the existing script differs from a fresh render.
    #[error("{} is out of date", .path.display())]
    Stale { path: PathBuf },
}

/// Run one full extract-and-write cycle for `config`.
///
/// Progress lines go to `transcript`; the returned [`SyncReport`] lists the
/// outcome for every key.
///
/// # Errors
///
/// [`SyncError::Write`] if the output can't be written, and
/// [`SyncError::Stale`] in check mode when the output needs regenerating.
#[instrument(
    level = "info",
    skip_all,
    fields(articles = config.articles.len(), check = config.check)
)]
pub async fn run<W: Write>(
    config: &SyncConfig,
    transcript: &mut Transcript<W>,
) -> Result<SyncReport, SyncError> {
    transcript.start();

    let mut report = SyncReport {
        output_path: config.output_path.clone(),
        ..Default::default()
    };
    let mut entries: Vec<(String, Article)> = Vec::with_capacity(config.articles.len());

    for spec in &config.articles {
        let path = config.article_path(spec);

        if !matches!(fs::try_exists(&path).await, Ok(true)) {
            warn!(key = %spec.key, path = %path.display(), "Article file not found");
            transcript.not_found(&path);
            report.missing.push(spec.key.clone());
            continue;
        }

        match extract_article(&path).await {
            Ok(article) if article.is_emittable() => {
                transcript.extracted(&article.title);
                report.written.push(spec.key.clone());
                entries.push((spec.key.clone(), article));
            }
            Ok(_) => {
                warn!(key = %spec.key, "Article extracted with empty content");
                transcript.empty_content(&spec.file);
                report.empty.push(spec.key.clone());
            }
            Err(e) => {
                match &e {
                    ExtractError::NoContentBlock { .. } => transcript.no_content_block(&path),
                    ExtractError::Read { source, .. } => transcript.read_failed(&path, source),
                }
                warn!(key = %spec.key, error = %e, "Skipping article");
                transcript.empty_content(&spec.file);
                report.failed.push(spec.key.clone());
            }
        }
    }

    let document = render_document(&entries);

    if config.check {
        let current = fs::read_to_string(&config.output_path).await.ok();
        if current.as_deref() != Some(document.as_str()) {
            warn!(path = %config.output_path.display(), "Generated script is out of date");
            transcript.stale(&config.output_path);
            return Err(SyncError::Stale {
                path: config.output_path.clone(),
            });
        }
        transcript.up_to_date(&report);
    } else {
        write_document(&config.output_path, &document)
            .await
            .map_err(|source| {
                error!(
                    path = %config.output_path.display(),
                    error = %source,
                    "Failed to write output"
                );
                SyncError::Write {
                    path: config.output_path.clone(),
                    source,
                }
            })?;
        transcript.updated(&report);
    }

    info!(
        written = report.written.len(),
        missing = report.missing.len(),
        failed = report.failed.len(),
        empty = report.empty.len(),
        "Sync complete"
    );
    Ok(report)
}
