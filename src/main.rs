//! # writing_sync
//!
//! Regenerates the site's `writing-content.js` from the static article pages
//! under `writing/`, so the single-page app can show every article without
//! fetching the HTML pages themselves.
//!
//! ## Features
//!
//! - Reads a fixed, ordered list of article pages (built in, or from a YAML manifest)
//! - Detects which of the two page layouts each page uses and extracts title and body
//! - Escapes bodies for template literals and writes one `window.writingContent` object
//! - Skips missing or malformed pages without failing the run
//! - `--check` mode for CI: fail when the generated script is stale
//!
//! ## Usage
//!
//! ```sh
//! writing_sync -b ./writing -o ./js/writing-content.js
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: defaults, manifest and CLI flags resolve to a `SyncConfig`
//! 2. **Extraction**: each page is read and matched against the known layouts, one at a time
//! 3. **Output**: successes are rendered in list order and the script is overwritten

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod scrapers;
mod sync;
mod utils;

use cli::Cli;
use outputs::console::Transcript;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // stdout carries the transcript, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("writing_sync starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match config::load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(
        base_dir = %config.base_dir.display(),
        output_path = %config.output_path.display(),
        articles = config.articles.len(),
        "Configuration loaded"
    );

    let mut transcript = Transcript::new(io::stdout().lock());
    let report = sync::run(&config, &mut transcript).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        written = report.written.len(),
        skipped = report.skipped(),
        "Execution complete"
    );

    Ok(())
}
