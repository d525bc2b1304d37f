//! Command-line interface definitions for writing_sync.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option is optional: running with no arguments syncs the built-in
//! article list from `writing/` into `js/writing-content.js`.

use clap::Parser;

/// Command-line arguments for the writing content sync.
///
/// # Examples
///
/// ```sh
/// # Regenerate from the current directory's site checkout
/// writing_sync
///
/// # Explicit locations
/// writing_sync -b ~/site/writing -o ~/site/js/writing-content.js
///
/// # Custom article list, verify only (CI)
/// writing_sync -c articles.yaml --check
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML article manifest
    #[arg(short, long, env = "WRITING_SYNC_CONFIG")]
    pub config: Option<String>,

    /// Directory containing the article HTML files
    #[arg(short, long, env = "WRITING_SYNC_BASE_DIR")]
    pub base_dir: Option<String>,

    /// Path of the generated script file
    #[arg(short, long, env = "WRITING_SYNC_OUTPUT")]
    pub output: Option<String>,

    /// Don't write; fail if the generated script is out of date
    #[arg(long)]
    pub check: bool,
}
