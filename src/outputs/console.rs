//! Human-readable progress transcript.
//!
//! Each per-file outcome gets one glyph-prefixed line. The transcript is
//! informational only; structured diagnostics go through `tracing`.

use crate::models::SyncReport;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Writes transcript lines to any [`Write`] sink, normally stdout.
pub struct Transcript<W: Write> {
    out: W,
    broken: bool,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out, broken: false }
    }

    /// Consume the transcript and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self) {
        self.line(format_args!("📚 Extracting all writing content from HTML files...\n"));
    }

    pub fn extracted(&mut self, title: &str) {
        self.line(format_args!("✅ Extracted: {title}"));
    }

    pub fn no_content_block(&mut self, path: &Path) {
        self.line(format_args!(
            "⚠️  Could not extract content from {}",
            path.display()
        ));
    }

    pub fn read_failed(&mut self, path: &Path, err: &dyn fmt::Display) {
        self.line(format_args!("❌ Error processing {}: {err}", path.display()));
    }

    pub fn empty_content(&mut self, file: &str) {
        self.line(format_args!("⚠️  Empty content for {file}"));
    }

    pub fn not_found(&mut self, path: &Path) {
        self.line(format_args!("❌ File not found: {}", path.display()));
    }

    pub fn updated(&mut self, report: &SyncReport) {
        self.line(format_args!(
            "\n✨ Successfully updated {}",
            report.output_path.display()
        ));
        self.summary(report);
    }

    pub fn up_to_date(&mut self, report: &SyncReport) {
        self.line(format_args!(
            "\n✨ {} is up to date",
            report.output_path.display()
        ));
        self.summary(report);
    }

    pub fn stale(&mut self, path: &Path) {
        self.line(format_args!(
            "\n❌ {} is out of date; rerun without --check to regenerate",
            path.display()
        ));
    }

    fn summary(&mut self, report: &SyncReport) {
        if report.skipped() == 0 {
            self.line(format_args!("📊 All article content has been extracted!"));
        } else {
            self.line(format_args!(
                "📊 Extracted {} articles; skipped {} ({} missing, {} unreadable, {} empty)",
                report.written.len(),
                report.skipped(),
                report.missing.len(),
                report.failed.len(),
                report.empty.len()
            ));
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.broken {
            return;
        }
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!(error = %e, "Transcript output failed; suppressing further lines");
            self.broken = true;
        }
    }
}
