//! Generated script output.
//!
//! Renders extracted articles into the `writing-content.js` file the site's
//! SPA loads. The format is fixed so reruns on unchanged pages produce a
//! byte-identical file:
//!
//! ```text
//! /**
//!  * Writing Content Data
//!  * Contains all writing articles for the SPA
//!  */
//!
//! window.writingContent = {
//!     'culture': {
//!         title: 'Culture',
//!         content: `
//! <p>...</p>
//!         `
//!     },
//!     'truth': { ... }
//! };
//! ```

use crate::models::Article;
use crate::utils::escape_single_quoted;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Comment block at the top of every generated file.
pub const HEADER: &str = "/**\n * Writing Content Data\n * Contains all writing articles for the SPA\n */\n\n";

/// Opening of the global binding the SPA reads from.
const BINDING_OPEN: &str = "window.writingContent = {";

/// Render one object property for `key`.
///
/// `article.content` is expected to be escaped already; the title is escaped
/// here for its single-quoted literal.
pub fn render_entry(key: &str, article: &Article) -> String {
    format!(
        "    '{key}': {{\n        title: '{title}',\n        content: `\n{content}\n        `\n    }}",
        title = escape_single_quoted(&article.title),
        content = article.content,
    )
}

/// Render the complete document for `entries`, in the order given.
pub fn render_document(entries: &[(String, Article)]) -> String {
    let body = entries
        .iter()
        .map(|(key, article)| render_entry(key, article))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut doc = String::with_capacity(HEADER.len() + body.len() + 64);
    doc.push_str(HEADER);
    doc.push_str(BINDING_OPEN);
    if !body.is_empty() {
        doc.push('\n');
        doc.push_str(&body);
    }
    doc.push_str("\n};");
    doc
}

/// Write a rendered document, replacing whatever was at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_document(path: &Path, document: &str) -> io::Result<()> {
    fs::write(path, document).await?;
    info!(bytes = document.len(), "Wrote writing content script");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Layout;

    fn article(title: &str, content: &str) -> Article {
        Article {
            title: title.to_string(),
            content: content.to_string(),
            layout: Layout::MainContent,
        }
    }

    #[test]
    fn test_render_entry() {
        let entry = render_entry("truth", &article("Truth", "<p>Say it</p>"));
        assert_eq!(
            entry,
            "    'truth': {\n        title: 'Truth',\n        content: `\n<p>Say it</p>\n        `\n    }"
        );
    }

    #[test]
    fn test_render_entry_escapes_title_quote() {
        let entry = render_entry("guide", &article("Founder's Guide", "<p>x</p>"));
        assert!(entry.contains("title: 'Founder\\'s Guide',"));
    }

    #[test]
    fn test_render_entry_keeps_title_on_one_line() {
        let entry = render_entry("growth", &article("Growth\n    Strategies", "<p>x</p>"));
        assert!(entry.contains("        title: 'Growth\\n    Strategies',\n"));
        assert_eq!(entry.lines().filter(|l| l.contains("title:")).count(), 1);
    }

    #[test]
    fn test_render_document_order_and_separators() {
        let entries = vec![
            ("culture".to_string(), article("Culture", "<p>c</p>")),
            ("truth".to_string(), article("Truth", "<p>t</p>")),
        ];
        let doc = render_document(&entries);

        assert!(doc.starts_with(HEADER));
        assert!(doc.contains("window.writingContent = {\n    'culture': {"));
        let culture = doc.find("'culture'").unwrap();
        let truth = doc.find("'truth'").unwrap();
        assert!(culture < truth);
        assert!(doc.contains("    },\n    'truth': {"));
        assert!(doc.ends_with("        `\n    }\n};"));
        assert_eq!(doc.matches("},\n").count(), 1);
    }

    #[test]
    fn test_render_document_empty() {
        let doc = render_document(&[]);
        assert_eq!(doc, format!("{HEADER}window.writingContent = {{\n}};"));
    }

    #[test]
    fn test_render_document_is_deterministic() {
        let entries = vec![("metrics".to_string(), article("Metrics", "<p>\\`m\\`</p>"))];
        assert_eq!(render_document(&entries), render_document(&entries));
    }

    #[tokio::test]
    async fn test_write_document_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("writing-content.js");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        let doc = render_document(&[]);
        write_document(&path, &doc).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);
    }

    #[tokio::test]
    async fn test_write_document_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("writing-content.js");
        assert!(write_document(&path, "x").await.is_err());
    }
}
