//! Sync configuration: which pages to read, where from, and where to write.
//!
//! A [`SyncConfig`] starts from built-in defaults (the site's article list,
//! `writing/` and `js/writing-content.js`). An optional YAML manifest can
//! replace any of them, and CLI flags override both.
//!
//! # Manifest
//!
//! ```yaml
//! base_dir: /srv/site/writing
//! output_path: /srv/site/js/writing-content.js
//! articles:
//!   - key: culture
//!     file: culture.html
//!   - key: truth
//!     file: truth.html
//! ```

use crate::cli::Cli;
use crate::models::ArticleSpec;
use itertools::Itertools;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Article keys published on the site, in the order the SPA lists them.
const DEFAULT_ARTICLES: &[&str] = &[
    "annual-retro",
    "asset-classes",
    "business-operating-systems",
    "communities-of-practice",
    "culture",
    "entropy-golf",
    "family-strategy",
    "growth-strategies",
    "health-and-wellness-gear",
    "latticework",
    "leadership",
    "metrics",
    "seven-basic-plots",
    "talent-investing",
    "therapy",
    "truth",
    "user-manual",
];

const DEFAULT_BASE_DIR: &str = "writing";
const DEFAULT_OUTPUT_PATH: &str = "js/writing-content.js";

/// Everything a sync run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Directory the article files are resolved against.
    pub base_dir: PathBuf,
    /// Generated script path, overwritten on every run.
    pub output_path: PathBuf,
    /// Ordered `(key, file)` pairs; output follows this order.
    pub articles: Vec<ArticleSpec>,
    /// Compare against the existing output instead of writing it.
    #[serde(skip)]
    pub check: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            articles: DEFAULT_ARTICLES
                .iter()
                .map(|key| ArticleSpec::new(*key, format!("{key}.html")))
                .collect(),
            check: false,
        }
    }
}

/// Problems that stop a run before any page is read.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("article list is empty")]
    NoArticles,
    #[error("duplicate article key '{0}'")]
    DuplicateKey(String),
    /// Keys end up inside a single-quoted JS literal, so quotes and
    /// backslashes are rejected along with empty keys.
    #[error("invalid article key {0:?}")]
    InvalidKey(String),
}

impl SyncConfig {
    /// Parse a YAML manifest. Missing fields fall back to the defaults.
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Full path of an article file under the base directory.
    pub fn article_path(&self, spec: &ArticleSpec) -> PathBuf {
        self.base_dir.join(&spec.file)
    }

    /// Apply command-line overrides on top of the current values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(base_dir) = &cli.base_dir {
            self.base_dir = PathBuf::from(base_dir);
        }
        if let Some(output) = &cli.output {
            self.output_path = PathBuf::from(output);
        }
        self.check = cli.check;
    }

    /// Check the article list can produce a well-formed object literal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.articles.is_empty() {
            return Err(ConfigError::NoArticles);
        }
        if let Some(bad) = self
            .articles
            .iter()
            .find(|a| a.key.is_empty() || a.key.contains(['\'', '\\', '\n']))
        {
            return Err(ConfigError::InvalidKey(bad.key.clone()));
        }
        if let Some(dup) = self
            .articles
            .iter()
            .map(|a| a.key.as_str())
            .duplicates()
            .next()
        {
            return Err(ConfigError::DuplicateKey(dup.to_string()));
        }
        Ok(())
    }
}

/// Build the run configuration from defaults, an optional manifest and CLI flags.
#[instrument(level = "info", skip_all)]
pub async fn load_config(cli: &Cli) -> Result<SyncConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = PathBuf::from(path);
            let yaml = fs::read_to_string(&path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "Loaded article manifest");
            SyncConfig::from_yaml(&path, &yaml)?
        }
        None => SyncConfig::default(),
    };
    config.apply_cli(cli);
    config.validate()?;
    debug!(
        base_dir = %config.base_dir.display(),
        output_path = %config.output_path.display(),
        articles = config.articles.len(),
        check = config.check,
        "Resolved configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_article_list() {
        let config = SyncConfig::default();
        assert_eq!(config.articles.len(), 17);
        assert_eq!(
            config.articles[0],
            ArticleSpec::new("annual-retro", "annual-retro.html")
        );
        assert_eq!(
            config.articles[16],
            ArticleSpec::new("user-manual", "user-manual.html")
        );
        assert_eq!(config.output_path, PathBuf::from("js/writing-content.js"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_article_path() {
        let config = SyncConfig {
            base_dir: PathBuf::from("/srv/site/writing"),
            ..Default::default()
        };
        let spec = ArticleSpec::new("truth", "truth.html");
        assert_eq!(
            config.article_path(&spec),
            PathBuf::from("/srv/site/writing/truth.html")
        );
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = "base_dir: /tmp/pages\narticles:\n  - key: b\n    file: b.html\n  - key: a\n    file: a.html\n";
        let config = SyncConfig::from_yaml(Path::new("m.yaml"), yaml).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/tmp/pages"));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        let keys: Vec<_> = config.articles.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        let err = SyncConfig::from_yaml(Path::new("m.yaml"), "bsae_dir: typo\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_duplicate_key() {
        let config = SyncConfig {
            articles: vec![
                ArticleSpec::new("culture", "culture.html"),
                ArticleSpec::new("truth", "truth.html"),
                ArticleSpec::new("culture", "culture-v2.html"),
            ],
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::DuplicateKey(key)) => assert_eq!(key, "culture"),
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_keys() {
        for key in ["", "it's", "back\\slash"] {
            let config = SyncConfig {
                articles: vec![ArticleSpec::new(key, "x.html")],
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidKey(_))), "{key:?}");
        }
    }

    #[test]
    fn test_validate_empty_list() {
        let config = SyncConfig {
            articles: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoArticles)));
    }

    #[test]
    fn test_apply_cli_overrides() {
        let cli = Cli::parse_from([
            "writing_sync",
            "-b",
            "/srv/writing",
            "-o",
            "/srv/out.js",
            "--check",
        ]);
        let mut config = SyncConfig::default();
        config.apply_cli(&cli);
        assert_eq!(config.base_dir, PathBuf::from("/srv/writing"));
        assert_eq!(config.output_path, PathBuf::from("/srv/out.js"));
        assert!(config.check);
    }

    #[tokio::test]
    async fn test_load_config_from_manifest_with_override() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("articles.yaml");
        std::fs::write(
            &manifest,
            "output_path: gen/out.js\narticles:\n  - key: culture\n    file: culture.html\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "writing_sync",
            "--config",
            manifest.to_str().unwrap(),
            "--base-dir",
            "pages",
        ]);
        let config = load_config(&cli).await.unwrap();
        assert_eq!(config.base_dir, PathBuf::from("pages"));
        assert_eq!(config.output_path, PathBuf::from("gen/out.js"));
        assert_eq!(config.articles, vec![ArticleSpec::new("culture", "culture.html")]);
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::DuplicateKey("culture".to_string()).to_string(),
            "duplicate article key 'culture'"
        );
        assert_eq!(
            ConfigError::InvalidKey("it's".to_string()).to_string(),
            "invalid article key \"it's\""
        );
        assert_eq!(ConfigError::NoArticles.to_string(), "article list is empty");
    }

    #[tokio::test]
    async fn test_load_config_missing_manifest() {
        let cli = Cli::parse_from(["writing_sync", "-c", "/definitely/not/here.yaml"]);
        let err = load_config(&cli).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
