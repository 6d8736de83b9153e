//! Search configuration via `faqih.toml`
//!
//! On first use a default `faqih.toml` can be written next to the data. To
//! change behavior, edit the file and reload.

use crate::matcher::{EmptyQueryPolicy, SearchOptions};
use crate::normalizer::ArticleStrip;
use faqih_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "faqih.toml";

/// Search configuration loaded from `faqih.toml`.
///
/// # Example
///
/// ```toml
/// # "match_none" (default) or "match_all"
/// empty_query = "match_none"
/// # "once" (default) or "exhaustive"
/// article_strip = "once"
/// dedupe_query_tokens = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Outcome of a query with no tokens after normalization
    #[serde(default)]
    pub empty_query: EmptyQueryPolicy,
    /// Definite-article stripping policy
    #[serde(default)]
    pub article_strip: ArticleStrip,
    /// Drop repeated query tokens
    #[serde(default = "default_dedupe")]
    pub dedupe_query_tokens: bool,
}

fn default_dedupe() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            empty_query: EmptyQueryPolicy::default(),
            article_strip: ArticleStrip::default(),
            dedupe_query_tokens: default_dedupe(),
        }
    }
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        SearchOptions {
            empty_query: config.empty_query,
            article_strip: config.article_strip,
            dedupe_query_tokens: config.dedupe_query_tokens,
        }
    }
}

impl SearchConfig {
    /// Runtime options for a [`Searcher`](crate::Searcher)
    pub fn options(&self) -> SearchOptions {
        (*self).into()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Faqih search configuration
#
# What an empty search returns, after normalization removes everything
# (empty box, only punctuation, only diacritics):
#   "match_none" = no results (default)
#   "match_all"  = every record
empty_query = "match_none"

# Definite article ("al-") stripping at the start of each word:
#   "once"       = strip a single article per word (default)
#   "exhaustive" = strip repeatedly; also eats stems that begin with "al-"
article_strip = "once"

# Ignore repeated words in a query (default: true)
dedupe_query_tokens = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML or an unknown policy name.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
