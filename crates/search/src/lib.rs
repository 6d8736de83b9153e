//! Normalized token search for faqih
//!
//! This crate provides:
//! - Normalizer: Arabic letter folding, tashkeel removal, punctuation and
//!   definite-article stripping
//! - Tokenizer: whitespace splitting of normalized text
//! - Searcher: conjunctive substring matching over an in-memory slice
//! - SearchConfig: `faqih.toml` loading
//!
//! The search path does no I/O, holds no shared mutable state, and never
//! fails.
//!
//! # Usage
//!
//! ```
//! use faqih_core::{CategoryId, Fatwa, Searchable, Verdict};
//! use faqih_search::search;
//!
//! let fatwas = vec![Fatwa::new(
//!     "f1",
//!     CategoryId::Surgery,
//!     "حكم زراعة الأعضاء",
//!     "",
//!     Verdict::Conditional,
//! )];
//! let hits = search("زراعة الاعضاء", &fatwas, &Fatwa::search_fields());
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod matcher;
pub mod normalizer;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{SearchConfig, CONFIG_FILE_NAME};
pub use matcher::{search, searchable_text, EmptyQueryPolicy, PreparedQuery, SearchOptions, Searcher};
pub use normalizer::{normalize, normalize_opt, ArticleStrip, Normalizer};
pub use tokenizer::{analyze, tokenize, tokenize_unique};
