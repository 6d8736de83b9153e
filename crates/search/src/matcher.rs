//! Conjunctive substring matcher
//!
//! A record matches a query when every normalized query token occurs as a
//! contiguous substring of the record's searchable text. The searchable text
//! is each selected field value normalized on its own and joined with a single
//! space, in field order. Matching is therefore across fields: one token may
//! come from the title and another from a tag.
//!
//! Results keep the input order. There is no scoring or re-ranking.
//!
//! # Empty queries
//!
//! A query can normalize to zero tokens ("", "!?", pure tashkeel). The
//! conjunction over zero tokens is vacuously true, so the outcome is fixed by
//! [`EmptyQueryPolicy`] instead.

use crate::normalizer::{ArticleStrip, Normalizer};
use crate::tokenizer::{analyze, tokenize_unique};
use faqih_core::{FieldSelector, Searchable};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Options
// ============================================================================

/// Outcome of a query that normalizes to no tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Return no records
    #[default]
    MatchNone,
    /// Return every record, in order
    MatchAll,
}

/// Runtime search options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Outcome of a query with no tokens
    pub empty_query: EmptyQueryPolicy,
    /// Article policy for both query and record text
    pub article_strip: ArticleStrip,
    /// Drop repeated query tokens before matching
    pub dedupe_query_tokens: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            empty_query: EmptyQueryPolicy::MatchNone,
            article_strip: ArticleStrip::Once,
            dedupe_query_tokens: true,
        }
    }
}

impl SearchOptions {
    /// Builder: set the empty-query policy
    pub fn with_empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    /// Builder: set the article policy
    pub fn with_article_strip(mut self, strip: ArticleStrip) -> Self {
        self.article_strip = strip;
        self
    }
}

// ============================================================================
// PreparedQuery
// ============================================================================

/// Normalized query tokens, computed once per search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    tokens: Vec<String>,
}

impl PreparedQuery {
    /// Normalize and tokenize `query`
    pub fn new(query: &str, normalizer: &Normalizer, dedupe: bool) -> Self {
        let tokens = if dedupe {
            tokenize_unique(&normalizer.normalize(query))
        } else {
            analyze(query, normalizer)
        };
        PreparedQuery { tokens }
    }

    /// Query tokens in query order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True if the query normalized to nothing
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token occurs in `searchable_text`
    ///
    /// Vacuously true for an empty query; callers apply
    /// [`EmptyQueryPolicy`] before reaching this.
    pub fn matches_text(&self, searchable_text: &str) -> bool {
        self.tokens
            .iter()
            .all(|token| searchable_text.contains(token.as_str()))
    }
}

// ============================================================================
// Searchable text
// ============================================================================

/// Build a record's searchable text
///
/// Each field value is normalized independently and the results are joined
/// with a single space, in selector order.
pub fn searchable_text<R>(
    record: &R,
    fields: &[FieldSelector<R>],
    normalizer: &Normalizer,
) -> String {
    fields
        .iter()
        .flat_map(|field| field.values(record))
        .map(|value| normalizer.normalize(value))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Searcher
// ============================================================================

/// Normalized token search over an in-memory slice
///
/// Stateless apart from its options; one instance can serve concurrent
/// callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    options: SearchOptions,
    normalizer: Normalizer,
}

impl Searcher {
    /// Create a searcher
    pub fn new(options: SearchOptions) -> Self {
        Searcher {
            options,
            normalizer: Normalizer::new(options.article_strip),
        }
    }

    /// Options in use
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Normalizer in use
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Prepare a query for repeated matching
    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, &self.normalizer, self.options.dedupe_query_tokens)
    }

    /// Whether one record matches a prepared query
    ///
    /// Applies the empty-query policy.
    pub fn matches<R>(
        &self,
        query: &PreparedQuery,
        record: &R,
        fields: &[FieldSelector<R>],
    ) -> bool {
        if query.is_empty() {
            return self.options.empty_query == EmptyQueryPolicy::MatchAll;
        }
        query.matches_text(&searchable_text(record, fields, &self.normalizer))
    }

    /// Records matching `query`, in their original order
    ///
    /// `records` is only read.
    pub fn search<'r, R>(
        &self,
        query: &str,
        records: &'r [R],
        fields: &[FieldSelector<R>],
    ) -> Vec<&'r R> {
        let prepared = self.prepare(query);

        let hits: Vec<&R> = if prepared.is_empty() {
            match self.options.empty_query {
                EmptyQueryPolicy::MatchAll => records.iter().collect(),
                EmptyQueryPolicy::MatchNone => Vec::new(),
            }
        } else {
            records
                .iter()
                .filter(|record| {
                    prepared.matches_text(&searchable_text(*record, fields, &self.normalizer))
                })
                .collect()
        };

        debug!(
            query_tokens = prepared.tokens().len(),
            candidates = records.len(),
            hits = hits.len(),
            "search complete"
        );
        hits
    }

    /// Search using the record type's default fields
    pub fn search_default<'r, R: Searchable>(&self, query: &str, records: &'r [R]) -> Vec<&'r R> {
        self.search(query, records, &R::search_fields())
    }
}

/// Search with default options
pub fn search<'r, R>(query: &str, records: &'r [R], fields: &[FieldSelector<R>]) -> Vec<&'r R> {
    Searcher::default().search(query, records, fields)
}
