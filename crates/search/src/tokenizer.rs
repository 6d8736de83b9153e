//! Whitespace tokenizer
//!
//! Splits already-normalized text into tokens. All character-class handling
//! lives in the normalizer; the tokenizer only splits on runs of whitespace
//! and drops empty pieces. Single-character tokens are kept.

use crate::normalizer::Normalizer;
use std::collections::HashSet;

/// Split text into whitespace-delimited tokens
///
/// # Example
///
/// ```
/// use faqih_search::tokenizer::tokenize;
///
/// let tokens = tokenize("  حكم   زواج ");
/// assert_eq!(tokens, vec!["حكم", "زواج"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

/// Tokenize and deduplicate, keeping first occurrences in order
///
/// # Example
///
/// ```
/// use faqih_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("طب طب صيام");
/// assert_eq!(tokens, vec!["طب", "صيام"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Normalize then tokenize
pub fn analyze(text: &str, normalizer: &Normalizer) -> Vec<String> {
    tokenize(&normalizer.normalize(text))
}
