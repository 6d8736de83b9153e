//! Text normalizer for Arabic/English search
//!
//! Canonicalizes a string so that spelling variants compare equal:
//!
//! 1. Alef with hamza above, hamza below or madda folds to bare alef
//! 2. Taa marbuta folds to haa
//! 3. Alef maksura folds to yaa
//! 4. Tashkeel (U+064B..=U+065F) is removed
//! 5. Anything that is not an ASCII word character, an Arabic-block
//!    character (U+0600..=U+06FF) or whitespace becomes a single space
//! 6. ASCII letters are lowercased
//! 7. Leading and trailing whitespace is trimmed
//! 8. The definite article "ال" is stripped from the start of every
//!    whitespace-delimited run, per [`ArticleStrip`]
//!
//! Steps 1-6 are per-character substitutions with no overlap between their
//! inputs and outputs, so they run as a single pass over the input.
//!
//! Normalization is total: every input, including the empty string, yields
//! a string and nothing panics.

use serde::{Deserialize, Serialize};

const ALEF: char = '\u{0627}';
const ALEF_MADDA: char = '\u{0622}';
const ALEF_HAMZA_ABOVE: char = '\u{0623}';
const ALEF_HAMZA_BELOW: char = '\u{0625}';
const TAA_MARBUTA: char = '\u{0629}';
const HAA: char = '\u{0647}';
const ALEF_MAKSURA: char = '\u{0649}';
const YAA: char = '\u{064A}';

/// Definite article "al-"
pub const DEFINITE_ARTICLE: &str = "\u{0627}\u{0644}";

/// How the definite article is stripped from each whitespace-delimited run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStrip {
    /// Strip at most one article per run and do not re-trim.
    ///
    /// Equivalent to replacing `(^|\s)ال` with `$1` in one regex pass.
    /// "الألم" keeps its root as "الم". Not idempotent on doubled
    /// articles: "الالتهاب" becomes "التهاب", which normalizes again to
    /// "تهاب".
    #[default]
    Once,
    /// Strip articles from each run until none remains, then re-trim.
    ///
    /// Idempotent, but words whose stem begins with "ال" after alef
    /// folding lose it too: "الألم" becomes "م".
    Exhaustive,
}

/// Whether `c` is in the Arabic tashkeel range U+064B..=U+065F
#[inline]
pub fn is_tashkeel(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c)
}

/// Whether `c` is in the Arabic block U+0600..=U+06FF
#[inline]
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// ASCII word character: letter, digit or underscore
#[inline]
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn fold_letter(c: char) -> char {
    match c {
        ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW => ALEF,
        TAA_MARBUTA => HAA,
        ALEF_MAKSURA => YAA,
        other => other,
    }
}

/// Text normalizer
///
/// Holds no state beyond its article policy; `Copy`, and safe to share
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    article_strip: ArticleStrip,
}

impl Normalizer {
    /// Create a normalizer with the given article policy
    pub const fn new(article_strip: ArticleStrip) -> Self {
        Normalizer { article_strip }
    }

    /// Article policy in use
    pub fn article_strip(&self) -> ArticleStrip {
        self.article_strip
    }

    /// Normalize `text`
    ///
    /// # Example
    ///
    /// ```
    /// use faqih_search::normalizer::Normalizer;
    ///
    /// let n = Normalizer::default();
    /// assert_eq!(n.normalize("حكم الصَّلاة"), "حكم صلاه");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let folded = fold_and_filter(text);
        let stripped = strip_articles(folded.trim(), self.article_strip);
        match self.article_strip {
            ArticleStrip::Once => stripped,
            // An all-article run at either end leaves whitespace behind
            ArticleStrip::Exhaustive => stripped.trim().to_string(),
        }
    }

    /// Normalize an optional value; `None` is treated as the empty string
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }
}

/// Normalize `text` with the default policy ([`ArticleStrip::Once`])
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

/// Normalize an optional value with the default policy
pub fn normalize_opt(text: Option<&str>) -> String {
    Normalizer::default().normalize_opt(text)
}

/// Steps 1-6
fn fold_and_filter(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = fold_letter(c);
        if is_tashkeel(c) {
            continue;
        }
        if is_word(c) {
            out.push(c.to_ascii_lowercase());
        } else if is_arabic(c) || c.is_whitespace() {
            out.push(c);
        } else {
            out.push(' ');
        }
    }
    out
}

/// Step 8
///
/// A run starts at the beginning of `text` or right after a whitespace
/// character. Match positions never overlap, so this is the same operation
/// whether viewed as one pass over the whole string or one strip per token.
fn strip_articles(text: &str, policy: ArticleStrip) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut at_run_start = true;

    while let Some(c) = rest.chars().next() {
        if at_run_start && !c.is_whitespace() {
            at_run_start = false;
            match policy {
                ArticleStrip::Once => {
                    if let Some(tail) = rest.strip_prefix(DEFINITE_ARTICLE) {
                        rest = tail;
                    }
                }
                ArticleStrip::Exhaustive => {
                    while let Some(tail) = rest.strip_prefix(DEFINITE_ARTICLE) {
                        rest = tail;
                    }
                }
            }
            continue;
        }
        out.push(c);
        at_run_start = c.is_whitespace();
        rest = &rest[c.len_utf8()..];
    }
    out
}
