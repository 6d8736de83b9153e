//! Faqih - normalized search over a medical fatwa knowledge base
//!
//! Faqih holds fatwas and lataif in memory and answers free-text queries in
//! Arabic or English. Queries and records are normalized the same way:
//! alef variants, taa marbuta and alef maksura are folded, tashkeel and
//! punctuation are removed, and the definite article is stripped. A record
//! matches when every query token appears somewhere in its searchable text.
//!
//! # Quick Start
//!
//! ```
//! use faqih::{
//!     CategoryId, Fatwa, FatwaCatalog, MemoryDocumentStore, MemoryExclusionStore, Searcher, Verdict,
//! };
//! use std::sync::Arc;
//!
//! let seed = vec![Fatwa::new(
//!     "surg-1",
//!     CategoryId::Surgery,
//!     "حكم زراعة الأعضاء",
//!     "ما حكم التبرع بالكلية؟",
//!     Verdict::Conditional,
//! )];
//! let catalog = FatwaCatalog::load(
//!     seed,
//!     Arc::new(MemoryDocumentStore::<Fatwa>::new()),
//!     Arc::new(MemoryExclusionStore::new()),
//! );
//!
//! let hits = catalog.search("زراعة الاعضاء", &Searcher::default());
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - `faqih-core`: records, field selectors, errors
//! - `faqih-search`: normalizer, tokenizer, matcher, `faqih.toml` config
//! - `faqih-catalog`: catalogs, exclusion lists, document-store boundary

pub use faqih_catalog::*;
pub use faqih_core::*;
pub use faqih_search::*;
