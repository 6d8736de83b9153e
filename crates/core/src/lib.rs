//! Core types and traits for faqih
//!
//! This crate defines the foundational types used throughout the system:
//! - Fatwa / Latifa: the records held in the knowledge base
//! - CategoryId / Verdict: fatwa classification
//! - FieldSelector: named accessor used to build searchable text
//! - CatalogRecord / Searchable: record identity and default field policy
//! - Error: error type for the catalog and configuration layers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod error;
pub mod field;
pub mod record;
pub mod traits;

pub use category::{CategoryId, Verdict};
pub use error::{Error, Result};
pub use field::FieldSelector;
pub use record::{Fatwa, Latifa};
pub use traits::{CatalogRecord, Searchable};
