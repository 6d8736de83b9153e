//! Application layer for faqih
//!
//! This crate provides:
//! - ExclusionStore: ids hidden by the application (deleted seed records,
//!   one-shot flags), in memory or persisted as JSON
//! - DocumentStore: the boundary to the record store, with an in-memory
//!   implementation
//! - Catalog: the in-memory record list with add/update/delete, search,
//!   id generation and admin filters
//! - OnceGate / pick_daily: once-per-session display
//!
//! # Usage
//!
//! ```
//! use faqih_catalog::{FatwaCatalog, MemoryDocumentStore, MemoryExclusionStore};
//! use faqih_core::Fatwa;
//! use faqih_search::Searcher;
//! use std::sync::Arc;
//!
//! let catalog = FatwaCatalog::load(
//!     Vec::new(),
//!     Arc::new(MemoryDocumentStore::<Fatwa>::new()),
//!     Arc::new(MemoryExclusionStore::new()),
//! );
//! assert!(catalog.search("صيام", &Searcher::default()).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod document_store;
pub mod exclusion;
pub mod session;

pub use catalog::{AddOutcome, Catalog, FatwaCatalog, LatifaCatalog, UpdateOutcome};
pub use document_store::{DocumentStore, MemoryDocumentStore};
pub use exclusion::{ExclusionStore, JsonFileExclusionStore, MemoryExclusionStore};
pub use session::{pick_daily, OnceGate, DAILY_LATIFA_FLAG};
