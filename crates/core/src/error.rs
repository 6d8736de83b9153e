//! Error types for faqih
//!
//! This module defines the error type shared by the catalog and configuration
//! layers. We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The search core (normalizer, tokenizer, matcher) is total and never
//! produces one of these.

use std::io;
use thiserror::Error;

/// Result type alias for faqih operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for faqih
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (exclusion list files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid or unparseable configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Record id not present in a catalog
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record with this id is already present
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    /// Document store rejected or failed an operation
    #[error("Store error: {0}")]
    Store(String),

    /// Record is missing a required field or carries an unusable value
    #[error("Invalid record: {0}")]
    Invalid(String),
}

impl Error {
    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build a `Store` error
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    /// Build an `Invalid` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::Invalid(msg.into())
    }

    /// Build a `NotFound` error from any displayable id
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Error::NotFound(id.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
