//! Core trait definitions
//!
//! - [`CatalogRecord`]: identity and cloud-id access for records held in a catalog
//! - [`Searchable`]: default field policy for a record type

use crate::error::Result;
use crate::field::FieldSelector;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record that can live in a catalog
///
/// Every record has an application id. Records that have been written to the
/// document store additionally carry the store's generated id; records from
/// the bundled seed list do not.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Application-level identifier
    type Id: Clone + Eq + Hash + Display + Debug + Send + Sync;

    /// Whether a record stays in the in-memory list when the document store
    /// fails to add or update it
    const KEEP_ON_STORE_FAILURE: bool;

    /// Application-level identifier
    fn id(&self) -> &Self::Id;

    /// Document-store id, if the record came from or was saved to the store
    fn cloud_id(&self) -> Option<&str>;

    /// Attach or clear the document-store id
    fn set_cloud_id(&mut self, cloud_id: Option<String>);

    /// Check that every required field is filled in
    ///
    /// # Errors
    ///
    /// `Error::Invalid` naming the first missing field.
    fn validate(&self) -> Result<()>;

    /// Key used in exclusion lists
    fn exclusion_key(&self) -> String {
        self.id().to_string()
    }
}

/// A record type with a default ordered set of searchable fields
pub trait Searchable: Sized + 'static {
    /// Fields concatenated, in this order, into the searchable text
    fn search_fields() -> Vec<FieldSelector<Self>>;
}
