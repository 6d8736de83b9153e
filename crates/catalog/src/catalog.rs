//! Record catalogs
//!
//! A [`Catalog`] is the application's in-memory list of one record type. It
//! is assembled from the bundled seed records and the document store, and
//! every mutation goes to the store or the exclusion list before the list
//! itself changes.
//!
//! # Deletion
//!
//! Records with a cloud id are deleted from the document store. Seed records
//! have no cloud id and cannot be deleted from the binary, so their id is
//! added to the exclusion list instead and filtered out on the next load.
//!
//! Exclusion filtering happens in [`Catalog::load`] and [`Catalog::delete`];
//! [`Catalog::search`] only ever sees the already-filtered list.
//!
//! # Store failures
//!
//! When the store rejects an add or update, fatwas are still applied to the
//! list and the outcome says so; lataif are not, and the error is returned.
//! See [`CatalogRecord::KEEP_ON_STORE_FAILURE`].

use crate::document_store::DocumentStore;
use crate::exclusion::ExclusionStore;
use faqih_core::{
    CatalogRecord, CategoryId, Error, Fatwa, FieldSelector, Latifa, Result, Searchable,
};
use faqih_search::Searcher;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where an added record ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Saved to the document store under this cloud id
    Stored(String),
    /// The store failed; the record is held in memory only
    LocalOnly,
}

/// Where an update was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Written to the document store and the list
    Stored,
    /// Seed record with no cloud id; only the list changed
    Local,
    /// The store failed with this message; only the list changed
    StoreFailed(String),
}

/// In-memory list of records backed by a document store
pub struct Catalog<R: CatalogRecord> {
    records: Vec<R>,
    store: Arc<dyn DocumentStore<R>>,
    exclusions: Arc<dyn ExclusionStore>,
}

/// Catalog of fatwas
pub type FatwaCatalog = Catalog<Fatwa>;

/// Catalog of lataif
pub type LatifaCatalog = Catalog<Latifa>;

impl<R: CatalogRecord> Catalog<R> {
    /// Assemble the list: seed records that are not excluded, then the
    /// store's records.
    ///
    /// A store that cannot be listed contributes nothing.
    pub fn load(
        seed: Vec<R>,
        store: Arc<dyn DocumentStore<R>>,
        exclusions: Arc<dyn ExclusionStore>,
    ) -> Self {
        let seed_total = seed.len();
        let mut records: Vec<R> = seed
            .into_iter()
            .filter(|r| !exclusions.is_excluded(&r.exclusion_key()))
            .collect();
        let seeded = records.len();

        match store.list() {
            Ok(stored) => records.extend(stored),
            Err(e) => {
                warn!(error = %e, "failed to list document store, using seed records only")
            }
        }

        info!(
            seed_total,
            seed_excluded = seed_total - seeded,
            stored = records.len() - seeded,
            "catalog loaded"
        );

        Catalog {
            records,
            store,
            exclusions,
        }
    }

    /// Current records in list order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds nothing
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with this id
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &R::Id) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(id))
    }

    /// Add a record
    ///
    /// The record is saved to the document store and appended with its new
    /// cloud id. If the store fails, a record type that keeps records on
    /// store failure is appended without a cloud id; otherwise the list is
    /// unchanged and the store error is returned.
    ///
    /// # Errors
    ///
    /// - `Error::Invalid` if a required field is empty
    /// - `Error::AlreadyExists` if a record with the same id is present
    /// - the store error, for record types not kept on store failure
    pub fn add(&mut self, mut record: R) -> Result<AddOutcome> {
        record.validate()?;
        if self.get(record.id()).is_some() {
            return Err(Error::AlreadyExists(record.id().to_string()));
        }

        let outcome = match self.store.add(&record) {
            Ok(cloud_id) => {
                record.set_cloud_id(Some(cloud_id.clone()));
                AddOutcome::Stored(cloud_id)
            }
            Err(e) if R::KEEP_ON_STORE_FAILURE => {
                warn!(id = %record.id(), error = %e, "store add failed, keeping record locally");
                AddOutcome::LocalOnly
            }
            Err(e) => {
                warn!(id = %record.id(), error = %e, "store add failed, record not added");
                return Err(e);
            }
        };
        info!(id = %record.id(), ?outcome, "record added");
        self.records.push(record);
        Ok(outcome)
    }

    /// Replace the record with the same id
    ///
    /// Records with a cloud id are updated in the store first. If that
    /// fails, a record type that keeps records on store failure still
    /// replaces the local copy and reports [`UpdateOutcome::StoreFailed`];
    /// otherwise the local copy is left unchanged and the error returned.
    ///
    /// # Errors
    ///
    /// - `Error::Invalid` if a required field is empty
    /// - `Error::NotFound` if no record has this id
    /// - the store error, for record types not kept on store failure
    pub fn update(&mut self, record: R) -> Result<UpdateOutcome> {
        record.validate()?;
        let idx = self.position(record.id())?;
        let outcome = if record.cloud_id().is_none() {
            UpdateOutcome::Local
        } else {
            match self.store.update(&record) {
                Ok(()) => UpdateOutcome::Stored,
                Err(e) if R::KEEP_ON_STORE_FAILURE => {
                    warn!(id = %record.id(), error = %e, "store update failed, updating locally");
                    UpdateOutcome::StoreFailed(e.to_string())
                }
                Err(e) => {
                    warn!(id = %record.id(), error = %e, "store update failed, record unchanged");
                    return Err(e);
                }
            }
        };
        debug!(id = %record.id(), ?outcome, "record updated");
        self.records[idx] = record;
        Ok(outcome)
    }

    /// Delete the record with this id and return it
    ///
    /// Cloud records are deleted from the store; others are added to the
    /// exclusion list. On failure the list is unchanged.
    pub fn delete(&mut self, id: &R::Id) -> Result<R> {
        let idx = self.position(id)?;
        let record = &self.records[idx];
        match record.cloud_id() {
            Some(cloud_id) => self.store.delete(cloud_id)?,
            None => {
                self.exclusions.mark_excluded(&record.exclusion_key())?;
            }
        }
        let removed = self.records.remove(idx);
        info!(id = %removed.id(), cloud = removed.cloud_id().is_some(), "record deleted");
        Ok(removed)
    }

    /// Records matching `query` over the given fields, in list order
    pub fn search_with(
        &self,
        query: &str,
        searcher: &Searcher,
        fields: &[FieldSelector<R>],
    ) -> Vec<&R> {
        searcher.search(query, &self.records, fields)
    }
}

impl<R: CatalogRecord + Searchable> Catalog<R> {
    /// Records matching `query` over the record type's default fields
    pub fn search(&self, query: &str, searcher: &Searcher) -> Vec<&R> {
        searcher.search_default(query, &self.records)
    }
}

impl Catalog<Fatwa> {
    /// Fatwas grouped by category
    ///
    /// Groups follow [`CategoryId::ALL`] order; empty categories are
    /// omitted; within a group, list order is kept.
    pub fn group_by_category(&self) -> Vec<(CategoryId, Vec<&Fatwa>)> {
        CategoryId::ALL
            .iter()
            .map(|category| {
                let members: Vec<&Fatwa> = self
                    .records
                    .iter()
                    .filter(|f| f.category == *category)
                    .collect();
                (*category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    /// Suggested id for a new fatwa: `{prefix}_{n:03}_{year}`
    ///
    /// `n` starts at one more than the number of fatwas in `category` and is
    /// bumped past any id already in the list.
    pub fn next_fatwa_id(&self, category: CategoryId, year: i32) -> String {
        let in_category = self
            .records
            .iter()
            .filter(|f| f.category == category)
            .count();
        (in_category + 1..)
            .map(|n| format!("{}_{:03}_{}", category.id_prefix(), n, year))
            .find(|id| self.get(id).is_none())
            .unwrap_or_default()
    }

    /// Admin list filter: raw substring of title, id or question, optionally
    /// limited to one category
    ///
    /// No normalization is applied; an empty query matches everything.
    pub fn admin_filter(&self, query: &str, category: Option<CategoryId>) -> Vec<&Fatwa> {
        self.records
            .iter()
            .filter(|f| {
                f.title.contains(query) || f.id.contains(query) || f.question.contains(query)
            })
            .filter(|f| category.map_or(true, |c| f.category == c))
            .collect()
    }
}

impl Catalog<Latifa> {
    /// Next free latifa id: one more than the largest id among `seed` and the
    /// current list, or 1 when both are empty
    ///
    /// Seed ids count even when the seed record was deleted, so ids are never
    /// reused.
    ///
    /// # Errors
    ///
    /// `Error::Invalid` if the largest id is `u64::MAX`.
    pub fn next_id(&self, seed: &[Latifa]) -> Result<u64> {
        match seed.iter().chain(self.records.iter()).map(|l| l.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| Error::invalid(format!("latifa id {} has no successor", max))),
        }
    }

    /// Assign the next id to `latifa` and add it
    pub fn add_with_next_id(
        &mut self,
        seed: &[Latifa],
        mut latifa: Latifa,
    ) -> Result<AddOutcome> {
        latifa.id = self.next_id(seed)?;
        self.add(latifa)
    }

    /// Admin list filter: case-insensitive substring of text, category or
    /// source
    pub fn admin_filter(&self, query: &str) -> Vec<&Latifa> {
        let query = query.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&query);
        self.records
            .iter()
            .filter(|l| {
                contains(l.text.as_str())
                    || l.category.as_deref().map_or(false, contains)
                    || l.source.as_deref().map_or(false, contains)
            })
            .collect()
    }
}
