//! Document-store boundary
//!
//! The catalog reads and writes records through [`DocumentStore`]. A store
//! assigns its own id to every record it holds; that id is what the record's
//! `cloud_id` carries. Network backends live outside this crate;
//! [`MemoryDocumentStore`] is the in-process implementation.

use faqih_core::{CatalogRecord, Error, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use uuid::Uuid;

/// CRUD access to one collection of records
pub trait DocumentStore<R: CatalogRecord>: Send + Sync {
    /// All records in the collection, each with its cloud id set
    fn list(&self) -> Result<Vec<R>>;

    /// Store a new record and return its generated cloud id
    fn add(&self, record: &R) -> Result<String>;

    /// Overwrite the stored record with the same cloud id
    ///
    /// Fails if the record has no cloud id or the id is unknown.
    fn update(&self, record: &R) -> Result<()>;

    /// Delete the record with this cloud id
    fn delete(&self, cloud_id: &str) -> Result<()>;
}

/// In-process document store
///
/// Keeps insertion order. Can be switched offline, after which every call
/// fails with `Error::Store`, the way an unreachable backend would.
#[derive(Debug)]
pub struct MemoryDocumentStore<R> {
    records: RwLock<Vec<R>>,
    offline: AtomicBool,
}

impl<R> Default for MemoryDocumentStore<R> {
    fn default() -> Self {
        MemoryDocumentStore {
            records: RwLock::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }
}

impl<R: CatalogRecord> MemoryDocumentStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`, assigning each a fresh cloud id
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                r.set_cloud_id(Some(new_cloud_id()));
                r
            })
            .collect();
        MemoryDocumentStore {
            records: RwLock::new(records),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail (`true`) or succeed again (`false`)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Release);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::Acquire) {
            return Err(Error::store("document store unavailable"));
        }
        Ok(())
    }
}

fn new_cloud_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl<R: CatalogRecord> DocumentStore<R> for MemoryDocumentStore<R> {
    fn list(&self) -> Result<Vec<R>> {
        self.check_online()?;
        Ok(self.records.read().clone())
    }

    fn add(&self, record: &R) -> Result<String> {
        self.check_online()?;
        let cloud_id = new_cloud_id();
        let mut stored = record.clone();
        stored.set_cloud_id(Some(cloud_id.clone()));
        self.records.write().push(stored);
        debug!(id = %record.id(), cloud_id = %cloud_id, "stored record");
        Ok(cloud_id)
    }

    fn update(&self, record: &R) -> Result<()> {
        self.check_online()?;
        let cloud_id = record
            .cloud_id()
            .ok_or_else(|| Error::store(format!("record {} has no cloud id", record.id())))?;
        let mut records = self.records.write();
        let slot = records
            .iter_mut()
            .find(|r| r.cloud_id() == Some(cloud_id))
            .ok_or_else(|| Error::not_found(cloud_id))?;
        *slot = record.clone();
        Ok(())
    }

    fn delete(&self, cloud_id: &str) -> Result<()> {
        self.check_online()?;
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.cloud_id() != Some(cloud_id));
        if records.len() == before {
            return Err(Error::not_found(cloud_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqih_core::Latifa;

    #[test]
    fn test_add_assigns_cloud_id() {
        let store = MemoryDocumentStore::new();
        let cloud_id = store.add(&Latifa::new(1, "نص")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].cloud_id.as_deref(), Some(cloud_id.as_str()));
    }

    #[test]
    fn test_with_records_assigns_distinct_ids() {
        let store =
            MemoryDocumentStore::with_records(vec![Latifa::new(1, "a"), Latifa::new(2, "b")]);
        let listed = store.list().unwrap();
        assert!(listed.iter().all(|l| l.cloud_id.is_some()));
        assert_ne!(listed[0].cloud_id, listed[1].cloud_id);
    }

    #[test]
    fn test_update_requires_cloud_id() {
        let store: MemoryDocumentStore<Latifa> = MemoryDocumentStore::new();
        let err = store.update(&Latifa::new(1, "a")).unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn test_update_replaces_by_cloud_id() {
        let store = MemoryDocumentStore::new();
        let cloud_id = store.add(&Latifa::new(1, "old")).unwrap();

        let mut changed = Latifa::new(1, "new");
        changed.cloud_id = Some(cloud_id);
        store.update(&changed).unwrap();

        assert_eq!(store.list().unwrap()[0].text, "new");
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let store: MemoryDocumentStore<Latifa> = MemoryDocumentStore::new();
        assert!(matches!(store.delete("nope"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_offline_fails_every_call() {
        let store = MemoryDocumentStore::new();
        store.add(&Latifa::new(1, "a")).unwrap();
        store.set_offline(true);

        assert!(store.list().is_err());
        assert!(store.add(&Latifa::new(2, "b")).is_err());
        assert_eq!(store.len(), 1);

        store.set_offline(false);
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
