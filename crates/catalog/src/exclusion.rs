//! Exclusion lists
//!
//! An [`ExclusionStore`] remembers ids the application has hidden: seed
//! records deleted by an administrator, and one-shot flags such as "the daily
//! latifa was already shown this session". The application injects a store
//! into the catalog; the search core never sees it.
//!
//! - [`MemoryExclusionStore`]: lives as long as the process
//! - [`JsonFileExclusionStore`]: persisted as a JSON array of ids

use faqih_core::Result;
use parking_lot::RwLock;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Set of excluded ids
pub trait ExclusionStore: Send + Sync {
    /// Whether `id` has been excluded
    fn is_excluded(&self, id: &str) -> bool;

    /// Exclude `id`
    ///
    /// Returns `true` if the id was newly added, `false` if it was already
    /// present. Check-and-insert is atomic.
    fn mark_excluded(&self, id: &str) -> Result<bool>;

    /// All excluded ids in insertion order
    fn excluded_ids(&self) -> Vec<String>;
}

// ============================================================================
// MemoryExclusionStore
// ============================================================================

/// In-process exclusion list
#[derive(Debug, Default)]
pub struct MemoryExclusionStore {
    ids: RwLock<Vec<String>>,
}

impl MemoryExclusionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExclusionStore for MemoryExclusionStore {
    fn is_excluded(&self, id: &str) -> bool {
        self.ids.read().iter().any(|x| x == id)
    }

    fn mark_excluded(&self, id: &str) -> Result<bool> {
        let mut ids = self.ids.write();
        if ids.iter().any(|x| x == id) {
            return Ok(false);
        }
        ids.push(id.to_string());
        Ok(true)
    }

    fn excluded_ids(&self) -> Vec<String> {
        self.ids.read().clone()
    }
}

// ============================================================================
// JsonFileExclusionStore
// ============================================================================

/// Exclusion list persisted as a JSON array of strings
///
/// A missing, unreadable or malformed file loads as an empty list. The file
/// is rewritten on every new id, through a temporary file in the same
/// directory that is renamed over it, so readers see the old list or the new
/// one and never a partial write.
#[derive(Debug)]
pub struct JsonFileExclusionStore {
    path: PathBuf,
    ids: RwLock<Vec<String>>,
}

impl JsonFileExclusionStore {
    /// Open the list at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = load_ids(&path);
        debug!(path = %path.display(), count = ids.len(), "opened exclusion list");
        JsonFileExclusionStore {
            path,
            ids: RwLock::new(ids),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Replace `path` with `content` by writing a sibling temp file and renaming
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn load_ids(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read exclusion list, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&content) {
        Ok(mut ids) => {
            let mut seen = std::collections::HashSet::new();
            ids.retain(|id| seen.insert(id.clone()));
            ids
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed exclusion list, starting empty");
            Vec::new()
        }
    }
}

impl ExclusionStore for JsonFileExclusionStore {
    fn is_excluded(&self, id: &str) -> bool {
        self.ids.read().iter().any(|x| x == id)
    }

    fn mark_excluded(&self, id: &str) -> Result<bool> {
        let mut ids = self.ids.write();
        if ids.iter().any(|x| x == id) {
            return Ok(false);
        }
        ids.push(id.to_string());
        let content = serde_json::to_string(&*ids)?;
        if let Err(e) = write_atomic(&self.path, &content) {
            ids.pop();
            return Err(e);
        }
        debug!(path = %self.path.display(), id, "excluded id");
        Ok(true)
    }

    fn excluded_ids(&self) -> Vec<String> {
        self.ids.read().clone()
    }
}
