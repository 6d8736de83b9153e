//! Catalog Lifecycle Tests
//!
//! Load/merge order, deletion through the store or the exclusion list,
//! add/update failure handling per record type, validation, id generation,
//! admin filtering, and search over the live list.

use faqih_catalog::{
    AddOutcome, DocumentStore, ExclusionStore, FatwaCatalog, JsonFileExclusionStore,
    LatifaCatalog, MemoryDocumentStore, MemoryExclusionStore, UpdateOutcome,
};
use faqih_core::{CategoryId, Error, Fatwa, Latifa, Verdict};
use faqih_search::{EmptyQueryPolicy, SearchOptions, Searcher};
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn fatwa(id: &str, title: &str, tags: &[&str]) -> Fatwa {
    Fatwa::new(id, CategoryId::Surgery, title, "ما الحكم؟", Verdict::Conditional)
        .with_ruling("يجوز بشروط")
        .with_tags(tags.iter().copied())
}

fn seed() -> Vec<Fatwa> {
    vec![
        fatwa("s1", "حكم زراعة الأعضاء", &["زراعة"]),
        fatwa("s2", "حكم التخدير الكلي", &[]),
        fatwa("s3", "الصيام بعد العملية", &["صيام"]),
    ]
}

fn ids(catalog: &FatwaCatalog) -> Vec<&str> {
    catalog.records().iter().map(|f| f.id.as_str()).collect()
}

// ============================================================================
// Load
// ============================================================================

/// Seed records come first, then store records
#[test]
fn test_load_merges_seed_then_store() {
    init_tracing();
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa(
        "c1",
        "نقل الدم",
        &[],
    )]));
    let catalog = FatwaCatalog::load(seed(), store, Arc::new(MemoryExclusionStore::new()));

    assert_eq!(ids(&catalog), vec!["s1", "s2", "s3", "c1"]);
    assert!(catalog.get(&"c1".to_string()).unwrap().cloud_id.is_some());
    assert!(catalog.get(&"s1".to_string()).unwrap().cloud_id.is_none());
}

/// Excluded seed ids are dropped at load
#[test]
fn test_load_filters_excluded_seed() {
    let exclusions = Arc::new(MemoryExclusionStore::new());
    exclusions.mark_excluded("s2").unwrap();
    let catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        exclusions,
    );
    assert_eq!(ids(&catalog), vec!["s1", "s3"]);
}

/// An unreachable store leaves the seed list
#[test]
fn test_load_with_offline_store() {
    init_tracing();
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa("c1", "x", &[])]));
    store.set_offline(true);
    let catalog = FatwaCatalog::load(seed(), store, Arc::new(MemoryExclusionStore::new()));
    assert_eq!(ids(&catalog), vec!["s1", "s2", "s3"]);
}

// ============================================================================
// Delete
// ============================================================================

/// Deleting a seed record persists its id and survives a reload
#[test]
fn test_delete_seed_persists_exclusion() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deletedFatwaIds.json");
    let store = Arc::new(MemoryDocumentStore::<Fatwa>::new());

    let mut catalog = FatwaCatalog::load(
        seed(),
        store.clone(),
        Arc::new(JsonFileExclusionStore::open(&path)),
    );
    let removed = catalog.delete(&"s1".to_string()).unwrap();
    assert_eq!(removed.id, "s1");
    assert_eq!(ids(&catalog), vec!["s2", "s3"]);

    let reloaded =
        FatwaCatalog::load(seed(), store, Arc::new(JsonFileExclusionStore::open(&path)));
    assert_eq!(ids(&reloaded), vec!["s2", "s3"]);
}

/// Deleting a cloud record removes it from the store, not via exclusion
#[test]
fn test_delete_cloud_record() {
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa("c1", "x", &[])]));
    let exclusions = Arc::new(MemoryExclusionStore::new());
    let mut catalog = FatwaCatalog::load(Vec::new(), store.clone(), exclusions.clone());

    catalog.delete(&"c1".to_string()).unwrap();
    assert!(catalog.is_empty());
    assert!(store.is_empty());
    assert!(exclusions.excluded_ids().is_empty());
}

/// A failed store delete leaves the list unchanged
#[test]
fn test_delete_cloud_record_store_failure() {
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa("c1", "x", &[])]));
    let mut catalog =
        FatwaCatalog::load(Vec::new(), store.clone(), Arc::new(MemoryExclusionStore::new()));
    store.set_offline(true);

    let err = catalog.delete(&"c1".to_string()).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert_eq!(catalog.len(), 1);
}

/// Deleting an unknown id is NotFound
#[test]
fn test_delete_unknown() {
    let mut catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert!(matches!(
        catalog.delete(&"nope".to_string()),
        Err(Error::NotFound(_))
    ));
    assert_eq!(catalog.len(), 3);
}

// ============================================================================
// Add / Update
// ============================================================================

/// A stored add attaches the cloud id
#[test]
fn test_add_stores_and_attaches_cloud_id() {
    let store = Arc::new(MemoryDocumentStore::<Fatwa>::new());
    let mut catalog =
        FatwaCatalog::load(seed(), store.clone(), Arc::new(MemoryExclusionStore::new()));

    let outcome = catalog.add(fatwa("n1", "الختان", &[])).unwrap();
    let AddOutcome::Stored(cloud_id) = outcome else {
        panic!("expected stored outcome");
    };
    assert_eq!(
        catalog.get(&"n1".to_string()).unwrap().cloud_id.as_deref(),
        Some(cloud_id.as_str())
    );
    assert_eq!(store.len(), 1);
}

/// A failed store add still keeps the record locally
#[test]
fn test_add_store_failure_keeps_local() {
    init_tracing();
    let store = Arc::new(MemoryDocumentStore::<Fatwa>::new());
    store.set_offline(true);
    let mut catalog = FatwaCatalog::load(seed(), store, Arc::new(MemoryExclusionStore::new()));

    let outcome = catalog.add(fatwa("n1", "الختان", &[])).unwrap();
    assert_eq!(outcome, AddOutcome::LocalOnly);
    assert!(catalog.get(&"n1".to_string()).unwrap().cloud_id.is_none());
    assert_eq!(catalog.len(), 4);
}

/// Duplicate ids are rejected
#[test]
fn test_add_duplicate_rejected() {
    let mut catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    let err = catalog.add(fatwa("s1", "نسخة", &[])).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
}

/// Updating a seed record only changes the local copy
#[test]
fn test_update_seed_record() {
    let store = Arc::new(MemoryDocumentStore::<Fatwa>::new());
    let mut catalog =
        FatwaCatalog::load(seed(), store.clone(), Arc::new(MemoryExclusionStore::new()));

    let outcome = catalog.update(fatwa("s2", "حكم التخدير الموضعي", &[])).unwrap();
    assert_eq!(outcome, UpdateOutcome::Local);
    assert_eq!(
        catalog.get(&"s2".to_string()).unwrap().title,
        "حكم التخدير الموضعي"
    );
    assert!(store.is_empty());
}

/// Updating a cloud record writes through to the store
#[test]
fn test_update_cloud_record() {
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa("c1", "قديم", &[])]));
    let mut catalog =
        FatwaCatalog::load(Vec::new(), store.clone(), Arc::new(MemoryExclusionStore::new()));

    let mut changed = catalog.get(&"c1".to_string()).unwrap().clone();
    changed.title = "جديد".to_string();
    assert_eq!(catalog.update(changed).unwrap(), UpdateOutcome::Stored);

    assert_eq!(store.list().unwrap()[0].title, "جديد");
    assert_eq!(catalog.records()[0].title, "جديد");
}

/// A failed store update still replaces the local fatwa and reports it
#[test]
fn test_update_cloud_fatwa_store_failure_updates_locally() {
    init_tracing();
    let store = Arc::new(MemoryDocumentStore::with_records(vec![fatwa("c1", "قديم", &[])]));
    let mut catalog =
        FatwaCatalog::load(Vec::new(), store.clone(), Arc::new(MemoryExclusionStore::new()));
    store.set_offline(true);

    let mut changed = catalog.records()[0].clone();
    changed.title = "جديد".to_string();
    let outcome = catalog.update(changed).unwrap();
    assert!(matches!(outcome, UpdateOutcome::StoreFailed(ref msg) if msg.contains("Store error")));
    assert_eq!(catalog.records()[0].title, "جديد");

    store.set_offline(false);
    assert_eq!(store.list().unwrap()[0].title, "قديم");
}

/// Records with an empty required field are rejected before any write
#[test]
fn test_add_and_update_reject_invalid_fatwa() {
    let store = Arc::new(MemoryDocumentStore::<Fatwa>::new());
    let mut catalog =
        FatwaCatalog::load(seed(), store.clone(), Arc::new(MemoryExclusionStore::new()));

    let err = catalog.add(fatwa("n1", "", &[])).unwrap_err();
    assert!(matches!(err, Error::Invalid(ref msg) if msg.contains("title")));

    let mut no_ruling = fatwa("s1", "حكم زراعة الأعضاء", &[]);
    no_ruling.ruling.clear();
    assert!(matches!(catalog.update(no_ruling), Err(Error::Invalid(_))));

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.records()[0].ruling, "يجوز بشروط");
    assert!(store.is_empty());
}

/// Updating an unknown id is NotFound
#[test]
fn test_update_unknown() {
    let mut catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert!(matches!(
        catalog.update(fatwa("zz", "x", &[])),
        Err(Error::NotFound(_))
    ));
}

// ============================================================================
// Fatwa ids and admin filter
// ============================================================================

/// Generated ids use the category prefix, a padded count and the year
#[test]
fn test_next_fatwa_id() {
    let catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert_eq!(catalog.next_fatwa_id(CategoryId::Surgery, 2025), "surg_004_2025");
    assert_eq!(catalog.next_fatwa_id(CategoryId::Ethics, 2025), "ethics_001_2025");
}

/// A generated id skips past one already taken
#[test]
fn test_next_fatwa_id_skips_taken() {
    let mut seed = seed();
    seed[0].id = "surg_004_2025".to_string();
    let catalog = FatwaCatalog::load(
        seed,
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert_eq!(catalog.next_fatwa_id(CategoryId::Surgery, 2025), "surg_005_2025");
}

/// Admin filter is a raw substring match on title, id or question
#[test]
fn test_fatwa_admin_filter() {
    let mut records = seed();
    records.push(
        Fatwa::new("e1", CategoryId::Ethics, "إفشاء السر", "ما حكم إفشاء سر المريض؟", Verdict::Forbidden)
            .with_ruling("لا يجوز"),
    );
    let catalog = FatwaCatalog::load(
        records,
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );

    let by_title: Vec<&str> = catalog
        .admin_filter("التخدير", None)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(by_title, vec!["s2"]);

    // No normalization: the bare-alef spelling misses the hamza title
    assert!(catalog.admin_filter("افشاء", None).is_empty());
    assert_eq!(catalog.admin_filter("e1", None).len(), 1);
    assert_eq!(catalog.admin_filter("سر المريض", None).len(), 1);

    assert_eq!(catalog.admin_filter("", None).len(), 4);
    assert_eq!(catalog.admin_filter("", Some(CategoryId::Ethics)).len(), 1);
    assert!(catalog.admin_filter("التخدير", Some(CategoryId::Ethics)).is_empty());
}

// ============================================================================
// Search over the live list
// ============================================================================

/// Deleted records no longer show up in search
#[test]
fn test_search_after_delete() {
    let mut catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    let searcher = Searcher::default();
    assert_eq!(catalog.search("زراعة", &searcher).len(), 1);

    catalog.delete(&"s1".to_string()).unwrap();
    assert!(catalog.search("زراعة", &searcher).is_empty());
}

/// Empty-query policy passes through the catalog
#[test]
fn test_catalog_search_empty_query_policies() {
    let catalog = FatwaCatalog::load(
        seed(),
        Arc::new(MemoryDocumentStore::<Fatwa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert!(catalog.search("", &Searcher::default()).is_empty());

    let all =
        Searcher::new(SearchOptions::default().with_empty_query(EmptyQueryPolicy::MatchAll));
    assert_eq!(catalog.search("", &all).len(), 3);
}

// ============================================================================
// Lataif
// ============================================================================

/// New lataif get sequential ids and are stored
#[test]
fn test_latifa_add_with_next_id() {
    let seed = vec![
        Latifa::new(1, "ابن النفيس والدورة الدموية"),
        Latifa::new(2, "الرازي"),
    ];
    let store = Arc::new(MemoryDocumentStore::<Latifa>::new());
    let mut catalog = LatifaCatalog::load(
        seed.clone(),
        store.clone(),
        Arc::new(MemoryExclusionStore::new()),
    );

    catalog.add_with_next_id(&seed, Latifa::new(0, "الزهراوي")).unwrap();
    catalog.add_with_next_id(&seed, Latifa::new(0, "ابن سينا")).unwrap();

    let ids: Vec<u64> = catalog.records().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(store.len(), 2);
}

/// A latifa the store rejects is not added
#[test]
fn test_latifa_add_store_failure_not_added() {
    init_tracing();
    let store = Arc::new(MemoryDocumentStore::<Latifa>::new());
    store.set_offline(true);
    let mut catalog =
        LatifaCatalog::load(Vec::new(), store, Arc::new(MemoryExclusionStore::new()));

    let err = catalog.add_with_next_id(&[], Latifa::new(0, "الزهراوي")).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(catalog.is_empty());
}

/// A latifa update the store rejects leaves the local copy unchanged
#[test]
fn test_latifa_update_store_failure_unchanged() {
    let store = Arc::new(MemoryDocumentStore::with_records(vec![Latifa::new(5, "قديم")]));
    let mut catalog =
        LatifaCatalog::load(Vec::new(), store.clone(), Arc::new(MemoryExclusionStore::new()));
    store.set_offline(true);

    let mut changed = catalog.records()[0].clone();
    changed.text = "جديد".to_string();
    assert!(matches!(catalog.update(changed), Err(Error::Store(_))));
    assert_eq!(catalog.records()[0].text, "قديم");
}

/// A latifa with empty text is rejected
#[test]
fn test_latifa_add_rejects_empty_text() {
    let mut catalog = LatifaCatalog::load(
        Vec::new(),
        Arc::new(MemoryDocumentStore::<Latifa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    let err = catalog.add_with_next_id(&[], Latifa::new(0, "")).unwrap_err();
    assert!(matches!(err, Error::Invalid(_)));
    assert!(catalog.is_empty());
}

/// The largest possible id has no successor
#[test]
fn test_latifa_next_id_at_max_is_error() {
    let seed = vec![Latifa::new(u64::MAX, "نص")];
    let mut catalog = LatifaCatalog::load(
        seed.clone(),
        Arc::new(MemoryDocumentStore::<Latifa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );
    assert!(matches!(catalog.next_id(&seed), Err(Error::Invalid(_))));
    assert!(catalog.add_with_next_id(&seed, Latifa::new(0, "آخر")).is_err());
    assert_eq!(catalog.len(), 1);
}

/// Latifa admin filter is case-insensitive over text, category and source
#[test]
fn test_latifa_admin_filter() {
    let mut with_source = Latifa::new(1, "Avicenna and the Canon");
    with_source.source = Some("تاريخ الطب".to_string());
    let mut with_category = Latifa::new(2, "ابن النفيس");
    with_category.category = Some("History".to_string());
    let catalog = LatifaCatalog::load(
        vec![with_source, with_category, Latifa::new(3, "الرازي")],
        Arc::new(MemoryDocumentStore::<Latifa>::new()),
        Arc::new(MemoryExclusionStore::new()),
    );

    let ids = |query: &str| -> Vec<u64> {
        catalog.admin_filter(query).iter().map(|l| l.id).collect()
    };
    assert_eq!(ids("AVICENNA"), vec![1]);
    assert_eq!(ids("history"), vec![2]);
    assert_eq!(ids("الطب"), vec![1]);
    assert_eq!(ids(""), vec![1, 2, 3]);
}

/// Deleting a seed latifa excludes it by its decimal id
#[test]
fn test_latifa_delete_seed_uses_decimal_key() {
    let seed = vec![Latifa::new(12, "نص")];
    let exclusions = Arc::new(MemoryExclusionStore::new());
    let mut catalog = LatifaCatalog::load(
        seed,
        Arc::new(MemoryDocumentStore::<Latifa>::new()),
        exclusions.clone(),
    );
    catalog.delete(&12).unwrap();
    assert_eq!(exclusions.excluded_ids(), vec!["12"]);
}
