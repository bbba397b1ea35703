use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use crate::models::UrlRecord;

/// Thread-safe in-memory store mapping short code -> URL record.
///
/// Backed by a DashMap so concurrent shorten requests and the inspection
/// dump never race on the underlying map. Sequence ids come from an atomic
/// counter and are unique for the life of the process. Nothing is persisted
/// or evicted; the store lives and dies with the process.
#[derive(Clone, Debug, Default)]
pub struct UrlStore {
    records: Arc<DashMap<String, UrlRecord>>,
    next_id: Arc<AtomicU64>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record for `url` under `code`, replacing any record already
    /// stored there. Returns the stored record with its freshly assigned
    /// sequence id and creation timestamp.
    pub fn insert(&self, code: &str, url: &str) -> UrlRecord {
        let record = UrlRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            original_url: url.to_owned(),
            short_code: code.to_owned(),
            created_at: Utc::now(),
        };
        self.records.insert(code.to_owned(), record.clone());
        record
    }

    /// Look up a short code. Returns a clone of the record if present.
    pub fn get(&self, code: &str) -> Option<UrlRecord> {
        self.records.get(code).map(|r| r.clone())
    }

    /// Snapshot of every stored record, ordered by sequence id.
    pub fn records(&self) -> Vec<UrlRecord> {
        let mut all: Vec<UrlRecord> = self.records.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|r| r.id);
        all
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
