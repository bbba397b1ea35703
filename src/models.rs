use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened-URL record held in the in-memory store.
///
/// The wire names (`short_url`, `creation_date`) are what the inspection dump
/// emits for each record; internally the code field is the same string the
/// record is keyed under.
#[derive(Debug, Clone, Serialize)]
pub struct UrlRecord {
    pub id: u64,
    pub original_url: String,
    #[serde(rename = "short_url")]
    pub short_code: String,
    #[serde(rename = "creation_date")]
    pub created_at: DateTime<Utc>,
}
