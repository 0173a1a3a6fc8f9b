use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored photo. The store owns these; everything else only holds copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    /// Creation time in epoch milliseconds, unique within a library.
    pub id: String,
    pub storage_uri: PathBuf,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}

impl PhotoEntry {
    /// Newest first, ties broken by id so ordering is total.
    pub(crate) fn newest_first(a: &PhotoEntry, b: &PhotoEntry) -> std::cmp::Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}
