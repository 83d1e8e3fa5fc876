// Lookup cache: trimmed search text -> country record
use crate::domain::model::CountryRecord;
use crate::domain::traits::KvStore;
use crate::infrastructure::storage::{read_json, write_json};
use std::sync::Arc;

/// Persistent cache of directory answers keyed by search text.
///
/// No eviction and no expiry. Read and write failures are logged and
/// reported as a miss or as `false`, never as errors.
#[derive(Clone)]
pub struct LookupCache {
    store: Arc<dyn KvStore>,
}

impl LookupCache {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, key: &str) -> Option<CountryRecord> {
        read_json(self.store.as_ref(), key, "cached country")
            .await
            .into_option()
    }

    /// Last write wins when two puts race on one key.
    pub async fn put(&self, key: &str, record: &CountryRecord) -> bool {
        write_json(self.store.as_ref(), key, record, "cached country").await
    }
}
