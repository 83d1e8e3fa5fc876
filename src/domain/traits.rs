use crate::domain::error::ExplorerError;
use crate::domain::model::CountryRecord;
use async_trait::async_trait;

/// Source of country records.
///
/// The production implementation talks to the REST Countries API; tests
/// substitute an in-process fake.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Look up countries whose name matches `name` exactly.
    ///
    /// An unknown name yields an empty list rather than an error.
    async fn find_by_full_name(&self, name: &str) -> Result<Vec<CountryRecord>, ExplorerError>;
}

/// Asynchronous string-keyed storage for serialized JSON values.
///
/// Both the lookup cache and the favourites list live in one store and share
/// its key namespace.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the raw value stored under `key`, `Ok(None)` if there is none.
    async fn get(&self, key: &str) -> Result<Option<String>, ExplorerError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), ExplorerError>;

    /// Number of keys currently stored.
    async fn count(&self) -> Result<usize, ExplorerError>;
}
