pub mod cache;
pub mod db;
pub mod favourites;
pub mod memory;

use crate::domain::traits::KvStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Outcome of reading a JSON value from the store.
///
/// Failures are logged where they happen; callers above the store usually
/// collapse `Failed` into `Absent` with [`Fetched::into_option`].
#[derive(Debug, PartialEq)]
pub enum Fetched<T> {
    Value(T),
    Absent,
    Failed,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Value(value) => Some(value),
            Fetched::Absent | Fetched::Failed => None,
        }
    }
}

/// Read and decode the JSON value under `key`. `what` names the value in logs.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
    what: &str,
) -> Fetched<T> {
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Fetched::Value(value),
            Err(e) => {
                warn!(key, error = %e, "Error decoding stored {}", what);
                Fetched::Failed
            }
        },
        Ok(None) => Fetched::Absent,
        Err(e) => {
            warn!(key, error = %e, "Error retrieving stored {}", what);
            Fetched::Failed
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// Returns `false` after logging if the write failed.
pub async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
    what: &str,
) -> bool {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(key, error = %e, "Error encoding {}", what);
            return false;
        }
    };

    match store.set(key, encoded).await {
        Ok(()) => true,
        Err(e) => {
            warn!(key, error = %e, "Error saving {}", what);
            false
        }
    }
}
