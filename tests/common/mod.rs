#![allow(dead_code)]

use async_trait::async_trait;
use country_explorer::domain::traits::{CountryDirectory, KvStore};
use country_explorer::infrastructure::config::Config;
use country_explorer::infrastructure::storage::memory::MemoryStore;
use country_explorer::{AppState, CountryRecord, ExplorerError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn country(common: &str, capital: &str) -> CountryRecord {
    serde_json::from_value(serde_json::json!({
        "name": {"common": common, "official": format!("Republic of {}", common)},
        "capital": [capital],
        "population": 1000,
        "area": 100.0,
        "flags": {"svg": format!("https://flagcdn.com/{}.svg", common.to_lowercase())},
        "languages": {"xxx": "Testish"},
        "timezones": ["UTC+01:00"],
        "currencies": {"XTS": {"name": "Test dollar", "symbol": "$"}}
    }))
    .unwrap()
}

/// Directory that answers from a fixed table and counts every request.
#[derive(Default)]
pub struct FakeDirectory {
    answers: HashMap<String, Vec<CountryRecord>>,
    failing: bool,
    pub calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn with(mut self, name: &str, records: Vec<CountryRecord>) -> Self {
        self.answers.insert(name.to_string(), records);
        self
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryDirectory for FakeDirectory {
    async fn find_by_full_name(&self, name: &str) -> Result<Vec<CountryRecord>, ExplorerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ExplorerError::Io(std::io::Error::other("connection reset")));
        }
        Ok(self.answers.get(name).cloned().unwrap_or_default())
    }
}

/// Directory that parks each request until released.
pub struct GatedDirectory {
    pub entered: Notify,
    pub release: Notify,
    pub record: CountryRecord,
}

#[async_trait]
impl CountryDirectory for GatedDirectory {
    async fn find_by_full_name(&self, _name: &str) -> Result<Vec<CountryRecord>, ExplorerError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(vec![self.record.clone()])
    }
}

/// Store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KvStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, ExplorerError> {
        Err(ExplorerError::Io(std::io::Error::other("disk unavailable")))
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), ExplorerError> {
        Err(ExplorerError::Io(std::io::Error::other("disk unavailable")))
    }

    async fn count(&self) -> Result<usize, ExplorerError> {
        Err(ExplorerError::Io(std::io::Error::other("disk unavailable")))
    }
}

pub async fn state_with(store: Arc<dyn KvStore>, directory: Arc<dyn CountryDirectory>) -> AppState {
    AppState::new(store, directory, Config::default()).await
}

pub async fn memory_state(directory: Arc<dyn CountryDirectory>) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = state_with(store.clone(), directory).await;
    (state, store)
}
