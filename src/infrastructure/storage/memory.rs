// In-memory store implementation using DashMap
use crate::domain::error::ExplorerError;
use crate::domain::traits::KvStore;
use async_trait::async_trait;
use dashmap::DashMap;

/// Thread-safe in-memory key-value store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ExplorerError> {
        Ok(self.map.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ExplorerError> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    async fn count(&self) -> Result<usize, ExplorerError> {
        Ok(self.map.len())
    }
}
