use crate::domain::traits::KvStore;
use crate::infrastructure::storage::{read_json, write_json};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const FAVOURITES_KEY: &str = "favourites";

/// Ordered list of favourite country names, mirrored in memory.
///
/// Every mutation replaces the whole persisted list. Duplicates are allowed.
/// If a save fails the in-memory list keeps the change anyway.
pub struct FavouritesStore {
    store: Arc<dyn KvStore>,
    names: RwLock<Vec<String>>,
}

impl FavouritesStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            names: RwLock::new(Vec::new()),
        }
    }

    /// Create the store and fill the in-memory list from persistence.
    pub async fn open(store: Arc<dyn KvStore>) -> Self {
        let favourites = Self::new(store);
        let loaded = favourites.load().await;
        *favourites.names.write().await = loaded;
        favourites
    }

    /// Persisted list, empty when nothing is stored or the read fails.
    pub async fn load(&self) -> Vec<String> {
        read_json(self.store.as_ref(), FAVOURITES_KEY, "favourites")
            .await
            .into_option()
            .unwrap_or_default()
    }

    pub async fn save(&self, list: &[String]) -> bool {
        write_json(self.store.as_ref(), FAVOURITES_KEY, list, "favourites").await
    }

    pub async fn add(&self, name: &str) {
        let updated = {
            let mut names = self.names.write().await;
            names.push(name.to_string());
            names.clone()
        };
        self.save(&updated).await;
    }

    /// Drop every entry equal to `name`. Saves even when nothing matched.
    pub async fn remove(&self, name: &str) {
        let updated = {
            let mut names = self.names.write().await;
            names.retain(|item| item != name);
            names.clone()
        };
        self.save(&updated).await;
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.names.read().await.iter().any(|item| item == name)
    }

    pub async fn list(&self) -> Vec<String> {
        self.names.read().await.clone()
    }
}
