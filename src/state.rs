use crate::domain::error::ExplorerError;
use crate::domain::model::CountryRecord;
use crate::domain::traits::{CountryDirectory, KvStore};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::RestCountriesDirectory;
use crate::infrastructure::storage::cache::LookupCache;
use crate::infrastructure::storage::db::SqliteStore;
use crate::infrastructure::storage::favourites::FavouritesStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_rusqlite::Connection;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub cache: LookupCache,
    pub favourites: Arc<FavouritesStore>,
    pub directory: Arc<dyn CountryDirectory>,
    pub config: Arc<RwLock<Config>>,
    /// Country currently on screen, if any.
    pub display: Arc<RwLock<Option<CountryRecord>>>,
    /// Bumped by every search; results from older searches are dropped.
    pub generation: Arc<AtomicU64>,
}

impl AppState {
    /// Wire the SQLite store and the REST Countries client.
    pub async fn connect(db: Connection, config: Config) -> Result<Self, ExplorerError> {
        let directory = RestCountriesDirectory::from_config(&config)?;
        let store = SqliteStore::new(db);
        Ok(Self::new(Arc::new(store), Arc::new(directory), config).await)
    }

    /// Build state over any store and directory. Favourites are loaded here.
    pub async fn new(
        store: Arc<dyn KvStore>,
        directory: Arc<dyn CountryDirectory>,
        config: Config,
    ) -> Self {
        let favourites = FavouritesStore::open(store.clone()).await;

        Self {
            cache: LookupCache::new(store.clone()),
            store,
            favourites: Arc::new(favourites),
            directory,
            config: Arc::new(RwLock::new(config)),
            display: Arc::new(RwLock::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn current(&self) -> Option<CountryRecord> {
        self.display.read().await.clone()
    }
}
