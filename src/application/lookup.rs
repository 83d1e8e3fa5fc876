use crate::domain::model::CountryRecord;
use crate::infrastructure::storage::favourites::FAVOURITES_KEY;
use crate::state::AppState;
use std::sync::atomic::Ordering;
use tracing::{debug, info, warn};

/// What a single search did to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank input; display cleared without any lookup.
    Empty,
    CacheHit(CountryRecord),
    Fetched(CountryRecord),
    /// Directory had no match; display cleared.
    NotFound,
    /// Network or decoding failure, already logged; display cleared.
    Failed,
    /// A newer search started first; this result was dropped.
    Superseded,
}

impl SearchOutcome {
    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            SearchOutcome::CacheHit(record) | SearchOutcome::Fetched(record) => Some(record),
            _ => None,
        }
    }
}

/// Run one lookup for raw search text and publish the result as the display.
///
/// The trimmed text is the cache key and the name sent to the directory.
/// Only the first directory candidate is kept.
pub async fn handle_search(state: &AppState, text: &str) -> SearchOutcome {
    let generation = state.generation.fetch_add(1, Ordering::SeqCst) + 1;
    let key = text.trim();

    if key.is_empty() {
        return publish(state, generation, SearchOutcome::Empty).await;
    }

    // 1. Lookup cache
    if let Some(record) = state.cache.get(key).await {
        debug!(key, "lookup cache hit");
        return publish(state, generation, SearchOutcome::CacheHit(record)).await;
    }

    // 2. Country directory
    let outcome = match state.directory.find_by_full_name(key).await {
        Ok(candidates) => match candidates.into_iter().next() {
            Some(record) => {
                // Cache and favourites share one key namespace.
                if key == FAVOURITES_KEY {
                    warn!(key, "not caching a country under the favourites key");
                } else {
                    state.cache.put(key, &record).await;
                }
                SearchOutcome::Fetched(record)
            }
            None => {
                info!(key, "no country matched");
                SearchOutcome::NotFound
            }
        },
        Err(e) => {
            warn!(key, error = %e, "country lookup failed");
            SearchOutcome::Failed
        }
    };

    publish(state, generation, outcome).await
}

async fn publish(state: &AppState, generation: u64, outcome: SearchOutcome) -> SearchOutcome {
    let mut display = state.display.write().await;

    if state.generation.load(Ordering::SeqCst) != generation {
        debug!(generation, "dropping superseded search result");
        return SearchOutcome::Superseded;
    }

    *display = outcome.record().cloned();
    outcome
}
