use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::KeyValueStore;
use crate::error::Result;
use crate::models::{ClusterResult, ProjectionPoint};

pub const CLUSTER_CACHE_KEY: &str = "cluster_cache";
pub const PROJECTION_CACHE_KEY: &str = "projection_cache";

/// Single-slot cache of the latest cluster and projection results.
///
/// Keys carry only the result class, so a value produced under other
/// parameters is served until the next run overwrites it.
#[derive(Clone)]
pub struct ResultCache<S> {
    store: S,
}

impl<S: KeyValueStore> ResultCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_clusters(&self) -> Option<Vec<ClusterResult>> {
        self.load(CLUSTER_CACHE_KEY)
    }

    pub fn store_clusters(&self, clusters: &[ClusterResult]) -> Result<()> {
        self.save(CLUSTER_CACHE_KEY, clusters)
    }

    pub fn load_projection(&self) -> Option<Vec<ProjectionPoint>> {
        self.load(PROJECTION_CACHE_KEY)
    }

    pub fn store_projection(&self, points: &[ProjectionPoint]) -> Result<()> {
        self.save(PROJECTION_CACHE_KEY, points)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read cached result");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "Loaded cached result");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable cached result");
                if let Err(e) = self.store.clear(key) {
                    warn!(key, error = %e, "Failed to clear unreadable cached result");
                }
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Stored result in cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::fallback;

    #[test]
    fn test_cluster_round_trip() {
        let store = MemoryStore::new();
        let cache = ResultCache::new(store.clone());
        let clusters = fallback::cluster(&fallback::sample_aliens(), 4);

        cache.store_clusters(&clusters).unwrap();

        let reloaded = ResultCache::new(store);
        assert_eq!(reloaded.load_clusters(), Some(clusters));
    }

    #[test]
    fn test_empty_cache_loads_nothing() {
        let cache = ResultCache::new(MemoryStore::new());
        assert!(cache.load_clusters().is_none());
        assert!(cache.load_projection().is_none());
    }

    #[test]
    fn test_corrupt_entry_is_discarded() {
        let store = MemoryStore::new();
        store.set(PROJECTION_CACHE_KEY, "{not json").unwrap();

        let cache = ResultCache::new(store.clone());
        assert!(cache.load_projection().is_none());
        assert_eq!(store.get(PROJECTION_CACHE_KEY).unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_discarded() {
        let store = MemoryStore::new();
        store.set(CLUSTER_CACHE_KEY, r#"{"cluster": "zero"}"#).unwrap();

        let cache = ResultCache::new(store.clone());
        assert!(cache.load_clusters().is_none());
        assert_eq!(store.get(CLUSTER_CACHE_KEY).unwrap(), None);
    }

    #[test]
    fn test_new_result_overwrites_previous() {
        let cache = ResultCache::new(MemoryStore::new());
        let pool = fallback::sample_aliens();

        cache.store_clusters(&fallback::cluster(&pool, 2)).unwrap();
        cache.store_clusters(&fallback::cluster(&pool, 5)).unwrap();

        assert_eq!(cache.load_clusters().unwrap().len(), 5);
    }
}
