use tracing::{debug, info, warn};

use crate::cache::{KeyValueStore, ResultCache};
use crate::error::{OmnitrixError, Result};
use crate::fallback;
use crate::gateway::{or_fallback, or_try_fallback, AlienSource};
use crate::models::{
    Alien, AlienDetail, ApiStatus, ClusterParams, ClusterResult, ProjectionParams, ProjectionPoint,
    SimilarityData, SimilarityMetric,
};

/// Entry point for the explorer's data needs.
///
/// Every query goes to the remote source first and falls back to the bundled
/// sample set on failure. Cluster and projection runs are written to the
/// result cache whichever side produced them.
pub struct Explorer<S, K> {
    source: S,
    cache: ResultCache<K>,
}

impl<S: AlienSource, K: KeyValueStore> Explorer<S, K> {
    pub fn new(source: S, store: K) -> Self {
        Self {
            source,
            cache: ResultCache::new(store),
        }
    }

    /// Backend reachability for the status badge. Never fails.
    pub async fn api_status(&self) -> ApiStatus {
        match self.source.health().await {
            Ok(()) => ApiStatus::Online,
            Err(e) => {
                debug!(error = %e, "Alien API health check failed");
                ApiStatus::Offline
            }
        }
    }

    /// Gallery listing. Never fails.
    pub async fn fetch_aliens(&self) -> Vec<Alien> {
        or_fallback(
            self.source.list_aliens().await,
            "fetch_aliens",
            fallback::sample_aliens,
        )
    }

    /// Single alien; `NotFound` only when neither side knows the id.
    pub async fn fetch_alien(&self, id: &str) -> Result<Alien> {
        if id.is_empty() {
            return Err(OmnitrixError::Validation(
                "Alien id cannot be empty".to_string(),
            ));
        }

        or_try_fallback(self.source.get_alien(id).await, "fetch_alien", || {
            fallback::find_sample(id)
                .ok_or_else(|| OmnitrixError::NotFound(format!("Alien not found: {id}")))
        })
    }

    /// Nearest and furthest aliens. An empty id yields empty data without a
    /// request.
    pub async fn fetch_similarity(&self, id: &str, metric: SimilarityMetric) -> SimilarityData {
        if id.is_empty() {
            debug!("Skipping similarity query for empty alien id");
            return SimilarityData::empty();
        }

        or_fallback(
            self.source.similarity(id, metric).await,
            "fetch_similarity",
            || fallback::similarity(&fallback::sample_aliens(), id),
        )
    }

    pub async fn run_cluster(&self, params: &ClusterParams) -> Result<Vec<ClusterResult>> {
        params.validate()?;

        let clusters = or_fallback(self.source.cluster(params).await, "run_cluster", || {
            fallback::cluster(&fallback::sample_aliens(), params.k)
        });

        info!(
            algorithm = %params.algorithm,
            k = params.k,
            clusters = clusters.len(),
            "Clustering complete"
        );

        // Synchronous store write; each slot holds a single small JSON document.
        if let Err(e) = self.cache.store_clusters(&clusters) {
            warn!(error = %e, "Failed to cache cluster result");
        }

        Ok(clusters)
    }

    pub async fn run_projection(&self, params: &ProjectionParams) -> Result<Vec<ProjectionPoint>> {
        params.validate()?;

        let points = or_fallback(
            self.source.projection(params).await,
            "run_projection",
            || fallback::projection(&fallback::sample_aliens(), &mut rand::thread_rng()),
        );

        info!(method = %params.method, points = points.len(), "Projection complete");

        // Synchronous, as for clusters.
        if let Err(e) = self.cache.store_projection(&points) {
            warn!(error = %e, "Failed to cache projection result");
        }

        Ok(points)
    }

    /// Last cluster result from any earlier run, read without network access.
    pub fn cached_clusters(&self) -> Option<Vec<ClusterResult>> {
        self.cache.load_clusters()
    }

    pub fn cached_projection(&self) -> Option<Vec<ProjectionPoint>> {
        self.cache.load_projection()
    }

    /// Detail panel data. There is no offline equivalent.
    pub async fn alien_detail(&self, id: &str) -> Result<AlienDetail> {
        if id.is_empty() {
            return Err(OmnitrixError::Validation(
                "Alien id cannot be empty".to_string(),
            ));
        }
        self.source.alien_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::models::{ClusterAlgorithm, Feature, SimilarityResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Source that always fails and counts how often it was asked.
    #[derive(Clone, Default)]
    struct OfflineSource {
        calls: Arc<AtomicUsize>,
    }

    impl OfflineSource {
        fn fail<T>(&self) -> Result<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(OmnitrixError::GatewayUnavailable("offline".to_string()))
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AlienSource for OfflineSource {
        async fn health(&self) -> Result<()> {
            self.fail()
        }
        async fn list_aliens(&self) -> Result<Vec<Alien>> {
            self.fail()
        }
        async fn get_alien(&self, _id: &str) -> Result<Alien> {
            self.fail()
        }
        async fn alien_detail(&self, _id: &str) -> Result<AlienDetail> {
            self.fail()
        }
        async fn similarity(&self, _id: &str, _metric: SimilarityMetric) -> Result<SimilarityData> {
            self.fail()
        }
        async fn cluster(&self, _params: &ClusterParams) -> Result<Vec<ClusterResult>> {
            self.fail()
        }
        async fn projection(&self, _params: &ProjectionParams) -> Result<Vec<ProjectionPoint>> {
            self.fail()
        }
    }

    /// Source that answers everything with one fixed alien.
    struct StaticSource {
        alien: Alien,
    }

    #[async_trait]
    impl AlienSource for StaticSource {
        async fn health(&self) -> Result<()> {
            Ok(())
        }
        async fn list_aliens(&self) -> Result<Vec<Alien>> {
            Ok(vec![self.alien.clone()])
        }
        async fn get_alien(&self, _id: &str) -> Result<Alien> {
            Ok(self.alien.clone())
        }
        async fn alien_detail(&self, id: &str) -> Result<AlienDetail> {
            Err(OmnitrixError::NotFound(id.to_string()))
        }
        async fn similarity(&self, _id: &str, _metric: SimilarityMetric) -> Result<SimilarityData> {
            Ok(SimilarityData {
                similar: vec![SimilarityResult {
                    alien: self.alien.clone(),
                    similarity: 0.99,
                }],
                opposite: None,
            })
        }
        async fn cluster(&self, params: &ClusterParams) -> Result<Vec<ClusterResult>> {
            Ok((0..params.k)
                .map(|cluster| ClusterResult {
                    cluster,
                    aliens: vec![self.alien.clone()],
                })
                .collect())
        }
        async fn projection(&self, _params: &ProjectionParams) -> Result<Vec<ProjectionPoint>> {
            Ok(vec![ProjectionPoint {
                id: self.alien.id.clone(),
                display_name: self.alien.name.clone(),
                x: 1.0,
                y: 2.0,
                cluster: None,
            }])
        }
    }

    fn remote_alien() -> Alien {
        Alien {
            id: "42".to_string(),
            name: "Way Big".to_string(),
            image: String::new(),
            species: Some("To'kustar".to_string()),
            strength: 100,
            speed: 40,
            intelligence: 50,
            durability: 100,
            power: 90,
            combat: 80,
        }
    }

    #[tokio::test]
    async fn test_remote_results_win() {
        let explorer = Explorer::new(
            StaticSource {
                alien: remote_alien(),
            },
            MemoryStore::new(),
        );

        let aliens = explorer.fetch_aliens().await;
        assert_eq!(aliens, vec![remote_alien()]);

        let data = explorer.fetch_similarity("1", SimilarityMetric::Cosine).await;
        assert_eq!(data.similar[0].similarity, 0.99);

        let alien = explorer.fetch_alien("999").await.unwrap();
        assert_eq!(alien.name, "Way Big");
    }

    #[tokio::test]
    async fn test_api_status_follows_health() {
        let online = Explorer::new(
            StaticSource {
                alien: remote_alien(),
            },
            MemoryStore::new(),
        );
        assert_eq!(online.api_status().await, ApiStatus::Online);

        let source = OfflineSource::default();
        let offline = Explorer::new(source.clone(), MemoryStore::new());
        assert_eq!(offline.api_status().await, ApiStatus::Offline);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_offline_fetch_alien_uses_samples() {
        let explorer = Explorer::new(OfflineSource::default(), MemoryStore::new());

        let alien = explorer.fetch_alien("8").await.unwrap();
        assert_eq!(alien.name, "Ripjaws");

        let err = explorer.fetch_alien("999").await.unwrap_err();
        assert!(matches!(err, OmnitrixError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_ids_skip_the_source() {
        let source = OfflineSource::default();
        let explorer = Explorer::new(source.clone(), MemoryStore::new());

        let data = explorer.fetch_similarity("", SimilarityMetric::Cosine).await;
        assert!(data.similar.is_empty() && data.opposite.is_none());

        assert!(matches!(
            explorer.fetch_alien("").await,
            Err(OmnitrixError::Validation(_))
        ));
        assert!(explorer.alien_detail("").await.is_err());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_params_are_rejected_before_request() {
        let source = OfflineSource::default();
        let explorer = Explorer::new(source.clone(), MemoryStore::new());

        let params = ClusterParams {
            algorithm: ClusterAlgorithm::Kmeans,
            k: 9,
            features: vec![Feature::Speed, Feature::Power],
        };
        assert!(matches!(
            explorer.run_cluster(&params).await,
            Err(OmnitrixError::Validation(_))
        ));

        let params = ProjectionParams {
            features: vec![Feature::Speed],
            ..ProjectionParams::default()
        };
        assert!(explorer.run_projection(&params).await.is_err());

        assert_eq!(source.calls(), 0);
        assert!(explorer.cached_clusters().is_none());
        assert!(explorer.cached_projection().is_none());
    }

    #[tokio::test]
    async fn test_remote_cluster_result_is_cached() {
        let store = MemoryStore::new();
        let explorer = Explorer::new(
            StaticSource {
                alien: remote_alien(),
            },
            store.clone(),
        );

        let clusters = explorer.run_cluster(&ClusterParams::default()).await.unwrap();
        assert_eq!(clusters.len(), 3);

        let reloaded = Explorer::new(OfflineSource::default(), store);
        assert_eq!(reloaded.cached_clusters(), Some(clusters));
    }

    #[tokio::test]
    async fn test_offline_projection_is_cached() {
        let explorer = Explorer::new(OfflineSource::default(), MemoryStore::new());

        let points = explorer
            .run_projection(&ProjectionParams::default())
            .await
            .unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(explorer.cached_projection(), Some(points));
    }
}
