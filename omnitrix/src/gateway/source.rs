use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::models::{
    Alien, AlienDetail, ClusterParams, ClusterResult, ProjectionParams, ProjectionPoint,
    SimilarityData, SimilarityMetric,
};

/// Remote provider of alien data and analytics.
///
/// Every call is a single attempt. Failures are returned as-is; deciding
/// what to substitute is left to the caller.
#[async_trait]
pub trait AlienSource: Send + Sync {
    /// Succeeds when the backend answers its root with a 2xx status.
    async fn health(&self) -> Result<()>;

    async fn list_aliens(&self) -> Result<Vec<Alien>>;

    async fn get_alien(&self, id: &str) -> Result<Alien>;

    /// Extended record including super powers.
    async fn alien_detail(&self, id: &str) -> Result<AlienDetail>;

    async fn similarity(&self, id: &str, metric: SimilarityMetric) -> Result<SimilarityData>;

    async fn cluster(&self, params: &ClusterParams) -> Result<Vec<ClusterResult>>;

    async fn projection(&self, params: &ProjectionParams) -> Result<Vec<ProjectionPoint>>;
}

/// Keeps a successful remote value, otherwise substitutes `fallback()`.
pub fn or_fallback<T>(result: Result<T>, operation: &str, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(operation, error = %e, "Gateway request failed, using local fallback");
            fallback()
        }
    }
}

/// Like [`or_fallback`] for fallbacks that can themselves fail.
pub fn or_try_fallback<T>(
    result: Result<T>,
    operation: &str,
    fallback: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(operation, error = %e, "Gateway request failed, using local fallback");
            fallback()
        }
    }
}
