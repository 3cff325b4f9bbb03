//! Offline answers computed from the bundled sample set.
//!
//! These keep the explorer populated when the backend cannot be reached.
//! The cluster and projection outputs are placeholders and do not
//! approximate K-Means, PCA or UMAP.

mod analytics;
mod sample;

pub use analytics::{
    circle_position, cluster, euclidean_distance, projection, similarity, similarity_score,
    PROJECTION_JITTER, PROJECTION_RADIUS, SIMILARITY_FEATURES,
};
pub use sample::{find_sample, sample_aliens};
