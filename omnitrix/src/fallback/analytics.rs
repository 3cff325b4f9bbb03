use std::f64::consts::PI;

use rand::Rng;

use crate::models::{
    Alien, ClusterResult, Feature, ProjectionPoint, SimilarityData, SimilarityResult,
};

/// Features compared by the offline similarity metric. Power and combat are
/// left out.
pub const SIMILARITY_FEATURES: [Feature; 4] = [
    Feature::Strength,
    Feature::Speed,
    Feature::Intelligence,
    Feature::Durability,
];

/// Distance at which offline similarity reaches zero.
pub const SIMILARITY_SCALE: f64 = 200.0;
pub const SIMILAR_COUNT: usize = 3;

pub const PROJECTION_RADIUS: f64 = 80.0;
pub const PROJECTION_JITTER: f64 = 10.0;
pub const PROJECTION_COLOURS: u32 = 3;

pub fn euclidean_distance(a: &Alien, b: &Alien, features: &[Feature]) -> f64 {
    features
        .iter()
        .map(|feature| {
            let diff = f64::from(a.stat(*feature)) - f64::from(b.stat(*feature));
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Maps a distance onto `[0, 1]`, clamping at zero past [`SIMILARITY_SCALE`].
pub fn similarity_score(distance: f64) -> f64 {
    (1.0 - distance / SIMILARITY_SCALE).max(0.0)
}

/// Ranks every other alien in `pool` against `source_id`.
///
/// Returns the closest [`SIMILAR_COUNT`] as `similar` and the furthest as
/// `opposite`. An id missing from the pool yields empty data.
pub fn similarity(pool: &[Alien], source_id: &str) -> SimilarityData {
    let Some(source) = pool.iter().find(|alien| alien.id == source_id) else {
        return SimilarityData::empty();
    };

    let mut ranked: Vec<SimilarityResult> = pool
        .iter()
        .filter(|alien| alien.id != source_id)
        .map(|alien| SimilarityResult {
            alien: alien.clone(),
            similarity: similarity_score(euclidean_distance(
                source,
                alien,
                &SIMILARITY_FEATURES,
            )),
        })
        .collect();

    // Stable: equal scores keep pool order.
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    let opposite = ranked.last().cloned();
    ranked.truncate(SIMILAR_COUNT);

    SimilarityData {
        similar: ranked,
        opposite,
    }
}

/// Round-robin placeholder: alien `i` lands in cluster `i mod k`.
pub fn cluster(pool: &[Alien], k: u32) -> Vec<ClusterResult> {
    let mut clusters: Vec<ClusterResult> = (0..k)
        .map(|cluster| ClusterResult {
            cluster,
            aliens: Vec::new(),
        })
        .collect();

    if clusters.is_empty() {
        return clusters;
    }

    let len = clusters.len();
    for (index, alien) in pool.iter().enumerate() {
        clusters[index % len].aliens.push(alien.clone());
    }

    clusters
}

/// Unjittered circle position for index `index` out of `total`.
pub fn circle_position(index: usize, total: usize) -> (f64, f64) {
    let angle = 2.0 * PI * index as f64 / total as f64;
    (
        angle.cos() * PROJECTION_RADIUS,
        angle.sin() * PROJECTION_RADIUS,
    )
}

/// Decorative placeholder geometry: a jittered circle, coloured `i mod 3`.
pub fn projection<R: Rng + ?Sized>(pool: &[Alien], rng: &mut R) -> Vec<ProjectionPoint> {
    let total = pool.len();
    pool.iter()
        .enumerate()
        .map(|(index, alien)| {
            let (x, y) = circle_position(index, total);
            ProjectionPoint {
                id: alien.id.clone(),
                display_name: alien.name.clone(),
                x: x + rng.gen_range(-PROJECTION_JITTER..=PROJECTION_JITTER),
                y: y + rng.gen_range(-PROJECTION_JITTER..=PROJECTION_JITTER),
                cluster: Some(index as u32 % PROJECTION_COLOURS),
            }
        })
        .collect()
}
