use serde::{Deserialize, Serialize};

use crate::error::{OmnitrixError, Result};
use crate::models::{Alien, Feature};

pub const MIN_CLUSTERS: u32 = 2;
pub const MAX_CLUSTERS: u32 = 5;
pub const MIN_FEATURES: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    pub alien: Alien,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SimilarityData {
    pub similar: Vec<SimilarityResult>,
    pub opposite: Option<SimilarityResult>,
}

impl SimilarityData {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterResult {
    pub cluster: u32,
    pub aliens: Vec<Alien>,
}

/// A 2D coordinate for one alien. `cluster` only drives colour coding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    pub id: String,
    pub display_name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    #[default]
    Cosine,
    Euclidean,
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cosine => write!(f, "cosine"),
            Self::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl std::str::FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(format!("Unknown similarity metric: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClusterAlgorithm {
    #[default]
    Kmeans,
    Hierarchical,
}

impl std::fmt::Display for ClusterAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kmeans => write!(f, "kmeans"),
            Self::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

impl std::str::FromStr for ClusterAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kmeans" | "k-means" => Ok(Self::Kmeans),
            "hierarchical" => Ok(Self::Hierarchical),
            _ => Err(format!("Unknown clustering algorithm: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMethod {
    #[default]
    Pca,
    Umap,
}

impl std::fmt::Display for ProjectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pca => write!(f, "pca"),
            Self::Umap => write!(f, "umap"),
        }
    }
}

impl std::str::FromStr for ProjectionMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pca" => Ok(Self::Pca),
            "umap" => Ok(Self::Umap),
            _ => Err(format!("Unknown projection method: {s}")),
        }
    }
}

fn validate_features(features: &[Feature]) -> Result<()> {
    if features.len() < MIN_FEATURES {
        return Err(OmnitrixError::Validation(format!(
            "At least {MIN_FEATURES} features must be selected"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterParams {
    pub algorithm: ClusterAlgorithm,
    pub k: u32,
    pub features: Vec<Feature>,
}

impl ClusterParams {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CLUSTERS..=MAX_CLUSTERS).contains(&self.k) {
            return Err(OmnitrixError::Validation(format!(
                "Cluster count must be between {MIN_CLUSTERS} and {MAX_CLUSTERS}, got {}",
                self.k
            )));
        }
        validate_features(&self.features)
    }
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            algorithm: ClusterAlgorithm::default(),
            k: 3,
            features: Feature::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectionParams {
    pub method: ProjectionMethod,
    pub features: Vec<Feature>,
}

impl ProjectionParams {
    pub fn validate(&self) -> Result<()> {
        validate_features(&self.features)
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            method: ProjectionMethod::default(),
            features: Feature::ALL.to_vec(),
        }
    }
}
