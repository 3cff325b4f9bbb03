use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::GatewayConfig;
use crate::error::{OmnitrixError, Result};
use crate::gateway::AlienSource;
use crate::models::{
    Alien, AlienDetail, AlienStats, ClusterParams, ClusterResult, Feature, ProjectionParams,
    ProjectionPoint, SimilarityData, SimilarityMetric, SimilarityResult,
};

#[derive(Debug, Deserialize)]
struct AlienRecord {
    id: String,
    name: String,
    #[serde(default)]
    original_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    strength: u8,
    speed: u8,
    intelligence: u8,
    durability: u8,
    power: u8,
    combat: u8,
}

impl From<AlienRecord> for Alien {
    fn from(record: AlienRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image: record.image_url.unwrap_or_default(),
            species: record.original_name,
            strength: record.strength,
            speed: record.speed,
            intelligence: record.intelligence,
            durability: record.durability,
            power: record.power,
            combat: record.combat,
        }
    }
}

/// Alien shape shared by the similarity and cluster endpoints.
#[derive(Debug, Deserialize)]
struct NestedAlienRecord {
    id: String,
    display_name: String,
    #[serde(default)]
    original_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    stats: AlienStats,
}

impl From<NestedAlienRecord> for Alien {
    fn from(record: NestedAlienRecord) -> Self {
        let stats = record.stats;
        Self {
            id: record.id,
            name: record.display_name,
            image: record.image_url.unwrap_or_default(),
            species: record.original_name,
            strength: stats.strength,
            speed: stats.speed,
            intelligence: stats.intelligence,
            durability: stats.durability,
            power: stats.power,
            combat: stats.combat,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SimilarityItem {
    id: String,
    display_name: String,
    #[serde(default)]
    original_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    score: f64,
    stats: AlienStats,
}

impl From<SimilarityItem> for SimilarityResult {
    fn from(item: SimilarityItem) -> Self {
        let alien = NestedAlienRecord {
            id: item.id,
            display_name: item.display_name,
            original_name: item.original_name,
            image_url: item.image_url,
            stats: item.stats,
        };
        Self {
            alien: alien.into(),
            similarity: item.score,
        }
    }
}

// `query` and `metric` echo the request and are not read.
#[derive(Debug, Deserialize)]
struct SimilarityResponse {
    similar: Vec<SimilarityItem>,
    #[serde(default)]
    opposite: Option<SimilarityItem>,
}

#[derive(Debug, Deserialize)]
struct ClusterItem {
    cluster_id: u32,
    aliens: Vec<NestedAlienRecord>,
}

#[derive(Debug, Deserialize)]
struct ClusterResponse {
    clusters: Vec<ClusterItem>,
}

#[derive(Debug, Deserialize)]
struct ProjectionResponse {
    points: Vec<ProjectionPoint>,
}

/// HTTP client for the alien-statistics backend.
///
/// Without a configured base URL every call fails with
/// [`OmnitrixError::GatewayUnavailable`] and no request is sent.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    top_k: u32,
}

impl ApiClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            top_k: config.top_k,
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            OmnitrixError::GatewayUnavailable("No API base URL configured".to_string())
        })?;
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// `{base}/aliens/{id}` with the id percent-encoded as one segment.
    fn alien_endpoint(&self, id: &str) -> Result<Url> {
        let mut url = self.endpoint("/aliens")?;
        url.path_segments_mut()
            .map_err(|_| {
                OmnitrixError::GatewayUnavailable("Base URL cannot take a path".to_string())
            })?
            .push(id);
        Ok(url)
    }

    async fn get_status(&self, url: Url) -> Result<()> {
        tracing::debug!(%url, "Checking gateway health");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OmnitrixError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        tracing::debug!(%url, "Sending gateway request");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OmnitrixError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| OmnitrixError::Decode(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl AlienSource for ApiClient {
    async fn health(&self) -> Result<()> {
        self.get_status(self.endpoint("/")?).await
    }

    async fn list_aliens(&self) -> Result<Vec<Alien>> {
        let records: Vec<AlienRecord> = self.get_json(self.endpoint("/aliens")?, &[]).await?;
        Ok(records.into_iter().map(Alien::from).collect())
    }

    async fn get_alien(&self, id: &str) -> Result<Alien> {
        let record: AlienRecord = self.get_json(self.alien_endpoint(id)?, &[]).await?;
        Ok(record.into())
    }

    async fn alien_detail(&self, id: &str) -> Result<AlienDetail> {
        self.get_json(self.alien_endpoint(id)?, &[]).await
    }

    async fn similarity(&self, id: &str, metric: SimilarityMetric) -> Result<SimilarityData> {
        let query = [
            ("alien_id", id.to_string()),
            ("metric", metric.to_string()),
            ("top_k", self.top_k.to_string()),
        ];
        let response: SimilarityResponse =
            self.get_json(self.endpoint("/similarity/")?, &query).await?;

        Ok(SimilarityData {
            similar: response
                .similar
                .into_iter()
                .map(SimilarityResult::from)
                .collect(),
            opposite: response.opposite.map(SimilarityResult::from),
        })
    }

    async fn cluster(&self, params: &ClusterParams) -> Result<Vec<ClusterResult>> {
        let query = [
            ("algorithm", params.algorithm.to_string()),
            ("k", params.k.to_string()),
            ("features", Feature::join(&params.features)),
        ];
        let response: ClusterResponse = self.get_json(self.endpoint("/cluster/")?, &query).await?;

        Ok(response
            .clusters
            .into_iter()
            .map(|item| ClusterResult {
                cluster: item.cluster_id,
                aliens: item.aliens.into_iter().map(Alien::from).collect(),
            })
            .collect())
    }

    async fn projection(&self, params: &ProjectionParams) -> Result<Vec<ProjectionPoint>> {
        let query = [("features", Feature::join(&params.features))];
        let response: ProjectionResponse =
            self.get_json(self.endpoint("/projection/2d")?, &query).await?;
        Ok(response.points)
    }
}
