use serde::{Deserialize, Serialize};

/// An alien form and its six capability scores, each in `0..=100`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alien {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,
    pub durability: u8,
    pub power: u8,
    pub combat: u8,
}

impl Alien {
    pub fn stat(&self, feature: Feature) -> u8 {
        match feature {
            Feature::Strength => self.strength,
            Feature::Speed => self.speed,
            Feature::Intelligence => self.intelligence,
            Feature::Durability => self.durability,
            Feature::Power => self.power,
            Feature::Combat => self.combat,
        }
    }

    pub fn stats(&self) -> AlienStats {
        AlienStats {
            strength: self.strength,
            speed: self.speed,
            intelligence: self.intelligence,
            durability: self.durability,
            power: self.power,
            combat: self.combat,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Strength,
    Speed,
    Intelligence,
    Durability,
    Power,
    Combat,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Strength,
        Feature::Speed,
        Feature::Intelligence,
        Feature::Durability,
        Feature::Power,
        Feature::Combat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Intelligence => "intelligence",
            Self::Durability => "durability",
            Self::Power => "power",
            Self::Combat => "combat",
        }
    }

    /// Comma-joined wire form used by the cluster and projection endpoints.
    pub fn join(features: &[Feature]) -> String {
        features
            .iter()
            .map(Feature::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "speed" => Ok(Self::Speed),
            "intelligence" => Ok(Self::Intelligence),
            "durability" => Ok(Self::Durability),
            "power" => Ok(Self::Power),
            "combat" => Ok(Self::Combat),
            _ => Err(format!("Unknown feature: {s}")),
        }
    }
}

/// The six scores as the backend nests them under `stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlienStats {
    pub strength: u8,
    pub speed: u8,
    pub intelligence: u8,
    pub durability: u8,
    pub power: u8,
    pub combat: u8,
}

/// Extended record served by `GET /aliens/{id}` for the scatter-plot detail
/// panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlienDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub stats: AlienStats,
    #[serde(default)]
    pub super_powers: Vec<String>,
}

impl From<AlienDetail> for Alien {
    fn from(detail: AlienDetail) -> Self {
        let stats = detail.stats;
        Self {
            id: detail.id,
            name: detail.name,
            image: detail.image_url.unwrap_or_default(),
            species: detail.original_name,
            strength: stats.strength,
            speed: stats.speed,
            intelligence: stats.intelligence,
            durability: stats.durability,
            power: stats.power,
            combat: stats.combat,
        }
    }
}
