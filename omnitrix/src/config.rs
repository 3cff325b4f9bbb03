use std::env;
use std::path::PathBuf;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub cache: CacheConfig,
}

/// Where the alien-statistics backend lives and how it is queried.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// `None` leaves the gateway unavailable, so every call falls back.
    pub base_url: Option<String>,
    pub top_k: u32,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub dir: PathBuf,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            top_k: 3,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            base_url: None,
            top_k: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig {
                base_url: env::var("OMNITRIX_API_BASE")
                    .ok()
                    .and_then(|url| normalize_base_url(&url)),
                top_k: parse_env_or("OMNITRIX_TOP_K", 3),
            },
            cache: CacheConfig {
                dir: env::var("OMNITRIX_CACHE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(".omnitrix_cache")),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
