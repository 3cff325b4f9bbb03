use omnitrix::cache::{FileStore, MemoryStore};
use omnitrix::config::GatewayConfig;
use omnitrix::gateway::ApiClient;
use omnitrix::Explorer;

/// Explorer whose gateway points at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_explorer() -> Explorer<ApiClient, MemoryStore> {
    let client = ApiClient::new(&GatewayConfig::new("http://127.0.0.1:9"))
        .expect("Failed to build API client");
    Explorer::new(client, MemoryStore::new())
}

/// Explorer with no backend configured, persisting to `dir`.
#[allow(dead_code)]
pub fn offline_file_explorer(dir: &std::path::Path) -> Explorer<ApiClient, FileStore> {
    let client =
        ApiClient::new(&GatewayConfig::unconfigured()).expect("Failed to build API client");
    Explorer::new(client, FileStore::new(dir))
}

#[allow(dead_code)]
pub fn explorer_for(base_url: &str) -> Explorer<ApiClient, MemoryStore> {
    let client = ApiClient::new(&GatewayConfig::new(base_url)).expect("Failed to build API client");
    Explorer::new(client, MemoryStore::new())
}
