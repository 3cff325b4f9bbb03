mod results;
mod store;

pub use results::{ResultCache, CLUSTER_CACHE_KEY, PROJECTION_CACHE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
