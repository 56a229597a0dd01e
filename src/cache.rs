//! Cache endpoint settings.

use serde::Serialize;

/// Port the cache service listens on.
const REDIS_PORT: u16 = 6379;
/// Logical Redis database index.
const REDIS_DB: u32 = 0;

/// Cache endpoint settings.
#[derive(Debug, Clone, Serialize)]
pub struct CacheConfig {
    /// Cache hostname (from `REDIS_HOST`, default `localhost`).
    pub host: String,
}

impl CacheConfig {
    /// Connection URL for the cache service.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, REDIS_PORT, REDIS_DB)
    }
}
