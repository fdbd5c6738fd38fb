//! Host cache-store capability
//!
//! The traits here model the named-cache store the hosting environment
//! provides. The lifecycle manager only ever consumes this capability; it
//! does not implement storage itself.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A cached asset addressable by its request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: String,
    pub body: Vec<u8>,
}

impl Asset {
    pub fn new(path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    /// Placeholder for a precached path whose body the store fills in
    pub fn precached(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: Vec::new(),
        }
    }
}

/// Errors surfaced by the cache store or the lifecycle driving it
///
/// The lifecycle does not recover from storage failures; they propagate to
/// the host's own error channel.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    #[error("asset fetch failed for {0}")]
    Fetch(String),

    #[error("invalid lifecycle transition: {0}")]
    InvalidTransition(String),
}

/// One named cache inside the store
#[async_trait]
pub trait CacheHandle: Send + Sync {
    /// Populate the cache with every listed path
    ///
    /// Resolves only once all entries are stored; partial population
    /// surfaces as an error.
    async fn add_all(&self, paths: &[String]) -> Result<(), CacheError>;

    /// Look up a request path; `None` on miss
    async fn match_path(&self, path: &str) -> Result<Option<Asset>, CacheError>;
}

/// The host's named-cache store
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Open the cache with the given name, creating it if needed
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheHandle>, CacheError>;

    /// Names of all caches known to the store
    async fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Delete a named cache; returns whether it existed
    async fn delete(&self, name: &str) -> Result<bool, CacheError>;
}

/// Live network fallback used when a request misses the cache
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Asset, CacheError>;
}
