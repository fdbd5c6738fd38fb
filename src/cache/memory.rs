//! In-memory cache store
//!
//! Process-local implementation of the host cache-store capability. Used by
//! the tests in this crate and embeddable by hosts without a native cache
//! substrate. Nothing survives the process.

use super::store::{Asset, CacheError, CacheHandle, CacheStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type CacheMap = HashMap<String, HashMap<String, Asset>>;

/// Named-cache store backed by process memory
#[derive(Clone, Default)]
pub struct InMemoryCacheStore {
    caches: Arc<RwLock<CacheMap>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an asset directly into a named cache
    ///
    /// Test and embedding convenience; `add_all` only records paths, since
    /// fetching bodies is the host's job.
    pub async fn insert(&self, cache: &str, asset: Asset) {
        let mut caches = self.caches.write().await;
        caches
            .entry(cache.to_string())
            .or_default()
            .insert(asset.path.clone(), asset);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheHandle>, CacheError> {
        self.caches.write().await.entry(name.to_string()).or_default();
        Ok(Arc::new(MemoryCacheHandle {
            name: name.to_string(),
            caches: self.caches.clone(),
        }))
    }

    async fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.caches.read().await.keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, CacheError> {
        Ok(self.caches.write().await.remove(name).is_some())
    }
}

/// Handle onto one named cache in the shared map
struct MemoryCacheHandle {
    name: String,
    caches: Arc<RwLock<CacheMap>>,
}

#[async_trait]
impl CacheHandle for MemoryCacheHandle {
    async fn add_all(&self, paths: &[String]) -> Result<(), CacheError> {
        let mut caches = self.caches.write().await;
        let cache = caches.entry(self.name.clone()).or_default();
        for path in paths {
            cache
                .entry(path.clone())
                .or_insert_with(|| Asset::precached(path.clone()));
        }
        Ok(())
    }

    async fn match_path(&self, path: &str) -> Result<Option<Asset>, CacheError> {
        let caches = self.caches.read().await;
        Ok(caches.get(&self.name).and_then(|c| c.get(path)).cloned())
    }
}
