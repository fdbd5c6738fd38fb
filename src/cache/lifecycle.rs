//! Cache lifecycle state machine
//!
//! One instance drives one cache version through install and activation,
//! then serves asset requests from it. The hosting shell calls each
//! transition explicitly and must await it: a transition is finished only
//! when every underlying store operation has resolved, otherwise assets
//! could be served from a not-yet-populated or not-yet-pruned cache.
//!
//! The cache name is the version identifier. Changing the precache set
//! without bumping the version means activation will not prune the old
//! cache and the new contents will never become visible; a same-named
//! cache is reused, not replaced.

use super::store::{Asset, AssetFetcher, CacheError, CacheHandle, CacheStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle states for one cache version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Created; nothing installed yet
    Parked,
    /// Precache population in flight
    Installing,
    /// Installed and eligible (or waiting) to take control
    Waiting,
    /// Sole authoritative cache version
    Active,
}

/// Drives one versioned asset cache through its lifecycle
pub struct CacheLifecycle {
    store: Arc<dyn CacheStore>,
    version: String,
    precache: Vec<String>,
    skip_waiting: bool,
    host_released: bool,
    state: LifecycleState,
    handle: Option<Arc<dyn CacheHandle>>,
}

impl CacheLifecycle {
    /// Create a lifecycle for `version` over the host's store
    ///
    /// With `skip_waiting` set, the version may take control immediately
    /// after install, without waiting for consumers of the prior version to
    /// close. Without it, the host must call [`release_waiting`] first.
    ///
    /// [`release_waiting`]: CacheLifecycle::release_waiting
    pub fn new(
        store: Arc<dyn CacheStore>,
        version: impl Into<String>,
        precache: Vec<String>,
        skip_waiting: bool,
    ) -> Self {
        Self {
            store,
            version: version.into(),
            precache,
            skip_waiting,
            host_released: false,
            state: LifecycleState::Parked,
            handle: None,
        }
    }

    /// Version identifier, which doubles as the cache name
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Claim the version-named cache and populate the precache set
    ///
    /// Complete only once every asset path is stored.
    pub async fn install(&mut self) -> Result<(), CacheError> {
        self.state = LifecycleState::Installing;
        info!(
            version = %self.version,
            assets = self.precache.len(),
            "installing asset cache"
        );

        let handle = self.store.open(&self.version).await?;
        handle.add_all(&self.precache).await?;

        self.handle = Some(handle);
        self.state = LifecycleState::Waiting;
        Ok(())
    }

    /// Host signal that no consumer of a prior version remains
    pub fn release_waiting(&mut self) {
        self.host_released = true;
    }

    /// Make this version authoritative, pruning every other cache
    ///
    /// Returns whether activation took effect: with `skip_waiting` unset
    /// and the host not yet released, the call is deferred and reports
    /// `false`. Re-activating an already active version prunes again but
    /// never repopulates; the call is idempotent.
    pub async fn activate(&mut self) -> Result<bool, CacheError> {
        match self.state {
            LifecycleState::Parked | LifecycleState::Installing => {
                return Err(CacheError::InvalidTransition(format!(
                    "activate before install completed for {}",
                    self.version
                )));
            }
            LifecycleState::Waiting | LifecycleState::Active => {}
        }

        if !(self.skip_waiting || self.host_released) {
            warn!(version = %self.version, "activation deferred, prior clients still attached");
            return Ok(false);
        }

        for name in self.store.keys().await? {
            if name != self.version {
                let removed = self.store.delete(&name).await?;
                debug!(cache = %name, removed, "pruned stale cache");
            }
        }

        self.state = LifecycleState::Active;
        info!(version = %self.version, "cache version active");
        Ok(true)
    }

    /// Serve one asset request: cache first, live network on miss
    ///
    /// The body of a network fallback is handed to the caller but never
    /// written back into the cache; the cache only ever reflects what was
    /// precached at install time for this version.
    pub async fn serve(
        &self,
        path: &str,
        network: &dyn AssetFetcher,
    ) -> Result<Asset, CacheError> {
        if let Some(handle) = &self.handle {
            if let Some(asset) = handle.match_path(path).await? {
                debug!(path, "cache hit");
                return Ok(asset);
            }
        }

        debug!(path, "cache miss, falling through to network");
        network.fetch(path).await
    }
}
