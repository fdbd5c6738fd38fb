//! Settings structures for Pricebench configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchCredentials,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (PRICEBENCH_* prefix)
    ///
    /// Missing credentials are a normal state, not a load failure; the
    /// search client disables itself when they are absent.
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PRICEBENCH_API_KEY") {
            if !val.is_empty() {
                self.search.api_key = Some(val);
            }
        }
        if let Ok(val) = std::env::var("PRICEBENCH_ENGINE_ID") {
            if !val.is_empty() {
                self.search.engine_id = Some(val);
            }
        }
        if let Ok(val) = std::env::var("PRICEBENCH_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }

    /// Load from the environment alone, starting from defaults
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        settings.merge_env();
        settings
    }
}

/// Credentials for the external search endpoint
///
/// Both values are required for the search client to go on the network.
/// Either one missing leaves the client disabled rather than erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCredentials {
    /// API key for the search endpoint
    pub api_key: Option<String>,
    /// Search engine identifier
    pub engine_id: Option<String>,
}

impl SearchCredentials {
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            engine_id: Some(engine_id.into()),
        }
    }

    /// Whether both credentials are present and non-empty
    ///
    /// Pure predicate over the value; never touches the environment.
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().map(|s| !s.is_empty()).unwrap_or(false);
        present(&self.api_key) && present(&self.engine_id)
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            pool_maxsize: 20,
            verify_ssl: true,
        }
    }
}
