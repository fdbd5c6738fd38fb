//! Search data models: result items, options, and outcomes

use crate::{MAX_RESULTS, MIN_RESULTS};
use serde::{Deserialize, Serialize};

/// Default result count requested when the caller does not specify one
pub const DEFAULT_RESULTS: u32 = 5;

/// A single search result item
///
/// Produced from one raw API payload entry. Ephemeral: lives only for the
/// duration of one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Result title
    pub title: String,
    /// Target URL; always non-empty
    pub link: String,
    /// Free-text snippet
    pub snippet: String,
    /// Display form of the result's domain
    pub display_link: String,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: String::new(),
            display_link: String::new(),
        }
    }

    /// Add a snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Add a display link
    pub fn with_display_link(mut self, display_link: impl Into<String>) -> Self {
        self.display_link = display_link.into();
        self
    }
}

/// Terminal status of a search call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Search completed and the payload was consumed
    Ok,
    /// One or both credentials are missing; no network access was attempted
    NoKey,
    /// The endpoint answered with a non-success status
    Http(u16),
    /// Transport-level failure that never produced a status
    Network,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NoKey => write!(f, "NO_KEY"),
            Self::Http(code) => write!(f, "HTTP_{}", code),
            Self::Network => write!(f, "FETCH_ERROR"),
        }
    }
}

/// Outcome of one search call
///
/// `ok == false` always pairs with an empty result list; the constructors
/// keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub ok: bool,
    pub reason: SearchStatus,
    pub results: Vec<SearchResultItem>,
}

impl SearchOutcome {
    /// Successful outcome carrying the normalized result items
    pub fn success(results: Vec<SearchResultItem>) -> Self {
        Self {
            ok: true,
            reason: SearchStatus::Ok,
            results,
        }
    }

    /// Failed outcome; never carries results
    pub fn failure(reason: SearchStatus) -> Self {
        Self {
            ok: false,
            reason,
            results: Vec::new(),
        }
    }
}

/// Caller-supplied search options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Requested result count; silently clamped to what the endpoint accepts
    pub num: u32,
    /// Restrict results to this domain when set
    pub site: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            num: DEFAULT_RESULTS,
            site: None,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested result count
    pub fn with_num(mut self, num: u32) -> Self {
        self.num = num;
        self
    }

    /// Restrict results to a domain
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Result count after clamping to the endpoint's accepted range
    pub fn clamped_num(&self) -> u32 {
        self.num.clamp(MIN_RESULTS, MAX_RESULTS)
    }

    /// Query text with the optional site scope appended
    pub fn scoped_query(&self, query: &str) -> String {
        match self.site.as_deref().filter(|s| !s.is_empty()) {
            Some(site) => format!("{} site:{}", query, site),
            None => query.to_string(),
        }
    }
}
