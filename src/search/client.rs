//! Search client implementation
//!
//! Talks to the Google Custom Search JSON API. The client is gated at
//! construction time on credential presence: without both credentials it
//! short-circuits every call before any network access.

use super::models::{SearchOptions, SearchOutcome, SearchResultItem, SearchStatus};
use crate::config::{OutgoingSettings, SearchCredentials, Settings};
use crate::network::HttpClient;
use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Base URL of the search API
const SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Client for the hosted web-search endpoint
pub struct SearchClient {
    http: HttpClient,
    credentials: SearchCredentials,
    base_url: String,
}

impl SearchClient {
    /// Create a client with default outgoing settings
    pub fn new(credentials: SearchCredentials) -> Result<Self> {
        Self::with_settings(credentials, &OutgoingSettings::default())
    }

    /// Create a client with custom outgoing settings
    pub fn with_settings(
        credentials: SearchCredentials,
        outgoing: &OutgoingSettings,
    ) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_settings(outgoing)?,
            credentials,
            base_url: SEARCH_API_URL.to_string(),
        })
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_settings(settings.search.clone(), &settings.outgoing)
    }

    /// Override the endpoint base URL (tests point this at a local server)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Whether both credentials are configured
    ///
    /// Pure query with no side effects; `search` short-circuits whenever
    /// this is false.
    pub fn is_enabled(&self) -> bool {
        self.credentials.is_configured()
    }

    /// Execute one search call
    ///
    /// Exactly one network request per call on the enabled path. Every
    /// failure mode is representable in the returned outcome; retry policy
    /// belongs to the caller.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> SearchOutcome {
        if !self.is_enabled() {
            debug!("search disabled, credentials missing");
            return SearchOutcome::failure(SearchStatus::NoKey);
        }

        let num = options.clamped_num();

        let mut params = HashMap::new();
        params.insert(
            "key".to_string(),
            self.credentials.api_key.clone().unwrap_or_default(),
        );
        params.insert(
            "cx".to_string(),
            self.credentials.engine_id.clone().unwrap_or_default(),
        );
        params.insert("q".to_string(), options.scoped_query(query));
        params.insert("num".to_string(), num.to_string());

        debug!(query, num, "issuing search request");

        let response = match self.http.get_with_params(&self.base_url, &params).await {
            Ok(response) => response,
            Err(e) => {
                warn!("search transport failure: {}", e);
                return SearchOutcome::failure(SearchStatus::Network);
            }
        };

        if !response.is_success() {
            warn!(status = response.status, "search endpoint returned an error");
            return SearchOutcome::failure(SearchStatus::Http(response.status));
        }

        // An unparseable body or a missing items list is empty, not an error.
        let json = response
            .json::<serde_json::Value>()
            .unwrap_or(serde_json::Value::Null);
        let items = json
            .get("items")
            .and_then(|i| i.as_array())
            .cloned()
            .unwrap_or_default();

        let results: Vec<SearchResultItem> = items
            .iter()
            .take(num as usize)
            .filter_map(map_item)
            .collect();

        debug!(results = results.len(), "search completed");

        SearchOutcome::success(results)
    }
}

/// Map one raw payload entry to a result item
///
/// Entries without a link are dropped; the remaining fields fall back to
/// defaults instead of failing.
fn map_item(item: &serde_json::Value) -> Option<SearchResultItem> {
    let text = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    let link = text("link");
    if link.is_empty() {
        return None;
    }

    let title = item
        .get("title")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Result")
        .to_string();

    Some(SearchResultItem {
        title,
        link,
        snippet: text("snippet"),
        display_link: text("displayLink"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn enabled_client(base_url: String) -> SearchClient {
        SearchClient::new(SearchCredentials::new("test-key", "test-engine"))
            .unwrap()
            .with_base_url(base_url)
    }

    fn items_body(items: serde_json::Value) -> serde_json::Value {
        json!({ "kind": "customsearch#search", "items": items })
    }

    #[test]
    fn test_from_settings_without_credentials_is_disabled() {
        let client = SearchClient::from_settings(&Settings::default()).unwrap();
        assert!(!client.is_enabled());
    }

    #[tokio::test]
    async fn test_no_key_short_circuits_without_network() {
        let server = MockServer::start().await;
        let client = SearchClient::new(SearchCredentials::default())
            .unwrap()
            .with_base_url(server.uri());

        assert!(!client.is_enabled());

        let outcome = client.search("iphone 12", &SearchOptions::new()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.reason, SearchStatus::NoKey);
        assert!(outcome.results.is_empty());

        let received = server.received_requests().await.unwrap();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_num_clamped_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("num", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client
            .search("iphone 12", &SearchOptions::new().with_num(50))
            .await;
        assert!(outcome.ok);
    }

    #[tokio::test]
    async fn test_num_zero_clamps_to_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("num", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client
            .search("iphone 12", &SearchOptions::new().with_num(0))
            .await;
        assert!(outcome.ok);
    }

    #[tokio::test]
    async fn test_site_scope_appended_to_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "iphone 12 site:gumtree.co.za"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client
            .search(
                "iphone 12",
                &SearchOptions::new().with_site("gumtree.co.za"),
            )
            .await;
        assert!(outcome.ok);
    }

    #[tokio::test]
    async fn test_http_error_reported_as_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client.search("iphone 12", &SearchOptions::new()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.reason, SearchStatus::Http(403));
        assert!(outcome.results.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_reported_as_network() {
        // Nothing listens here; the connection fails before any status exists.
        let client = enabled_client("http://127.0.0.1:1".to_string());
        let outcome = client.search("iphone 12", &SearchOptions::new()).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.reason, SearchStatus::Network);
    }

    #[tokio::test]
    async fn test_payload_mapping_and_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([
                {
                    "title": "iPhone 12 for sale",
                    "link": "https://example.co.za/ad/1",
                    "snippet": "Selling for R4500",
                    "displayLink": "example.co.za"
                },
                { "snippet": "no link, dropped" },
                { "link": "https://example.co.za/ad/2" }
            ]))))
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client.search("iphone 12", &SearchOptions::new()).await;

        assert!(outcome.ok);
        assert_eq!(outcome.reason, SearchStatus::Ok);
        assert_eq!(outcome.results.len(), 2);

        assert_eq!(outcome.results[0].title, "iPhone 12 for sale");
        assert_eq!(outcome.results[0].display_link, "example.co.za");

        // Missing fields fall back instead of failing.
        assert_eq!(outcome.results[1].title, "Result");
        assert_eq!(outcome.results[1].snippet, "");
        assert_eq!(outcome.results[1].display_link, "");
    }

    #[tokio::test]
    async fn test_missing_items_list_is_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "searchInformation": {} })),
            )
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client.search("iphone 12", &SearchOptions::new()).await;
        assert!(outcome.ok);
        assert!(outcome.results.is_empty());
    }

    #[tokio::test]
    async fn test_results_truncated_to_num() {
        let many: Vec<serde_json::Value> = (0..8)
            .map(|i| json!({ "link": format!("https://example.co.za/ad/{}", i) }))
            .collect();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!(many))))
            .mount(&server)
            .await;

        let client = enabled_client(server.uri());
        let outcome = client
            .search("iphone 12", &SearchOptions::new().with_num(3))
            .await;
        assert!(outcome.ok);
        assert_eq!(outcome.results.len(), 3);
    }
}
