//! Benchmark pipeline orchestration
//!
//! Wires the search client, the price extractor, and the aggregator into
//! one query-to-range flow.

use super::{compute_benchmark, BenchmarkSummary};
use crate::search::{SearchClient, SearchOptions, SearchResultItem, SearchStatus};
use tracing::{debug, info};

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct BenchmarkOutcome {
    /// Terminal status of the underlying search call
    pub status: SearchStatus,
    /// Result items the samples were mined from
    pub results: Vec<SearchResultItem>,
    /// Price range; absent when the search failed or no samples came out
    pub summary: Option<BenchmarkSummary>,
}

/// Orchestrates query -> search -> extract -> aggregate
pub struct BenchmarkPipeline {
    client: SearchClient,
}

impl BenchmarkPipeline {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }

    /// Whether the underlying search client has credentials
    pub fn is_enabled(&self) -> bool {
        self.client.is_enabled()
    }

    /// Run the full pipeline for one free-text query
    ///
    /// A failed search and a sample-less search both come back without a
    /// summary; the status tells them apart.
    pub async fn run(&self, query: &str, options: &SearchOptions) -> BenchmarkOutcome {
        let outcome = self.client.search(query, options).await;

        if !outcome.ok {
            debug!(query, reason = %outcome.reason, "benchmark skipped, search failed");
            return BenchmarkOutcome {
                status: outcome.reason,
                results: Vec::new(),
                summary: None,
            };
        }

        let summary = compute_benchmark(&outcome.results);
        match &summary {
            Some(s) => info!(query, samples = s.sample_count, "benchmark computed"),
            None => debug!(
                query,
                results = outcome.results.len(),
                "no price samples extracted"
            ),
        }

        BenchmarkOutcome {
            status: outcome.reason,
            results: outcome.results,
            summary,
        }
    }
}
