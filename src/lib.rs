//! Pricebench: price benchmarking over web search results
//!
//! Queries a web search API, mines currency amounts out of free-text result
//! snippets, and folds them into a min/max price range usable as a pricing
//! reference. A separate cache module drives the offline asset lifecycle for
//! hosting shells.

pub mod benchmark;
pub mod cache;
pub mod config;
pub mod network;
pub mod prices;
pub mod search;

pub use benchmark::{compute_benchmark, BenchmarkOutcome, BenchmarkPipeline, BenchmarkSummary};
pub use cache::{Asset, CacheLifecycle, CacheStore, InMemoryCacheStore};
pub use config::Settings;
pub use prices::extract_prices;
pub use search::{SearchClient, SearchOptions, SearchOutcome, SearchResultItem, SearchStatus};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest result count the search endpoint accepts
pub const MIN_RESULTS: u32 = 1;

/// Largest result count the search endpoint accepts
pub const MAX_RESULTS: u32 = 10;
