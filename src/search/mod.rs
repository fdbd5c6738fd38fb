//! Web search client module
//!
//! Queries the hosted search endpoint, normalizes the raw payload into
//! result items, and reports every expected failure as a value rather
//! than an error.

mod client;
mod models;

pub use client::SearchClient;
pub use models::{SearchOptions, SearchOutcome, SearchResultItem, SearchStatus};
