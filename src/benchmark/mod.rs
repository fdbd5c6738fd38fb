//! Price benchmark aggregation
//!
//! Folds the amounts mined from a batch of search results into a single
//! min/max range. The range is reported verbatim: an absurd spread is still
//! a faithful summary of the samples, and outlier handling belongs to the
//! presentation layer.

mod pipeline;

pub use pipeline::{BenchmarkOutcome, BenchmarkPipeline};

use crate::prices::extract_prices;
use crate::search::SearchResultItem;
use serde::{Deserialize, Serialize};

/// Min/max price range summarizing extracted samples
///
/// `min` and `max` are members of the observed sample set, never
/// interpolated, and `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub min: f64,
    pub max: f64,
    /// Total sample count; duplicates count individually
    pub sample_count: usize,
}

impl std::fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "R{} - R{} ({} samples)",
            format_amount(self.min),
            format_amount(self.max),
            self.sample_count
        )
    }
}

/// Render an amount without a trailing ".00" for whole-rand values
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Compute a price benchmark over a batch of search results
///
/// Every item contributes the samples from its snippet followed by the
/// samples from its title, in item order. `None` means no samples were
/// extractable; callers treat that as insufficient data, not as an error.
pub fn compute_benchmark(results: &[SearchResultItem]) -> Option<BenchmarkSummary> {
    let mut samples = Vec::new();
    for item in results {
        samples.extend(extract_prices(Some(&item.snippet)));
        samples.extend(extract_prices(Some(&item.title)));
    }

    if samples.is_empty() {
        return None;
    }

    samples.sort_by(|a, b| a.total_cmp(b));

    Some(BenchmarkSummary {
        min: samples[0],
        max: samples[samples.len() - 1],
        sample_count: samples.len(),
    })
}
