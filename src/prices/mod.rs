//! Currency amount extraction from free text
//!
//! Scans unstructured search-result text for rand-denominated amounts such
//! as "R4 500 is too much", "R 29,99" or "ZAR12". This is a best-effort
//! heuristic over noisy text: false positives (a bare "R" in front of an
//! unrelated number) and false negatives are tolerated by design, and
//! callers treat the output as samples rather than ground truth.

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency marker ("ZAR" or "R", any case), optional whitespace, 1-4
/// integer digits, optional 1-2 digit fraction split by `.` or `,`.
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ZAR|R)\s*(\d{1,4}(?:[.,]\d{1,2})?)").unwrap());

/// Extract currency amounts from `text`, in order of appearance
///
/// `None` and empty input both yield an empty vector. Matched tokens are
/// normalized (currency marker and whitespace stripped, `,` fraction
/// separator mapped to `.`) and parsed; anything that fails to parse to a
/// finite number is dropped silently. Pure: identical input always yields
/// an identical sequence.
pub fn extract_prices(text: Option<&str>) -> Vec<f64> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Vec::new(),
    };

    PRICE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
