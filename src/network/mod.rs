//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to the search endpoint.

mod client;

pub use client::{HttpClient, HttpResponse};
