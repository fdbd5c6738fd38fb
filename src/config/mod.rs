//! Configuration module for Pricebench
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are plain values handed to the components that need them; there
//! is no process-global configuration state.

mod settings;

pub use settings::*;
