// src/lib.rs - Library interface for the boat trajectory renderer

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;

pub use config::{RunConfig, RunMode};
pub use error::{AnalysisError, Result};

/// Crate version, logged at startup.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
