//! Configuration module for Page-Lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use page_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("page-lens.toml")).unwrap();
//! println!("Fetching with {} workers", config.fetcher.workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AnalysisConfig, CacheConfig, Config, FetcherConfig, RenderConfig, ReportConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
