//! # Limelight
//!
//! Celebrity Tweet Engagement Dashboard - a full-stack Rust application that
//! loads a CSV of tweet metrics, aggregates daily average likes/shares per
//! account, and serves an interactive multi-series line chart with a
//! multi-select account filter.
//!
//! ## Pipeline
//!
//! ```text
//! CSV file → dataset (normalize) → aggregate (group-by mean) → chart (render)
//!                                                                 ↑
//!                                              selection, via the HTTP API
//! ```
//!
//! The dataset is read exactly once at startup; the aggregated table is
//! immutable for the process lifetime; the only runtime operation is
//! rendering a selection into a figure.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV ingestion, handle normalization, day-first timestamp parsing
//! - [`aggregate`]: Daily per-handle mean likes/shares table
//! - [`chart`]: Selection → figure view binding
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use limelight::aggregate::EngagementTable;
//! use limelight::chart::render;
//! use limelight::dataset::DatasetLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load and normalize the dataset
//!     let records = DatasetLoader::new().load("tweets.csv".as_ref())?;
//!
//!     // Aggregate into one row per (date, handle)
//!     let table = EngagementTable::from_records(records);
//!
//!     // Render a selection into a chart figure
//!     let figure = render(&table, &["taylorswift13".to_string()]);
//!     println!("{} series", figure.series.len());
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;

// Re-export top-level types for convenience
pub use aggregate::{EngagementRow, EngagementTable};

pub use chart::{render, ChartPoint, Figure, Series};

pub use dataset::{
    normalize_handle, parse_posted_at, DatasetError, DatasetLoader, DatasetResult, TweetRecord,
};

pub use api::{build_router, serve, ApiError, AppState, DEFAULT_SELECTION};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoggingConfig};
