//! Dataset Ingestion & Normalization
//!
//! Loads the tweet metrics CSV and turns it into normalized records:
//!
//! - **types**: `TweetRecord`, handle normalization, timestamp parsing
//! - **loader**: CSV reader with an explicit schema contract
//! - **error**: Error types
//!
//! The dataset is static per process lifetime: it is read exactly once at
//! startup, and any malformed input (missing file, missing column, bad
//! timestamp, non-numeric metric) aborts startup with a descriptive error.
//! There is no partial-load mode.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{DatasetLoader, REQUIRED_COLUMNS};
pub use types::{normalize_handle, parse_posted_at, TweetRecord};
