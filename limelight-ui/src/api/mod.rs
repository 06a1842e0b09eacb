//! API Layer
//!
//! HTTP client for the Limelight REST API.

mod client;

pub use client::{fetch_chart, fetch_handles, get_api_base, HandlesResponse};
