//! API Routes
//!
//! Route handlers organized by functionality.

pub mod chart;
pub mod handles;
pub mod health;
