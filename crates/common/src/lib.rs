//! Posemetric Common Utilities
//!
//! Shared infrastructure for all posemetric crates:
//! - Error types and result aliases
//! - Frame geometry and configuration loading
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
