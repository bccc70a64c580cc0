//! Core utilities for the NBA tracker
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: process-lifetime player lookup cache
//! - `http`: shared client and request headers
//! - `logging`: tracing subscriber setup

pub mod cache;
pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use cache::{PlayerIdentity, PlayerLookupCache};
pub use http::{build_client, common_headers};
pub use logging::init_logging;
