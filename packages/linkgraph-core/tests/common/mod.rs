//! Common test utilities for linkgraph-core
//!
//! Shared fixtures, assertions, and builders for the integration suites.

#![allow(dead_code, unused_imports)]

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
