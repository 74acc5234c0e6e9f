//! Configuration for competitor discovery.
//!
//! This module provides the `DiscoveryConfig` struct and its fluent
//! builder. The search credential is injected here once, at construction
//! time, instead of being read from the environment on every call.

// Sub-modules
pub mod builder;
pub mod types;

// Re-exports for public API
pub use builder::DiscoveryConfigBuilder;
pub use types::DiscoveryConfig;
