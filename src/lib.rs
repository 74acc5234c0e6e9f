//! Competitor discovery and relevance ranking.
//!
//! Given a free-text product-idea description, this crate derives a short
//! search query, asks an external web-search service for matching pages,
//! strips the editorial and social-platform noise those services return,
//! and produces a small ranked list of organizations already operating in
//! the space. The list feeds a downstream narrative step that cites each
//! competitor by name.
//!
//! The pipeline is deliberately total: every failure mode (missing
//! credential, timeout, rate limit, malformed response, internal defect)
//! collapses to an empty list. An empty list is a meaningful outcome, not
//! an error. Absence of competitors may simply mean a blue-ocean idea.

pub mod config;
pub mod gateway;
pub mod keywords;
pub mod naming;
pub mod noise_filter;
pub mod pipeline;
pub mod scoring;

pub use config::{DiscoveryConfig, DiscoveryConfigBuilder};
pub use gateway::{RawResult, Search, SearchGateway};
pub use pipeline::{Competitor, CompetitorPipeline, MAX_COMPETITORS, find_competitors};
