//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`collect_stats`]: merge distribution statistics over many catalogs
//! - [`sunburst`]: reshape one catalog's sunburst rows into a tree
//! - [`sidecars`]: summarize or list JPG sidecar files
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod collect_stats;
pub mod dto;
pub mod sidecars;
pub mod sunburst;

#[cfg(test)]
mod stubs;

pub use collect_stats::CollectStats;
pub use dto::StatsReport;
pub use sidecars::SummarizeSidecars;
pub use sunburst::BuildSunburst;
