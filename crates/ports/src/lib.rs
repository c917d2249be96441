// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`catalog`]: read-only access to a Lightroom catalog
//! - [`locator`]: discovery of catalog files under a set of paths
//! - [`metadata`]: file metadata lookups for sidecar checks
//! - [`report`]: per-catalog report output
//!
//! These ports allow the domain and application layers to remain
//! independent of SQLite and of the file system.

#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod locator;
pub mod metadata;
pub mod report;
