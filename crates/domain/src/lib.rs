// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod apex;
pub mod grouping;
pub mod model;
pub mod options;

pub use grouping::{GroupNode, GroupingMode, build_tree, build_tree_with_mode};
