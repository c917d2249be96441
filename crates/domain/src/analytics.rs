// crates/domain/src/analytics.rs
pub mod distribution;
pub mod stats;

pub use distribution::{DistributionEntry, DistributionList};
pub use stats::Stats;
