// crates/usecase/src/dto.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use luminosity_domain::{
    analytics::Stats,
    model::{NamedObjectList, PhotoRecord},
};
use serde::{Deserialize, Serialize};

/// Merged statistics over every catalog that could be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub generated_at: DateTime<Utc>,
    /// Catalogs that contributed to the report, in processing order.
    pub paths: Vec<PathBuf>,
    pub catalogs_processed: usize,
    pub cameras: NamedObjectList,
    pub lenses: NamedObjectList,
    /// Photos of every catalog, concatenated in processing order.
    pub photos: Vec<PhotoRecord>,
    pub stats: Stats,
}

impl StatsReport {
    pub(crate) fn empty() -> Self {
        Self {
            generated_at: Utc::now(),
            paths: Vec::new(),
            catalogs_processed: 0,
            cameras: NamedObjectList::default(),
            lenses: NamedObjectList::default(),
            photos: Vec::new(),
            stats: Stats::default(),
        }
    }
}
