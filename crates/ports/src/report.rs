// crates/ports/src/report.rs
use std::path::PathBuf;

use luminosity_domain::{
    analytics::Stats,
    model::{NamedObjectList, PhotoRecord},
};
use luminosity_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Everything collected from a single catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub path: PathBuf,
    pub cameras: NamedObjectList,
    pub lenses: NamedObjectList,
    pub photos: Vec<PhotoRecord>,
    pub stats: Stats,
}

/// Receives each catalog report as soon as it is collected.
pub trait ReportSink: Send + Sync {
    fn emit(&self, report: &CatalogReport) -> Result<()>;
}
