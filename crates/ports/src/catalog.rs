// crates/ports/src/catalog.rs
use std::path::Path;

use luminosity_domain::{
    analytics::{DistributionList, Stats},
    model::{NamedObjectList, PhotoRecord, SidecarFileRecord},
};
use luminosity_shared_kernel::{Record, Result};

/// Read-only queries against one opened catalog.
pub trait CatalogReader: Send + Sync {
    /// Location of the catalog file, used for logging and reports.
    fn path(&self) -> &Path;

    fn lenses(&self) -> Result<NamedObjectList>;
    fn cameras(&self) -> Result<NamedObjectList>;

    /// Photos per capture day, labels formatted `YYYY-MM-DD`.
    fn photo_counts_by_date(&self) -> Result<DistributionList>;
    fn camera_distribution(&self) -> Result<DistributionList>;
    fn lens_distribution(&self) -> Result<DistributionList>;
    fn focal_length_distribution(&self) -> Result<DistributionList>;
    /// Labels are f-numbers, e.g. `"2.8"`.
    fn aperture_distribution(&self) -> Result<DistributionList>;
    /// Labels are exposure times, e.g. `"1/250"`.
    fn exposure_time_distribution(&self) -> Result<DistributionList>;
    /// Photos per number of develop history steps.
    fn edit_count_distribution(&self) -> Result<DistributionList>;
    fn keyword_distribution(&self) -> Result<DistributionList>;

    /// Flat rows for the sunburst chart: `count, camera, lens, aperture,
    /// focal_length, exposure`.
    fn sunburst_rows(&self) -> Result<Vec<Record>>;

    /// RAW images that carry a JPG sidecar.
    fn sidecars(&self) -> Result<Vec<SidecarFileRecord>>;

    /// One record per photo, ordered by full path.
    fn photos(&self) -> Result<Vec<PhotoRecord>>;

    /// Every distribution in one pass.
    fn stats(&self) -> Result<Stats> {
        Ok(Stats {
            by_date: self.photo_counts_by_date()?,
            by_camera: self.camera_distribution()?,
            by_lens: self.lens_distribution()?,
            by_focal_length: self.focal_length_distribution()?,
            by_aperture: self.aperture_distribution()?,
            by_exposure_time: self.exposure_time_distribution()?,
            by_edit_count: self.edit_count_distribution()?,
            by_keyword: self.keyword_distribution()?,
        })
    }
}

/// Opens catalogs by path.
pub trait CatalogOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn CatalogReader>>;
}
