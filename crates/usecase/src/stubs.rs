// crates/usecase/src/stubs.rs
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use luminosity_domain::{
    analytics::{DistributionEntry, DistributionList},
    model::{NamedObject, NamedObjectList, PhotoRecord, SidecarFileRecord},
};
use luminosity_ports::{
    catalog::{CatalogOpener, CatalogReader},
    locator::{CatalogLocator, CatalogSearch},
    metadata::FileMetadata,
    report::{CatalogReport, ReportSink},
};
use luminosity_shared_kernel::{InfrastructureError, LuminosityError, Record, Result};

pub struct StubLocator {
    found: Vec<PathBuf>,
}

impl StubLocator {
    pub fn new(paths: &[&str]) -> Self {
        Self { found: paths.iter().map(PathBuf::from).collect() }
    }
}

impl CatalogLocator for StubLocator {
    fn locate(&self, _search: &CatalogSearch) -> Result<Vec<PathBuf>> {
        Ok(self.found.clone())
    }
}

#[derive(Clone, Default)]
pub struct StubCatalog {
    path: PathBuf,
    failing: bool,
    cameras: Vec<NamedObject>,
    lenses: Vec<NamedObject>,
    by_camera: Vec<DistributionEntry>,
    by_lens: Vec<DistributionEntry>,
    by_date: Vec<DistributionEntry>,
    photos: Vec<PhotoRecord>,
    rows: Vec<Record>,
    sidecars: Vec<SidecarFileRecord>,
}

impl StubCatalog {
    pub fn new(path: &str) -> Self {
        Self { path: PathBuf::from(path), ..Self::default() }
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn camera(mut self, id: i64, name: &str, count: i64) -> Self {
        self.cameras.push(NamedObject::new(id, name));
        self.by_camera.push(DistributionEntry::new(id, name, count));
        self
    }

    pub fn lens(mut self, id: i64, name: &str, count: i64) -> Self {
        self.lenses.push(NamedObject::new(id, name));
        self.by_lens.push(DistributionEntry::new(id, name, count));
        self
    }

    pub fn day(mut self, label: &str, count: i64) -> Self {
        self.by_date.push(DistributionEntry::new(0, label, count));
        self
    }

    pub fn photo(mut self, full_name: &str) -> Self {
        let id = self.photos.len() as i64 + 1;
        self.photos.push(PhotoRecord { id, full_name: full_name.into(), ..PhotoRecord::default() });
        self
    }

    pub fn row(mut self, record: Record) -> Self {
        self.rows.push(record);
        self
    }

    pub fn sidecar(mut self, base_name: &str) -> Self {
        self.sidecars.push(SidecarFileRecord {
            photo_id: self.sidecars.len() as i64 + 1,
            root_path: "/photos/".into(),
            folder_path: "2017/".into(),
            base_name: base_name.into(),
            extension: "RAF".into(),
            sidecar_extension: "JPG".into(),
        });
        self
    }

    fn check(&self, label: &str) -> Result<()> {
        if self.failing {
            return Err(InfrastructureError::Query { label: label.into(), details: "no such table".into() }.into());
        }
        Ok(())
    }

    fn empty(&self, label: &str) -> Result<DistributionList> {
        self.check(label)?;
        Ok(DistributionList::default())
    }
}

impl CatalogReader for StubCatalog {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lenses(&self) -> Result<NamedObjectList> {
        self.check("lenses")?;
        Ok(NamedObjectList::new(self.lenses.clone()))
    }

    fn cameras(&self) -> Result<NamedObjectList> {
        self.check("cameras")?;
        Ok(NamedObjectList::new(self.cameras.clone()))
    }

    fn photo_counts_by_date(&self) -> Result<DistributionList> {
        self.check("by_date")?;
        Ok(DistributionList::new(self.by_date.clone()))
    }

    fn camera_distribution(&self) -> Result<DistributionList> {
        self.check("by_camera")?;
        Ok(DistributionList::new(self.by_camera.clone()))
    }

    fn lens_distribution(&self) -> Result<DistributionList> {
        self.check("by_lens")?;
        Ok(DistributionList::new(self.by_lens.clone()))
    }

    fn focal_length_distribution(&self) -> Result<DistributionList> {
        self.empty("by_focal_length")
    }

    fn aperture_distribution(&self) -> Result<DistributionList> {
        self.empty("by_aperture")
    }

    fn exposure_time_distribution(&self) -> Result<DistributionList> {
        self.empty("by_exposure_time")
    }

    fn edit_count_distribution(&self) -> Result<DistributionList> {
        self.empty("by_edit_count")
    }

    fn keyword_distribution(&self) -> Result<DistributionList> {
        self.empty("by_keyword")
    }

    fn sunburst_rows(&self) -> Result<Vec<Record>> {
        self.check("sunburst")?;
        Ok(self.rows.clone())
    }

    fn sidecars(&self) -> Result<Vec<SidecarFileRecord>> {
        self.check("sidecars")?;
        Ok(self.sidecars.clone())
    }

    fn photos(&self) -> Result<Vec<PhotoRecord>> {
        self.check("photos")?;
        Ok(self.photos.clone())
    }
}

/// Opens only the catalogs it was given; any other path fails to open.
#[derive(Default)]
pub struct StubOpener {
    catalogs: HashMap<PathBuf, StubCatalog>,
}

impl StubOpener {
    pub fn with(mut self, catalog: StubCatalog) -> Self {
        self.catalogs.insert(catalog.path.clone(), catalog);
        self
    }
}

impl CatalogOpener for StubOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn CatalogReader>> {
        match self.catalogs.get(path) {
            Some(catalog) => Ok(Box::new(catalog.clone())),
            None => Err(InfrastructureError::CatalogOpen {
                path: path.to_path_buf(),
                details: "unable to open database file".into(),
            }
            .into()),
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    fail: bool,
    emitted: Mutex<Vec<PathBuf>>,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.emitted.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn emit(&self, report: &CatalogReport) -> Result<()> {
        if self.fail {
            let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only directory");
            return Err(LuminosityError::from(io));
        }
        self.emitted.lock().unwrap().push(report.path.clone());
        Ok(())
    }
}

/// Pretends a fixed set of files exists, with the given sizes.
#[derive(Default)]
pub struct StubMetadata {
    sizes: HashMap<PathBuf, u64>,
}

impl StubMetadata {
    pub fn with(mut self, path: &str, size: u64) -> Self {
        self.sizes.insert(PathBuf::from(path), size);
        self
    }
}

impl FileMetadata for StubMetadata {
    fn size_of(&self, path: &Path) -> Option<u64> {
        self.sizes.get(path).copied()
    }
}
