// crates/usecase/src/sidecars.rs
use std::path::{Path, PathBuf};

use log::debug;
use luminosity_domain::model::{SidecarFileRecord, SidecarFileStats};
use luminosity_ports::{catalog::CatalogOpener, metadata::FileMetadata};
use luminosity_shared_kernel::Result;

/// Checks the JPG sidecars recorded in a catalog against the disk.
pub struct SummarizeSidecars<'a> {
    opener: &'a dyn CatalogOpener,
    metadata: &'a dyn FileMetadata,
}

impl<'a> SummarizeSidecars<'a> {
    pub fn new(opener: &'a dyn CatalogOpener, metadata: &'a dyn FileMetadata) -> Self {
        Self { opener, metadata }
    }

    /// # Errors
    ///
    /// Fails when the catalog cannot be opened or queried.
    pub fn run(&self, catalog: &Path) -> Result<SidecarFileStats> {
        let records = self.records(catalog)?;
        Ok(summarize(&records, self.metadata))
    }

    /// Absolute paths of every sidecar the catalog knows about.
    ///
    /// # Errors
    ///
    /// Fails when the catalog cannot be opened or queried.
    pub fn list(&self, catalog: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.records(catalog)?.iter().map(SidecarFileRecord::sidecar_path).collect())
    }

    fn records(&self, catalog: &Path) -> Result<Vec<SidecarFileRecord>> {
        let records = self.opener.open(catalog)?.sidecars()?;
        debug!("action=sidecars catalog={} records={}", catalog.display(), records.len());
        Ok(records)
    }
}

fn summarize(records: &[SidecarFileRecord], metadata: &dyn FileMetadata) -> SidecarFileStats {
    records.iter().fold(SidecarFileStats::default(), |mut stats, record| {
        if metadata.size_of(&record.original_path()).is_none() {
            stats.missing_original_count += 1;
        }
        match metadata.size_of(&record.sidecar_path()) {
            Some(size) => {
                stats.count += 1;
                stats.total_size_bytes += size;
            }
            None => stats.missing_sidecar_count += 1,
        }
        stats
    })
}
