// crates/usecase/src/collect_stats.rs
use std::path::Path;

use log::{debug, info, warn};
use luminosity_ports::{
    catalog::{CatalogOpener, CatalogReader},
    locator::{CatalogLocator, CatalogSearch},
    report::{CatalogReport, ReportSink},
};
use luminosity_shared_kernel::{ApplicationError, LuminosityError, Result};

use crate::dto::StatsReport;

/// Collects every distribution from each catalog found and merges them.
///
/// Catalogs that cannot be opened or queried are logged and skipped, so one
/// damaged file does not spoil a report over a whole library.
pub struct CollectStats<'a> {
    locator: &'a dyn CatalogLocator,
    opener: &'a dyn CatalogOpener,
    sink: Option<&'a dyn ReportSink>,
}

impl<'a> CollectStats<'a> {
    pub fn new(locator: &'a dyn CatalogLocator, opener: &'a dyn CatalogOpener) -> Self {
        Self { locator, opener, sink: None }
    }

    /// Hands each per-catalog report to `sink` before it is merged.
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn ReportSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// # Errors
    ///
    /// Fails when no catalog is found under `search.roots`, when discovery
    /// itself fails, or when the report sink rejects a report.
    pub fn run(&self, search: &CatalogSearch) -> Result<StatsReport> {
        let catalogs = self.locator.locate(search)?;
        if catalogs.is_empty() {
            let paths = search.roots.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ");
            return Err(ApplicationError::NoCatalogs { paths }.into());
        }
        debug!("action=find_catalogs found={}", catalogs.len());

        let mut merged = StatsReport::empty();
        for path in &catalogs {
            let Some(report) = self.load(path) else {
                continue;
            };

            if let Some(sink) = self.sink {
                sink.emit(&report).map_err(|e| ApplicationError::ReportFailed {
                    reason: format!("per-catalog report for '{}'", path.display()),
                    source: Some(Box::new(e)),
                })?;
            }

            merged.cameras = merged.cameras.merge(&report.cameras);
            merged.lenses = merged.lenses.merge(&report.lenses);
            merged.stats.merge(&report.stats);
            merged.photos.extend(report.photos);
            merged.paths.push(report.path);
            merged.catalogs_processed += 1;
            info!("action=process_catalog path={} status=ok", path.display());
        }

        // Photos without a capture time are counted under an empty day.
        if let Err(e) = merged.stats.by_date.validate_dates() {
            warn!("action=validate_dates status=invalid error=\"{e}\" Some photos have no usable capture day");
        }

        info!("action=status status=complete catalogs_processed={}", merged.catalogs_processed);
        Ok(merged)
    }

    fn load(&self, path: &Path) -> Option<CatalogReport> {
        let catalog = match self.opener.open(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("action=catalog_open catalog={} error=\"{e}\" Error opening catalog, skipping", path.display());
                return None;
            }
        };

        match load_report(catalog.as_ref()) {
            Ok(report) => Some(report),
            Err(e) => {
                let err = ApplicationError::CatalogLoadFailed {
                    path: path.to_path_buf(),
                    reason: "query failed".to_string(),
                    source: Some(Box::new(e)),
                };
                warn!("action=catalog_load catalog={} error=\"{}\" Error loading catalog, skipping", path.display(), source_chain(&err));
                None
            }
        }
    }
}

fn load_report(catalog: &dyn CatalogReader) -> std::result::Result<CatalogReport, LuminosityError> {
    Ok(CatalogReport {
        path: catalog.path().to_path_buf(),
        cameras: catalog.cameras()?,
        lenses: catalog.lenses()?,
        photos: catalog.photos()?,
        stats: catalog.stats()?,
    })
}

fn source_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        message.push_str(": ");
        message.push_str(&source.to_string());
        current = source.source();
    }
    message
}
