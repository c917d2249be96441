// crates/infra/src/discovery.rs
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;
use log::{debug, warn};
use luminosity_ports::locator::{CatalogLocator, CatalogSearch};
use luminosity_shared_kernel::Result;

const CATALOG_EXTENSION: &str = "lrcat";
/// Preview caches sit next to each catalog and can hold millions of files.
const PREVIEW_CACHE_EXTENSION: &str = "lrdata";

/// Finds catalog files on the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCatalogLocator;

impl FsCatalogLocator {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogLocator for FsCatalogLocator {
    fn locate(&self, search: &CatalogSearch) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for root in &search.roots {
            let meta = match fs::metadata(root) {
                Ok(meta) => meta,
                Err(e) => {
                    warn!("action=find_catalogs status=stat_error path={} error=\"{e}\" Cannot stat path", root.display());
                    continue;
                }
            };

            let candidates = if meta.is_dir() {
                walk(root, search.max_depth)
            } else if is_catalog(root) {
                vec![root.clone()]
            } else {
                debug!("action=find_catalogs status=skipped path={}", root.display());
                Vec::new()
            };

            for path in candidates {
                if seen.insert(path.clone()) {
                    found.push(path);
                }
            }
        }
        Ok(found)
    }
}

fn walk(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    // Photo libraries are not source trees: ignore files do not apply.
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.max_depth(max_depth);
    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && has_extension(entry.path(), PREVIEW_CACHE_EXTENSION))
    });

    let mut found = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) && is_catalog(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            Err(e) => warn!("action=find_catalogs status=walk_error path={} error=\"{e}\"", root.display()),
        }
    }
    found
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

fn is_catalog(path: &Path) -> bool {
    has_extension(path, CATALOG_EXTENSION)
}
