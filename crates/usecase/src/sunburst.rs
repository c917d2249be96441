// crates/usecase/src/sunburst.rs
use std::path::Path;

use log::{debug, warn};
use luminosity_domain::{GroupNode, GroupingMode, build_tree_with_mode, options::GroupBy};
use luminosity_ports::catalog::CatalogOpener;
use luminosity_shared_kernel::{ErrorContext, Result};

/// Builds the nested tree a sunburst chart renders from one catalog.
pub struct BuildSunburst<'a> {
    opener: &'a dyn CatalogOpener,
}

impl<'a> BuildSunburst<'a> {
    pub fn new(opener: &'a dyn CatalogOpener) -> Self {
        Self { opener }
    }

    /// # Errors
    ///
    /// Fails when the catalog cannot be opened or queried, or in strict mode
    /// when a row has a bad count or lacks a grouping field.
    pub fn run(&self, catalog: &Path, label: &str, groupby: &GroupBy, mode: GroupingMode) -> Result<GroupNode> {
        for field in groupby.unknown_fields() {
            warn!("action=sunburst field={field} status=unknown_field every row will fall into an unlabeled group");
        }

        let reader = self.opener.open(catalog)?;
        let rows = reader.sunburst_rows()?;
        debug!("action=sunburst catalog={} rows={} groupby={groupby}", catalog.display(), rows.len());

        build_tree_with_mode(label, rows, groupby.fields(), mode)
            .with_context(|| format!("grouping sunburst rows of '{}'", catalog.display()))
    }
}
