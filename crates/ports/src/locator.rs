// crates/ports/src/locator.rs
use std::path::PathBuf;

use luminosity_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling catalog discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSearch {
    pub roots: Vec<PathBuf>,
    /// Limits how deep directories in `roots` are walked; `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl CatalogSearch {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots, max_depth: None }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Port for finding catalog files.
pub trait CatalogLocator: Send + Sync {
    fn locate(&self, search: &CatalogSearch) -> Result<Vec<PathBuf>>;
}
