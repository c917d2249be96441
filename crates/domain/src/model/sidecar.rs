// crates/domain/src/model/sidecar.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A JPG sidecar written next to a RAW original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarFileRecord {
    pub photo_id: i64,
    pub root_path: String,
    pub folder_path: String,
    pub base_name: String,
    pub extension: String,
    pub sidecar_extension: String,
}

impl SidecarFileRecord {
    fn join(&self, ext: &str) -> PathBuf {
        PathBuf::from(format!("{}{}{}.{ext}", self.root_path, self.folder_path, self.base_name))
    }

    /// Absolute path of the sidecar file.
    pub fn sidecar_path(&self) -> PathBuf {
        self.join(&self.sidecar_extension)
    }

    /// Absolute path of the original the sidecar belongs to.
    pub fn original_path(&self) -> PathBuf {
        self.join(&self.extension)
    }
}

/// Sidecar summary for one catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarFileStats {
    /// Sidecars present on disk.
    pub count: u64,
    pub missing_sidecar_count: u64,
    /// Sidecar records whose original file is gone.
    pub missing_original_count: u64,
    pub total_size_bytes: u64,
}
