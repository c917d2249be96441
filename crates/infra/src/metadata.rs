// crates/infra/src/metadata.rs
use std::{fs, path::Path};

use luminosity_ports::metadata::FileMetadata;

/// Looks files up with `stat`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileMetadata;

impl FileMetadata for FsFileMetadata {
    fn size_of(&self, path: &Path) -> Option<u64> {
        fs::metadata(path).ok().filter(|meta| meta.is_file()).map(|meta| meta.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_sizes_of_regular_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("DSCF0001.JPG");
        fs::write(&file, [0_u8; 1234]).unwrap();

        assert_eq!(FsFileMetadata.size_of(&file), Some(1234));
        assert_eq!(FsFileMetadata.size_of(dir.path()), None);
        assert_eq!(FsFileMetadata.size_of(&dir.path().join("missing.JPG")), None);
    }
}
