// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use luminosity_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Replace `path` with `data` via a temp file in the same directory and a
    /// rename, so readers never observe a half-written report.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileWrite`] when the temp file cannot be
    /// written or renamed. The temp file is removed on failure.
    pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
        let failed = |source: io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let name = path
            .file_name()
            .ok_or_else(|| failed(io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = dir.join(format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id()));

        let write = || -> io::Result<()> {
            let mut w = BufWriter::new(File::create(&tmp)?);
            w.write_all(data)?;
            w.flush()?;
            // Durability is best effort; some file systems reject fsync.
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        };

        write().map_err(|source| {
            let _ = fs::remove_file(&tmp);
            failed(source)
        })?;
        Ok(())
    }
}
