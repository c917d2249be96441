// crates/ports/src/metadata.rs
use std::path::Path;

/// File metadata lookups.
pub trait FileMetadata: Send + Sync {
    /// Size in bytes, or `None` when the file does not exist or cannot be read.
    fn size_of(&self, path: &Path) -> Option<u64>;
}
