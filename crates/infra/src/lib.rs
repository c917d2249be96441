// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod discovery;
pub mod metadata;
pub mod persistence;

pub use catalog::{SqliteCatalog, SqliteCatalogOpener};
pub use discovery::FsCatalogLocator;
pub use metadata::FsFileMetadata;
pub use persistence::{Encoding, FileWriter, JsonFileSink, OutputTarget};
