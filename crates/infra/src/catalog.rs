// crates/infra/src/catalog.rs
mod queries;
mod sqlite;

pub use sqlite::{SqliteCatalog, SqliteCatalogOpener};
