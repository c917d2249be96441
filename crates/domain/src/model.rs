// crates/domain/src/model.rs
pub mod named_object;
pub mod photo;
pub mod sidecar;

pub use named_object::{NamedObject, NamedObjectList};
pub use photo::{PhotoRecord, parse_capture_time};
pub use sidecar::{SidecarFileRecord, SidecarFileStats};
