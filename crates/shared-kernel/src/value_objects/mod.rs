// crates/shared-kernel/src/value_objects/mod.rs
pub mod field_value;
pub mod file_size;
pub mod record;
pub mod tally;

pub use field_value::FieldValue;
pub use file_size::FileSize;
pub use record::Record;
pub use tally::Tally;
