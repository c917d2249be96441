// crates/infra/src/persistence.rs
mod file_writer;
mod report;

pub use file_writer::FileWriter;
pub use report::{Encoding, JsonFileSink, OutputTarget};
