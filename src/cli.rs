// src/cli.rs
mod args;
mod value_enum;

pub use args::{Args, Command, SidecarsCommand, StatsArgs, SunburstArgs};
pub use value_enum::CliOutputFormat;
