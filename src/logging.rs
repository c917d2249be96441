// src/logging.rs
use env_logger::{Builder, Env};

use crate::config::Verbosity;

/// Installs the global logger. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: Verbosity) {
    let default = verbosity.level().as_str().to_ascii_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None).format_target(false);
    // A logger may already be installed when embedded in tests.
    let _ = builder.try_init();
}
