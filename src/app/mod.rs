//! Application glue module
//!
//! Configuration, output handling and logging setup for the `vbe-decode`
//! binary. Nothing here is needed to decode a script.

mod config;
mod output;

pub use config::{default_config_path, CliArgs, Config, ConfigError, OverwritePolicy};
pub use output::{
    decoded_file_name, output_target, write_console, write_result, OutputTarget, WriteOutcome,
    STDIN_NAME,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stderr. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
