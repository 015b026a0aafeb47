//! Configuration for the decoder command line tool
//!
//! Precedence: CLI > env > file > defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// CLI arguments for vbe-decode
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vbe-decode")]
#[command(version)]
#[command(about = "Decode VBE / JSE encoded scripts", long_about = None)]
pub struct CliArgs {
    /// Encoded files to decode
    #[arg(
        short,
        long = "input",
        value_name = "FILE",
        num_args = 1..,
        required_unless_present = "stdin"
    )]
    pub inputs: Vec<PathBuf>,

    /// Read the encoded script from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Output directory, or a prefix for output file names
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite existing output files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Do not print the banner before console output
    #[arg(long)]
    pub no_banner: bool,
}

/// What to do when an output file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Ask on the terminal
    #[default]
    Prompt,
    /// Replace the file
    Always,
    /// Keep the existing file
    Never,
}

impl OverwritePolicy {
    /// Parse a policy name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "prompt" | "ask" => Some(OverwritePolicy::Prompt),
            "always" | "yes" => Some(OverwritePolicy::Always),
            "never" | "no" => Some(OverwritePolicy::Never),
            _ => None,
        }
    }
}

/// Decoder tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output directory or prefix; console when unset
    pub output_dir: Option<PathBuf>,
    /// Existing output file handling
    pub overwrite: OverwritePolicy,
    /// Print a banner before console output
    pub banner: bool,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            overwrite: OverwritePolicy::Prompt,
            banner: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from the default location or return defaults.
    ///
    /// Runs before logging is set up, so a broken file is reported on
    /// stderr directly.
    pub fn load_or_default() -> Self {
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: ignoring config {}: {}", config_path.display(), e);
                    },
                }
            }
        }
        Self::default()
    }

    /// Build the effective configuration for a command line invocation.
    ///
    /// An explicit `--config` file must load; the default location is
    /// best-effort.
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::load_or_default(),
        };

        config.apply_env_vars();
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variables to config
    fn apply_env_vars(&mut self) {
        if let Ok(val) = env::var("VBE_DECODER_OUTPUT") {
            if !val.trim().is_empty() {
                self.output_dir = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = env::var("VBE_DECODER_OVERWRITE") {
            if let Some(policy) = OverwritePolicy::from_name(&val) {
                self.overwrite = policy;
            }
        }
        if let Ok(val) = env::var("VBE_DECODER_LOG") {
            self.log_filter = val;
        }
    }

    /// Apply CLI arguments to config
    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(output) = &args.output {
            self.output_dir = Some(output.clone());
        }
        if args.force {
            self.overwrite = OverwritePolicy::Always;
        }
        if args.no_banner {
            self.banner = false;
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_filter",
                message: "Log filter must not be empty".to_string(),
            });
        }
        if let Err(e) = EnvFilter::try_new(&self.log_filter) {
            return Err(ConfigError::Invalid {
                field: "log_filter",
                message: format!("Invalid log filter '{}': {}", self.log_filter, e),
            });
        }
        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "output_dir",
                    message: "Output path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Get the default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("vbe-decoder")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}
