#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub use toml_config::{AppConfig, CatalogConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "auto-quote")]
#[command(about = "Auto insurance premium quotes and vehicle reference lookups")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings file when given, built-in defaults otherwise.
    pub fn load_settings(&self) -> crate::Result<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::from_file(path),
            None => Ok(AppConfig::default()),
        }
    }
}
