//! Arguments and setup shared by both binaries

use clap::Args;
use miette::Result;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the app project (the directory containing `res/`)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resource directory to scan, relative to the project
    #[arg(long, value_name = "DIR")]
    pub res_dir: Option<PathBuf>,

    /// Generated manifest, relative to the project
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Overlayable file whose resources are left out of the manifest
    #[arg(long, value_name = "FILE")]
    pub exclusions: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Load the config file (explicit or from the project root) and apply overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            Config::from_file(config_path)?
        } else {
            Config::from_default_locations(&self.path)?
        };

        if let Some(res_dir) = &self.res_dir {
            config.res_dir = res_dir.clone();
        }
        if let Some(manifest) = &self.manifest {
            config.manifest = manifest.clone();
        }
        if let Some(exclusions) = &self.exclusions {
            config.exclusions = exclusions.clone();
        }

        Ok(config)
    }
}

/// Logs go to stderr so stdout carries only reports and documents
pub fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
