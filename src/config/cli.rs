use crate::config::toml_config::TomlConfig;
use crate::domain::model::{LicenseSource, SetupOptions};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ingot")]
#[command(about = "Ingot - a tool for setting up Firely Server containers")]
pub struct CliConfig {
    /// List of packages containing conformance resources (name@version)
    #[arg(long, num_args = 1..)]
    pub packages: Vec<String>,

    /// Docker container name [default: firely.server]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Firely Server host port [default: 4080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Firely Server license file
    #[arg(short, long)]
    pub license: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the bundle is written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Show the resolved setup without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 合併 TOML 檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<SetupOptions> {
        let mut options = SetupOptions {
            packages: self.packages.clone(),
            ..SetupOptions::default()
        };

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut options);
        }

        if let Some(name) = &self.name {
            options.name = name.clone();
        }
        if let Some(port) = self.port {
            options.port = port;
        }
        if let Some(license) = &self.license {
            options.license = LicenseSource::IfExists(license.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            options.output_dir = output_dir.clone();
        }

        Ok(options)
    }
}
