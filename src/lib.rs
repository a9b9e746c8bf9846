pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{positional::PositionalConfig, CliConfig};

pub use adapters::FhirCliInstaller;
pub use core::setup::SetupEngine;
pub use domain::model::{LicenseSource, PackageReference, SetupOptions, SetupReport};
pub use domain::ports::PackageInstaller;
pub use utils::error::{IngotError, Result};
