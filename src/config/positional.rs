use crate::domain::model::{
    LicenseSource, SetupOptions, DEFAULT_CONTAINER_NAME, DEFAULT_HOST_PORT,
};
use clap::Parser;
use std::path::PathBuf;

/// 固定的授權檔來源（相對於工作目錄）
pub const FIXED_LICENSE_SOURCE: &str = "license/firelyserver-license.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "ingot-positional")]
#[command(about = "Set up a Firely Server container from a list of name@version packages")]
pub struct PositionalConfig {
    /// Packages containing conformance resources (name@version)
    pub packages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl PositionalConfig {
    pub fn into_options(self) -> SetupOptions {
        SetupOptions {
            packages: self.packages,
            name: DEFAULT_CONTAINER_NAME.to_string(),
            port: DEFAULT_HOST_PORT,
            license: LicenseSource::Required(PathBuf::from(FIXED_LICENSE_SOURCE)),
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_packages_with_fixed_defaults() {
        let config = PositionalConfig::parse_from(["ingot-positional", "a@1.0.0", "b@2.0.0"]);
        let options = config.into_options();

        assert_eq!(options.packages, vec!["a@1.0.0", "b@2.0.0"]);
        assert_eq!(options.name, "firely.server");
        assert_eq!(options.port, 4080);
        assert_eq!(
            options.license,
            LicenseSource::Required(PathBuf::from(FIXED_LICENSE_SOURCE))
        );
    }
}
