#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod positional;
pub mod toml_config;

use crate::domain::model::{LicenseSource, SetupOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use std::path::Path;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

fn validate_optional_path(field_name: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, &path.to_string_lossy()),
        None => Ok(()),
    }
}

impl Validate for SetupOptions {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_optional_path("output_dir", Some(self.output_dir.as_path()))?;

        let license = match &self.license {
            LicenseSource::None => None,
            LicenseSource::IfExists(path) | LicenseSource::Required(path) => Some(path.as_path()),
        };
        validate_optional_path("license", license)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_setup_options() {
        assert!(SetupOptions::default().validate().is_ok());

        let options = SetupOptions {
            port: 0,
            ..SetupOptions::default()
        };
        assert!(options.validate().is_err());

        let options = SetupOptions {
            name: " ".to_string(),
            ..SetupOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_any_non_empty_name_is_accepted() {
        for name in ["my server", "Firely Server", "_x"] {
            let options = SetupOptions {
                name: name.to_string(),
                ..SetupOptions::default()
            };
            assert!(options.validate().is_ok(), "expected '{}' to be accepted", name);
        }
    }
}
