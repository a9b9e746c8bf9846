use crate::domain::model::{LicenseSource, SetupOptions};
use crate::utils::error::{IngotError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `ingot.toml`
///
/// ```toml
/// [setup]
/// packages = ["hl7.fhir.us.core@3.1.0"]
/// name = "firely.server"
/// port = 4080
/// license = "${FIRELY_LICENSE}"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub setup: SetupSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupSection {
    #[serde(default)]
    pub packages: Vec<String>,
    pub name: Option<String>,
    pub port: Option<u16>,
    pub license: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(IngotError::file_op("read", path))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IngotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIRELY_LICENSE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 套用到 options 上；檔案中的套件排在前面
    pub fn apply_to(self, options: &mut SetupOptions) {
        let SetupSection {
            packages,
            name,
            port,
            license,
            output_dir,
        } = self.setup;

        let mut merged = packages;
        merged.append(&mut options.packages);
        options.packages = merged;

        if let Some(name) = name {
            options.name = name;
        }
        if let Some(port) = port {
            options.port = port;
        }
        if let Some(license) = license {
            options.license = LicenseSource::IfExists(license);
        }
        if let Some(output_dir) = output_dir {
            options.output_dir = output_dir;
        }
    }
}
