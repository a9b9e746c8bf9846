use crate::utils::error::IngotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const IMPORT_DIRECTORY: &str = "vonk-import.R4";
pub const DEPENDENCIES_DIRECTORY: &str = "dependencies";
pub const CORE_PACKAGE_PREFIX: &str = "hl7.fhir.r4.core#";
pub const LICENSE_FILE: &str = "firelyserver-license.json";
pub const APP_SETTINGS_FILE: &str = "appsettings.instance.json";
pub const DOCKER_SCRIPT_FILE: &str = "docker_run.ps1";

pub const DEFAULT_CONTAINER_NAME: &str = "firely.server";
pub const DEFAULT_HOST_PORT: u16 = 4080;

/// `name@version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
}

impl FromStr for PackageReference {
    type Err = IngotError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = token.split('@').collect();

        let invalid = |reason: &str| IngotError::InvalidPackageReference {
            token: token.to_string(),
            reason: reason.to_string(),
        };

        match parts.as_slice() {
            [name, version] if !name.is_empty() && !version.is_empty() => Ok(Self {
                name: (*name).to_string(),
                version: (*version).to_string(),
            }),
            [_, _] => Err(invalid("name and version must both be non-empty")),
            [_] => Err(invalid("missing '@' between name and version")),
            _ => Err(invalid("more than one '@' in package reference")),
        }
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// 授權檔來源
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LicenseSource {
    /// 不寫入授權檔
    #[default]
    None,
    /// 來源存在時才複製，不存在則略過
    IfExists(PathBuf),
    /// 一律複製；來源不存在時以 IO 錯誤結束
    Required(PathBuf),
}

/// 一次 setup 的完整輸入
#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub packages: Vec<String>,
    pub name: String,
    pub port: u16,
    pub license: LicenseSource,
    pub output_dir: PathBuf,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            name: DEFAULT_CONTAINER_NAME.to_string(),
            port: DEFAULT_HOST_PORT,
            license: LicenseSource::None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SetupOptions {
    pub fn import_directory(&self) -> PathBuf {
        self.output_dir.join(IMPORT_DIRECTORY)
    }
}

/// 單一套件安裝的結果；exit code 只做紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub package: PackageReference,
    pub exit_code: Option<i32>,
}

impl InstallOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub removed_core_packages: Vec<PathBuf>,
    pub removed_examples: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct SetupReport {
    pub import_directory: PathBuf,
    pub installs: Vec<InstallOutcome>,
    pub cleanup: CleanupSummary,
    pub license: WriteOutcome,
    pub app_settings: WriteOutcome,
    pub docker_script: WriteOutcome,
}

/// Firely Server 預設 `appsettings.instance.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    pub license: LicenseSettings,
    pub repository: String,
    #[serde(rename = "SQLiteDbOptions")]
    pub sqlite_db_options: SqliteDbOptions,
    pub administration: AdministrationSettings,
    pub administration_import_options: AdministrationImportOptions,
    pub information_model: InformationModelSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LicenseSettings {
    pub license_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SqliteDbOptions {
    pub connection_string: String,
    pub auto_update_database: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrationSettings {
    pub repository: String,
    #[serde(rename = "SQLiteDbOptions")]
    pub sqlite_db_options: SqliteDbOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrationImportOptions {
    pub import_directory: String,
    pub imported_directory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationModelSettings {
    pub default: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            license: LicenseSettings {
                license_file: LICENSE_FILE.to_string(),
            },
            repository: "SQLite".to_string(),
            sqlite_db_options: SqliteDbOptions {
                connection_string: "Data Source=./data/vonkdata.db;Cache=Shared".to_string(),
                auto_update_database: true,
            },
            administration: AdministrationSettings {
                repository: "SQLite".to_string(),
                sqlite_db_options: SqliteDbOptions {
                    connection_string: "Data Source=./data/vonkadmin.db;Cache=Shared"
                        .to_string(),
                    auto_update_database: true,
                },
            },
            administration_import_options: AdministrationImportOptions {
                import_directory: format!("./{}", IMPORT_DIRECTORY),
                imported_directory: "./vonk-imported".to_string(),
            },
            information_model: InformationModelSettings {
                default: "Fhir4.0".to_string(),
            },
        }
    }
}
