use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngotError {
    #[error("Invalid package reference '{token}': {reason}")]
    InvalidPackageReference { token: String, reason: String },

    #[error("Dependencies directory not found at {}", .path.display())]
    MissingDependenciesDirectory { path: PathBuf },

    #[error("Failed to launch package installer '{program}': {source}")]
    InstallerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {action} {}: {source}", .path.display())]
    FileOperation {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Installer,
    FileSystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl IngotError {
    /// 包裝 IO 錯誤並附上動作與路徑
    pub fn file_op(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| IngotError::FileOperation {
            action,
            path,
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IngotError::InvalidPackageReference { .. } => ErrorCategory::Input,
            IngotError::MissingDependenciesDirectory { .. } | IngotError::InstallerLaunch { .. } => {
                ErrorCategory::Installer
            }
            IngotError::FileOperation { .. } | IngotError::SerializationError(_) => {
                ErrorCategory::FileSystem
            }
            IngotError::ConfigValidationError { .. }
            | IngotError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Installer => ErrorSeverity::Medium,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IngotError::InvalidPackageReference { token, .. } => {
                format!("Package '{}' is not in the form name@version", token)
            }
            IngotError::MissingDependenciesDirectory { .. } => {
                "No packages were installed into the import directory".to_string()
            }
            IngotError::InstallerLaunch { program, .. } => {
                format!("Could not start the '{}' package manager", program)
            }
            IngotError::FileOperation { action, path, .. } => {
                format!("Could not {} {}", action, path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IngotError::InvalidPackageReference { .. } => {
                "Pass packages as name@version, e.g. hl7.fhir.us.core@3.1.0"
            }
            IngotError::MissingDependenciesDirectory { .. } => {
                "Check the installer output above; make sure each package name and version exists"
            }
            IngotError::InstallerLaunch { .. } => {
                "Install the Firely Terminal (dotnet tool install -g firely.terminal) and make sure 'fhir' is on PATH"
            }
            IngotError::FileOperation { .. } => {
                "Check that the path exists and that you have permission to write to the working directory"
            }
            IngotError::SerializationError(_) => "This is a bug; please report it",
            IngotError::ConfigValidationError { .. } | IngotError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IngotError>;
