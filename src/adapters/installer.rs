use crate::domain::model::{InstallOutcome, PackageReference};
use crate::domain::ports::PackageInstaller;
use crate::utils::error::{IngotError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

pub const FHIR_PROGRAM: &str = "fhir";

/// 透過 Firely Terminal (`fhir install <name> <version> --here`) 安裝套件
#[derive(Debug, Clone)]
pub struct FhirCliInstaller {
    program: String,
}

impl FhirCliInstaller {
    pub fn new() -> Self {
        Self::with_program(FHIR_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FhirCliInstaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageInstaller for FhirCliInstaller {
    async fn install(&self, package: &PackageReference, working_dir: &Path) -> Result<InstallOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("install")
            .arg(&package.name)
            .arg(&package.version)
            .arg("--here")
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(
            "Spawning {} install {} {} --here in {}",
            self.program,
            package.name,
            package.version,
            working_dir.display()
        );

        let mut child = cmd.spawn().map_err(|source| IngotError::InstallerLaunch {
            program: self.program.clone(),
            source,
        })?;

        let status = child.wait().await.map_err(|source| IngotError::InstallerLaunch {
            program: self.program.clone(),
            source,
        })?;

        Ok(InstallOutcome {
            package: package.clone(),
            exit_code: status.code(),
        })
    }
}
