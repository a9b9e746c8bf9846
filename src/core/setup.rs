use crate::core::{artifacts, cleanup};
use crate::domain::model::{PackageReference, SetupOptions, SetupReport};
use crate::domain::ports::PackageInstaller;
use crate::utils::error::{IngotError, Result};
use std::fs;
use std::path::Path;

/// 依序執行 setup 的六個步驟，遇到第一個錯誤即中止（不回滾）
pub struct SetupEngine<I: PackageInstaller> {
    installer: I,
}

impl<I: PackageInstaller> SetupEngine<I> {
    pub fn new(installer: I) -> Self {
        Self { installer }
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub async fn run(&self, options: &SetupOptions) -> Result<SetupReport> {
        let import_dir = options.import_directory();

        tracing::info!("📁 Resetting import directory {}", import_dir.display());
        reset_directory(&import_dir)?;

        tracing::info!("📦 Installing {} package(s)", options.packages.len());
        let mut installs = Vec::with_capacity(options.packages.len());
        for token in &options.packages {
            let package: PackageReference = token.parse()?;
            tracing::info!("Installing {}", package);

            let outcome = self.installer.install(&package, &import_dir).await?;
            if !outcome.succeeded() {
                // 不中止：缺少 dependencies 目錄時才會在清理步驟失敗
                tracing::warn!(
                    "Installer for {} exited with {:?}",
                    package,
                    outcome.exit_code
                );
            }
            installs.push(outcome);
        }

        tracing::info!("🧹 Cleaning up installed packages");
        let cleanup = cleanup::clean_up_packages(&import_dir)?;
        tracing::info!(
            "Removed {} core package(s) and {} examples folder(s)",
            cleanup.removed_core_packages.len(),
            cleanup.removed_examples.len()
        );

        let license = artifacts::write_license(&options.output_dir, &options.license)?;
        tracing::debug!("License: {:?}", license);

        let app_settings = artifacts::write_app_settings(&options.output_dir)?;
        tracing::debug!("App settings: {:?}", app_settings);

        let docker_script =
            artifacts::write_docker_script(&options.output_dir, &options.name, options.port)?;
        tracing::debug!("Docker script: {:?}", docker_script);

        Ok(SetupReport {
            import_directory: import_dir,
            installs,
            cleanup,
            license,
            app_settings,
            docker_script,
        })
    }
}

fn reset_directory(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(IngotError::file_op("remove", dir))?;
    }
    fs::create_dir_all(dir).map_err(IngotError::file_op("create", dir))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::InstallOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// 只記錄呼叫，不建立任何目錄
    #[derive(Default)]
    struct RecordingInstaller {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PackageInstaller for RecordingInstaller {
        async fn install(&self, package: &PackageReference, _working_dir: &Path) -> Result<InstallOutcome> {
            self.calls.lock().unwrap().push(package.to_string());
            Ok(InstallOutcome {
                package: package.clone(),
                exit_code: Some(0),
            })
        }
    }

    #[test]
    fn test_reset_directory_removes_stale_content() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("vonk-import.R4");
        fs::create_dir_all(dir.join("stale")).unwrap();
        fs::write(dir.join("stale.txt"), "x").unwrap();

        reset_directory(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_bad_token_stops_later_installs() {
        let temp_dir = TempDir::new().unwrap();
        let engine = SetupEngine::new(RecordingInstaller::default());
        let options = SetupOptions {
            packages: vec![
                "hl7.fhir.us.core@3.1.0".to_string(),
                "bad-token".to_string(),
                "hl7.fhir.uv.ips@1.1.0".to_string(),
            ],
            output_dir: temp_dir.path().to_path_buf(),
            ..SetupOptions::default()
        };

        let result = tokio_test::block_on(engine.run(&options));

        assert!(matches!(
            result,
            Err(IngotError::InvalidPackageReference { ref token, .. }) if token == "bad-token"
        ));
        assert_eq!(
            *engine.installer.calls.lock().unwrap(),
            vec!["hl7.fhir.us.core@3.1.0".to_string()]
        );
    }
}
