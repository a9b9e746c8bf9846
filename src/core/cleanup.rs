use crate::domain::model::{CleanupSummary, CORE_PACKAGE_PREFIX, DEPENDENCIES_DIRECTORY};
use crate::utils::error::{IngotError, Result};
use std::fs;
use std::path::Path;

/// 清理已安裝套件：
/// - 刪除 `hl7.fhir.r4.core#*` 整個套件目錄
/// - 其他套件刪除 `package/examples`
pub fn clean_up_packages(import_dir: &Path) -> Result<CleanupSummary> {
    let dependencies_dir = import_dir.join(DEPENDENCIES_DIRECTORY);

    if !dependencies_dir.is_dir() {
        return Err(IngotError::MissingDependenciesDirectory {
            path: dependencies_dir,
        });
    }

    let mut summary = CleanupSummary::default();

    let entries = fs::read_dir(&dependencies_dir)
        .map_err(IngotError::file_op("read directory", &dependencies_dir))?;

    for entry in entries {
        let entry = entry.map_err(IngotError::file_op("read directory", &dependencies_dir))?;
        let package_root = entry.path();

        if !package_root.is_dir() {
            continue;
        }

        let is_core = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(CORE_PACKAGE_PREFIX));

        if is_core {
            tracing::debug!("Removing core package {}", package_root.display());
            fs::remove_dir_all(&package_root)
                .map_err(IngotError::file_op("remove", &package_root))?;
            summary.removed_core_packages.push(package_root);
            continue;
        }

        let examples_dir = package_root.join("package").join("examples");
        if examples_dir.is_dir() {
            tracing::debug!("Removing examples {}", examples_dir.display());
            fs::remove_dir_all(&examples_dir)
                .map_err(IngotError::file_op("remove", &examples_dir))?;
            summary.removed_examples.push(examples_dir);
        }
    }

    summary.removed_core_packages.sort();
    summary.removed_examples.sort();

    Ok(summary)
}
