use crate::domain::model::{
    AppSettings, LicenseSource, WriteOutcome, APP_SETTINGS_FILE, DOCKER_SCRIPT_FILE,
    IMPORT_DIRECTORY, LICENSE_FILE,
};
use crate::utils::error::{IngotError, Result};
use std::fs;
use std::path::Path;

/// 複製授權檔到 `firelyserver-license.json`（覆蓋既有檔案）
pub fn write_license(output_dir: &Path, source: &LicenseSource) -> Result<WriteOutcome> {
    let destination = output_dir.join(LICENSE_FILE);

    let source_path = match source {
        LicenseSource::None => {
            tracing::debug!("No license source given, skipping license");
            return Ok(WriteOutcome::Skipped);
        }
        LicenseSource::IfExists(path) if !path.is_file() => {
            tracing::warn!("License file {} not found, skipping", path.display());
            return Ok(WriteOutcome::Skipped);
        }
        LicenseSource::IfExists(path) | LicenseSource::Required(path) => path,
    };

    if destination.exists() && is_same_file(source_path, &destination)? {
        tracing::debug!(
            "License source {} is already {}, nothing to copy",
            source_path.display(),
            LICENSE_FILE
        );
        return Ok(WriteOutcome::Skipped);
    }

    fs::copy(source_path, &destination).map_err(IngotError::file_op("copy license from", source_path))?;
    Ok(WriteOutcome::Written)
}

/// `fs::copy` 會先截斷目的檔，來源與目的相同時必須略過
fn is_same_file(source: &Path, destination: &Path) -> Result<bool> {
    let source = fs::canonicalize(source).map_err(IngotError::file_op("resolve", source))?;
    let destination =
        fs::canonicalize(destination).map_err(IngotError::file_op("resolve", destination))?;
    Ok(source == destination)
}

/// 已存在就不覆蓋
pub fn write_app_settings(output_dir: &Path) -> Result<WriteOutcome> {
    let destination = output_dir.join(APP_SETTINGS_FILE);
    if destination.exists() {
        tracing::info!("{} already exists, leaving it as is", APP_SETTINGS_FILE);
        return Ok(WriteOutcome::Skipped);
    }

    let json = serde_json::to_string_pretty(&AppSettings::default())?;
    fs::write(&destination, json).map_err(IngotError::file_op("write", &destination))?;
    Ok(WriteOutcome::Written)
}

pub fn render_docker_script(name: &str, port: u16) -> String {
    let lines = [
        format!("docker run -d -p {}:4080 --name {} `", port, name),
        format!("-v ${{PWD}}/{0}:/app/{0} `", LICENSE_FILE),
        format!("-v ${{PWD}}/{0}:/app/{0} `", APP_SETTINGS_FILE),
        format!("-v ${{PWD}}/{0}:/app/{0} `", IMPORT_DIRECTORY),
        "firely/server".to_string(),
    ];

    let mut script = String::new();
    for line in lines {
        script.push_str(&line);
        script.push('\n');
    }
    script
}

/// 已存在就不覆蓋
pub fn write_docker_script(output_dir: &Path, name: &str, port: u16) -> Result<WriteOutcome> {
    let destination = output_dir.join(DOCKER_SCRIPT_FILE);
    if destination.exists() {
        tracing::info!("{} already exists, leaving it as is", DOCKER_SCRIPT_FILE);
        return Ok(WriteOutcome::Skipped);
    }

    fs::write(&destination, render_docker_script(name, port))
        .map_err(IngotError::file_op("write", &destination))?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_docker_script() {
        let script = render_docker_script("firely.server", 4080);
        let expected = "docker run -d -p 4080:4080 --name firely.server `\n\
-v ${PWD}/firelyserver-license.json:/app/firelyserver-license.json `\n\
-v ${PWD}/appsettings.instance.json:/app/appsettings.instance.json `\n\
-v ${PWD}/vonk-import.R4:/app/vonk-import.R4 `\n\
firely/server\n";
        assert_eq!(script, expected);
    }

    #[test]
    fn test_docker_script_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(DOCKER_SCRIPT_FILE), "custom").unwrap();

        let outcome = write_docker_script(temp_dir.path(), "other", 9090).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        let content = fs::read_to_string(temp_dir.path().join(DOCKER_SCRIPT_FILE)).unwrap();
        assert_eq!(content, "custom");
    }

    #[test]
    fn test_app_settings_written_once() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(write_app_settings(temp_dir.path()).unwrap(), WriteOutcome::Written);
        let written = fs::read_to_string(temp_dir.path().join(APP_SETTINGS_FILE)).unwrap();
        let parsed: AppSettings = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, AppSettings::default());
        assert!(written.contains("\n  \"License\""));

        assert_eq!(write_app_settings(temp_dir.path()).unwrap(), WriteOutcome::Skipped);
    }

    #[test]
    fn test_license_if_exists_skips_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = LicenseSource::IfExists(temp_dir.path().join("missing.json"));

        let outcome = write_license(temp_dir.path(), &source).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert!(!temp_dir.path().join(LICENSE_FILE).exists());
    }

    #[test]
    fn test_license_required_fails_on_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = LicenseSource::Required(temp_dir.path().join("missing.json"));

        let result = write_license(temp_dir.path(), &source);

        assert!(matches!(result, Err(IngotError::FileOperation { .. })));
    }

    #[test]
    fn test_license_already_in_place_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join(LICENSE_FILE);
        fs::write(&destination, b"{\"key\":\"secret\"}").unwrap();

        let outcome =
            write_license(temp_dir.path(), &LicenseSource::IfExists(destination.clone())).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read(&destination).unwrap(), b"{\"key\":\"secret\"}");

        // 透過不同的相對路徑指向同一個檔案
        let indirect = temp_dir.path().join(".").join(LICENSE_FILE);
        let outcome = write_license(temp_dir.path(), &LicenseSource::Required(indirect)).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read(&destination).unwrap(), b"{\"key\":\"secret\"}");
    }

    #[test]
    fn test_license_overwrites_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source_path = temp_dir.path().join("my-license.json");
        fs::write(&source_path, b"{\"key\":\"new\"}").unwrap();
        fs::write(temp_dir.path().join(LICENSE_FILE), b"old").unwrap();

        let outcome = write_license(temp_dir.path(), &LicenseSource::IfExists(source_path)).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        let copied = fs::read(temp_dir.path().join(LICENSE_FILE)).unwrap();
        assert_eq!(copied, b"{\"key\":\"new\"}");
    }
}
