use crate::domain::model::{InstallOutcome, PackageReference};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// 外部套件管理器：安裝一個套件到指定目錄，等待結束後回傳
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    async fn install(&self, package: &PackageReference, working_dir: &Path) -> Result<InstallOutcome>;
}
