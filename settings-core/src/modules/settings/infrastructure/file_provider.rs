// File Settings Provider
//
// 基于 JSON 文件的持久化提供者实现
// 每个类别键对应数据目录下的一个独立文件，类别之间互不影响

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::modules::settings::ports::{SettingsError, SettingsProvider};

/// 文件持久化提供者
///
/// 将每个类别写入 `<data_dir>/<key>.json`
pub struct FileSettingsProvider {
    data_dir: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    async fn ensure_dir(&self) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))
    }
}

#[async_trait]
impl SettingsProvider for FileSettingsProvider {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), SettingsError> {
        self.ensure_dir().await?;

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        fs::write(self.path_for(key), content)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), SettingsError> {
        if !Path::new(&self.data_dir).exists() {
            return Ok(());
        }

        let mut entries = fs::read_dir(&self.data_dir)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)
                    .await
                    .map_err(|e| SettingsError::Storage(e.to_string()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_and_get_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp_dir.path().to_path_buf());

        let value = serde_json::json!({"name": "MarketHub"});
        provider.set("storeInfo", &value).await.unwrap();

        let loaded = provider.get("storeInfo").await.unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[tokio::test]
    async fn test_get_missing_category_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp_dir.path().to_path_buf());

        assert!(provider.get("banners").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("banners.json");
        std::fs::write(&path, "{ not json").unwrap();

        let provider = FileSettingsProvider::new(temp_dir.path().to_path_buf());
        let result = provider.get("banners").await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        {
            let provider = FileSettingsProvider::new(path.clone());
            provider
                .set("navLinks", &serde_json::json!([{"id": "1"}]))
                .await
                .unwrap();
        }

        let provider = FileSettingsProvider::new(path);
        assert!(provider.get("navLinks").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_removes_category_files() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp_dir.path().to_path_buf());

        provider.set("banners", &serde_json::json!([])).await.unwrap();
        provider.set("pages", &serde_json::json!({})).await.unwrap();

        provider.clear().await.unwrap();
        assert!(provider.get("banners").await.unwrap().is_none());
        assert!(provider.get("pages").await.unwrap().is_none());
    }
}
