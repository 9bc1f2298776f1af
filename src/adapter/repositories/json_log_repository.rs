//! JSON Log Repository Implementation
//!
//! LogRepositoryのJSON実装（アップロードログをJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::repositories::log_repository::{LogRepository, UploadLog};

/// JSONファイルベースのログリポジトリ
pub struct JsonLogRepository;

/// アップロードログ（JSON永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct UploadLogJson {
    #[serde(default)]
    uploaded: Vec<String>,
}

impl JsonLogRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルからログを読み込む（同期処理）
    ///
    /// ファイルが無ければ空のログ。JSONとして壊れている場合も
    /// 警告を出して空のログから始める（致命的エラーにはしない）。
    fn load_sync(path: &str) -> Result<UploadLog> {
        let path = Path::new(path);

        if !path.exists() {
            info!("No existing upload log found, starting with an empty log");
            return Ok(UploadLog::new());
        }

        let content = fs::read_to_string(path).context("Failed to read upload log file")?;

        match serde_json::from_str::<UploadLogJson>(&content) {
            Ok(json) => {
                let log = UploadLog::from_entries(json.uploaded);
                info!("Loaded upload log: {} files previously uploaded", log.len());
                Ok(log)
            }
            Err(e) => {
                warn!("Failed to parse upload log ({}). Starting fresh.", e);
                Ok(UploadLog::new())
            }
        }
    }

    /// ファイルにログを保存する（同期処理）
    ///
    /// 親ディレクトリを作成した上で、ソート済みのエントリ一覧で
    /// ファイル全体を上書きする。
    fn save_sync(path: &str, log: &UploadLog) -> Result<()> {
        let path = Path::new(path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create upload log directory")?;
            }
        }

        let payload = UploadLogJson {
            uploaded: log.sorted_entries(),
        };
        let json =
            serde_json::to_string_pretty(&payload).context("Failed to serialize upload log")?;

        fs::write(path, json).context("Failed to write upload log file")?;

        info!("Saved upload log: {} files recorded", log.len());

        Ok(())
    }
}

#[async_trait]
impl LogRepository for JsonLogRepository {
    async fn load(&self, path: &str) -> Result<UploadLog> {
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn save(&self, path: &str, log: &UploadLog) -> Result<()> {
        let path = path.to_string();
        let log = log.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &log))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file() {
        let log = JsonLogRepository::load_sync("/nonexistent/path/upload_log.json").unwrap();

        assert!(log.is_empty());
    }

    #[test]
    fn test_load_valid_log() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "uploaded": ["/data/a.csv", "/data/b.csv"]
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let log = JsonLogRepository::load_sync(file.path().to_str().unwrap()).unwrap();

        assert_eq!(log.len(), 2);
        assert!(log.is_uploaded(Path::new("/data/a.csv")));
        assert!(log.is_uploaded(Path::new("/data/b.csv")));
    }

    #[test]
    fn test_load_invalid_json_starts_fresh() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not valid json at all").unwrap();

        let result = JsonLogRepository::load_sync(file.path().to_str().unwrap());

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let log = JsonLogRepository::load_sync(file.path().to_str().unwrap()).unwrap();

        assert!(log.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("upload_log.json");

        let log = UploadLog::from_entries(vec![
            "/data/b.csv".to_string(),
            "/data/a.csv".to_string(),
        ]);

        JsonLogRepository::save_sync(log_path.to_str().unwrap(), &log).unwrap();

        let reloaded = JsonLogRepository::load_sync(log_path.to_str().unwrap()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_uploaded(Path::new("/data/a.csv")));
        assert!(reloaded.is_uploaded(Path::new("/data/b.csv")));
    }

    #[test]
    fn test_save_writes_sorted_entries() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("upload_log.json");

        let log = UploadLog::from_entries(vec![
            "/data/c.csv".to_string(),
            "/data/a.csv".to_string(),
            "/data/b.csv".to_string(),
        ]);

        JsonLogRepository::save_sync(log_path.to_str().unwrap(), &log).unwrap();

        let raw = fs::read_to_string(&log_path).unwrap();
        let a = raw.find("/data/a.csv").unwrap();
        let b = raw.find("/data/b.csv").unwrap();
        let c = raw.find("/data/c.csv").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("state/nested/upload_log.json");

        let log = UploadLog::from_entries(vec!["/data/a.csv".to_string()]);

        JsonLogRepository::save_sync(log_path.to_str().unwrap(), &log).unwrap();

        assert!(log_path.exists());
    }

    #[test]
    fn test_save_overwrites_corrupt_file_with_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("upload_log.json");
        fs::write(&log_path, "garbage").unwrap();

        let log = JsonLogRepository::load_sync(log_path.to_str().unwrap()).unwrap();
        assert!(log.is_empty());

        JsonLogRepository::save_sync(log_path.to_str().unwrap(), &log).unwrap();

        let raw = fs::read_to_string(&log_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.get("uploaded").unwrap().is_array());
    }
}
