//! Environment Configuration
//!
//! 環境変数からのアプリケーション設定読み込み

use anyhow::{Context, Result};
use std::path::Path;

/// アプリケーション設定
///
/// 起動時に環境変数から読み込まれる。コアには `UploadConfig` として
/// 素の値だけが渡され、コア自身は環境を読まない。
#[derive(Debug, Clone)]
pub struct Settings {
    /// 発行済みのBox APIアクセストークン
    pub access_token: String,
    /// アップロード先フォルダの識別子
    pub upload_folder_id: String,
    /// CSVファイルを走査するローカルディレクトリ
    pub local_data_dir: String,
    /// アップロードログの保存パス
    pub upload_log_path: String,
    /// ファイルごとの最大リトライ回数
    pub max_retries: u32,
}

impl Settings {
    /// 環境変数（必要に応じて .env）から設定を読み込む
    ///
    /// # Arguments
    ///
    /// * `env_file` - 明示的な .env のパス。`None` の場合は自動検出
    ///
    /// # Errors
    ///
    /// 必須の環境変数が欠けている場合、明示指定された .env が読めない場合、
    /// `BOX_MAX_RETRIES` が整数として解釈できない場合にエラーを返す
    pub fn from_env(env_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = env_file {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file: {}", path.display()))?;
        } else {
            // 自動検出では .env が無くてもよい
            let _ = dotenvy::dotenv();
        }

        let access_token = require_env("BOX_ACCESS_TOKEN")?;
        let upload_folder_id = require_env("BOX_UPLOAD_FOLDER_ID")?;

        let local_data_dir =
            std::env::var("LOCAL_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let upload_log_path =
            std::env::var("UPLOAD_LOG_PATH").unwrap_or_else(|_| ".upload_log.json".to_string());

        let max_retries = match std::env::var("BOX_MAX_RETRIES") {
            Ok(value) => value
                .parse::<u32>()
                .with_context(|| format!("BOX_MAX_RETRIES must be an integer, got: {}", value))?,
            Err(_) => 3,
        };

        Ok(Self {
            access_token,
            upload_folder_id,
            local_data_dir: shellexpand::tilde(&local_data_dir).into_owned(),
            upload_log_path: shellexpand::tilde(&upload_log_path).into_owned(),
            max_retries,
        })
    }
}

/// 必須の環境変数を取得する。未設定・空文字はエラー
fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => anyhow::bail!("Environment variable {} is required", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "BOX_ACCESS_TOKEN",
            "BOX_UPLOAD_FOLDER_ID",
            "LOCAL_DATA_DIR",
            "UPLOAD_LOG_PATH",
            "BOX_MAX_RETRIES",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("BOX_ACCESS_TOKEN", "token");
        std::env::set_var("BOX_UPLOAD_FOLDER_ID", "fid");

        let settings = Settings::from_env(None).unwrap();

        assert_eq!(settings.access_token, "token");
        assert_eq!(settings.upload_folder_id, "fid");
        assert_eq!(settings.local_data_dir, "data");
        assert_eq!(settings.upload_log_path, ".upload_log.json");
        assert_eq!(settings.max_retries, 3);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        clear_env();
        std::env::set_var("BOX_UPLOAD_FOLDER_ID", "fid");

        let result = Settings::from_env(None);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("BOX_ACCESS_TOKEN"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        std::env::set_var("BOX_ACCESS_TOKEN", "token");
        std::env::set_var("BOX_UPLOAD_FOLDER_ID", "fid");
        std::env::set_var("LOCAL_DATA_DIR", "/srv/readings");
        std::env::set_var("UPLOAD_LOG_PATH", "/srv/state/upload_log.json");
        std::env::set_var("BOX_MAX_RETRIES", "5");

        let settings = Settings::from_env(None).unwrap();

        assert_eq!(settings.local_data_dir, "/srv/readings");
        assert_eq!(settings.upload_log_path, "/srv/state/upload_log.json");
        assert_eq!(settings.max_retries, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_max_retries() {
        clear_env();
        std::env::set_var("BOX_ACCESS_TOKEN", "token");
        std::env::set_var("BOX_UPLOAD_FOLDER_ID", "fid");
        std::env::set_var("BOX_MAX_RETRIES", "many");

        let result = Settings::from_env(None);

        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_missing_env_file() {
        clear_env();

        let result = Settings::from_env(Some(Path::new("/nonexistent/.env")));

        assert!(result.is_err());

        clear_env();
    }
}
