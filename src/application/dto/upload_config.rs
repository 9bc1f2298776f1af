//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

/// アップロード設定
///
/// コアに渡される素の設定値。コア自身は環境変数などの
/// プロセス状態を一切読まない。
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// アップロード先フォルダの識別子
    pub folder_id: String,
    /// CSVファイルを走査するローカルディレクトリ
    pub data_dir: String,
    /// アップロードログの保存パス
    pub log_path: String,
    /// ファイルごとの最大リトライ回数（総試行回数は +1）
    pub max_retries: u32,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use boxsync::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new(
    ///     "1234567890".to_string(),
    ///     "data".to_string(),
    ///     ".upload_log.json".to_string(),
    ///     3,
    /// );
    ///
    /// assert_eq!(config.folder_id, "1234567890");
    /// assert_eq!(config.max_retries, 3);
    /// ```
    pub fn new(folder_id: String, data_dir: String, log_path: String, max_retries: u32) -> Self {
        Self {
            folder_id,
            data_dir,
            log_path,
            max_retries,
        }
    }
}
