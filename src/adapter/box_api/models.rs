//! Box Upload API Models
//!
//! Box Upload APIのレスポンスモデル

use serde::Deserialize;

/// アップロード済みファイルのエントリ
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
}

/// `files/content` エンドポイントのレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub entries: Vec<UploadedFile>,
}
