//! Box Upload API Client
//!
//! reqwestベースのBox Upload APIクライアント

use reqwest::multipart;
use serde_json::json;
use thiserror::Error;

use super::models::{UploadResponse, UploadedFile};

/// Box Upload APIのベースURL
pub const UPLOAD_BASE_URL: &str = "https://upload.box.com/api/2.0";

/// Box APIのエラー
#[derive(Debug, Error)]
pub enum BoxApiError {
    /// 転送層のエラー（接続失敗、タイムアウト等）
    #[error("Box API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// APIが非2xxステータスを返した
    #[error("Box API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// レスポンスにファイルエントリが含まれない
    #[error("Box API response contained no file entries")]
    EmptyResponse,
}

/// Box Upload APIクライアント
///
/// 発行済みのアクセストークンで認証する。トークンの発行・更新は
/// このクライアントの責務ではない。
pub struct BoxApiClient {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl BoxApiClient {
    /// 新しいクライアントを作成
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, UPLOAD_BASE_URL.to_string())
    }

    /// ベースURLを指定してクライアントを作成（テスト用）
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            base_url,
        }
    }

    /// ファイルをフォルダにアップロードする
    ///
    /// multipart/form-data で attributes（ファイル名と親フォルダ）と
    /// ファイル本体を `files/content` に送信する
    pub async fn upload_stream(
        &self,
        folder_id: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadedFile, BoxApiError> {
        let attributes = json!({
            "name": file_name,
            "parent": { "id": folder_id },
        })
        .to_string();

        let part = multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .text("attributes", attributes)
            .part("file", part);

        let response = self
            .http
            .post(format!("{}/files/content", self.base_url))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoxApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = response.json().await?;
        parsed
            .entries
            .into_iter()
            .next()
            .ok_or(BoxApiError::EmptyResponse)
    }
}
