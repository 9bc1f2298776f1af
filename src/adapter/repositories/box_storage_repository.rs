//! Box Storage Repository Implementation
//!
//! StorageRepositoryのBox実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::adapter::box_api::client::BoxApiClient;
use crate::domain::repositories::storage_repository::StorageRepository;

/// Boxストレージリポジトリ
pub struct BoxStorageRepository {
    client: BoxApiClient,
}

impl BoxStorageRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: BoxApiClient) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl StorageRepository for BoxStorageRepository {
    async fn upload_file(&self, folder_id: &str, file_name: &str, content: Vec<u8>) -> Result<()> {
        let uploaded = self
            .client
            .upload_stream(folder_id, file_name, content)
            .await
            .with_context(|| format!("Box upload failed for {}", file_name))?;

        debug!("Box file id {} created for {}", uploaded.id, uploaded.name);

        Ok(())
    }
}
