//! # Storage Repository Trait
//!
//! 外部ストレージへのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// ストレージリポジトリ
///
/// 外部ストレージへの単一ファイルアップロードを担当するリポジトリ。
/// コアはこの一機能のみに依存し、ベンダーAPIの詳細を知らない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// ファイルをフォルダにアップロードする
    ///
    /// # Arguments
    ///
    /// * `folder_id` - アップロード先フォルダの識別子
    /// * `file_name` - 保存するファイル名
    /// * `content` - ファイルの生バイト列
    ///
    /// # Errors
    ///
    /// アップロードに失敗した場合にエラーを返す
    async fn upload_file(&self, folder_id: &str, file_name: &str, content: Vec<u8>)
        -> Result<()>;
}
