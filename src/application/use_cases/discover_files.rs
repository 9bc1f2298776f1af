//! # Discover Files Use Case
//!
//! CSVファイル発見ユースケース

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;

use crate::domain::repositories::file_repository::FileRepository;

/// CSVファイル発見ユースケース
///
/// 指定されたディレクトリからアップロード候補のCSVファイルを発見する
pub struct DiscoverFilesUseCase<R: FileRepository> {
    file_repository: Arc<R>,
}

impl<R: FileRepository> DiscoverFilesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(file_repository: Arc<R>) -> Self {
        Self { file_repository }
    }

    /// CSVファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `dir` - 対象ディレクトリのパス
    ///
    /// # Returns
    ///
    /// ファイル名昇順にソートされたCSVファイルのパスのリスト
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, dir: &str) -> Result<Vec<PathBuf>> {
        self.file_repository.discover_csv_files(dir).await
    }
}
