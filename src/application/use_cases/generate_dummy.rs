//! # Generate Dummy Use Case
//!
//! ダミーCSV生成ユースケース

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;

use crate::domain::repositories::file_repository::FileRepository;

/// ダミーCSV生成ユースケース
///
/// ローカル動作確認用の合成CSVファイルを生成する。
/// アップロードログやオーケストレーションには一切関与しない。
pub struct GenerateDummyUseCase<R: FileRepository> {
    file_repository: Arc<R>,
}

impl<R: FileRepository> GenerateDummyUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(file_repository: Arc<R>) -> Self {
        Self { file_repository }
    }

    /// ダミーCSVを生成する
    ///
    /// # Arguments
    ///
    /// * `dir` - 生成先ディレクトリ
    /// * `rows` - ファイルあたりのデータ行数
    /// * `files` - 生成するファイル数
    ///
    /// # Returns
    ///
    /// 生成したファイルのパスのリスト
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    pub async fn execute(&self, dir: &str, rows: usize, files: usize) -> Result<Vec<PathBuf>> {
        self.file_repository.create_dummy_files(dir, rows, files).await
    }
}
