//! # File Repository Trait
//!
//! ローカルCSVファイルの発見・読み込み・生成を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ファイルリポジトリ
///
/// アップロード候補となるCSVファイルの発見と読み込みを担当するリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ディレクトリ内のCSVファイルを発見する
    ///
    /// ディレクトリが存在しない場合は作成する（未作成というだけで
    /// 走査が失敗してはならない）。
    ///
    /// # Arguments
    ///
    /// * `dir` - 対象ディレクトリのパス
    ///
    /// # Returns
    ///
    /// ファイル名昇順にソートされたCSVファイルのパスのリスト
    async fn discover_csv_files(&self, dir: &str) -> Result<Vec<PathBuf>>;

    /// ファイルの内容をバイト列として読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 読み込むファイルのパス
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// テスト用のダミーCSVを生成する
    ///
    /// # Arguments
    ///
    /// * `dir` - 生成先ディレクトリ（無ければ作成）
    /// * `rows` - ファイルあたりのデータ行数
    /// * `files` - 生成するファイル数
    ///
    /// # Returns
    ///
    /// 生成したファイルのパスのリスト
    async fn create_dummy_files(&self, dir: &str, rows: usize, files: usize)
        -> Result<Vec<PathBuf>>;
}
