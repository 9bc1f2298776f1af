//! # Upload Files Use Case
//!
//! アップロードのオーケストレーションとファイル単位のリトライ

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use log::{error, info, warn};
use tokio::time::sleep;

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::upload_stats::UploadStats;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::log_repository::LogRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::retry::calculate_retry_delay;

/// アップロードユースケース
///
/// 候補ファイルを順に処理し、アップロードログを参照して重複を
/// スキップし、失敗したファイルは指数バックオフ付きでリトライする。
/// 一ファイルの失敗がバッチ全体を中断することはない。
pub struct UploadFilesUseCase<F: FileRepository, S: StorageRepository, L: LogRepository> {
    file_repository: Arc<F>,
    storage_repository: Arc<S>,
    log_repository: Arc<L>,
}

impl<F: FileRepository, S: StorageRepository, L: LogRepository> UploadFilesUseCase<F, S, L> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    /// * `storage_repository` - ストレージリポジトリ
    /// * `log_repository` - ログリポジトリ
    pub fn new(
        file_repository: Arc<F>,
        storage_repository: Arc<S>,
        log_repository: Arc<L>,
    ) -> Self {
        Self {
            file_repository,
            storage_repository,
            log_repository,
        }
    }

    /// 候補ファイル群をアップロードしてログを更新する
    ///
    /// # Arguments
    ///
    /// * `files` - アップロード候補（ソート済み）のパスのリスト
    /// * `config` - アップロード設定
    ///
    /// # Returns
    ///
    /// 実行結果の統計カウンタ
    ///
    /// # Errors
    ///
    /// ログの読み込みまたは保存に失敗した場合にエラーを返す。
    /// 個々のファイルのアップロード失敗はエラーではなく `failed` に集計される。
    pub async fn execute(&self, files: &[PathBuf], config: &UploadConfig) -> Result<UploadStats> {
        let mut log = self.log_repository.load(&config.log_path).await?;
        let mut stats = UploadStats::new();

        for path in files {
            let file_name = file_name_of(path);

            if log.is_uploaded(path) {
                stats.skipped += 1;
                info!("Skipping {} (already uploaded)", file_name);
                continue;
            }

            stats.attempted += 1;
            match self
                .upload_with_retry(&config.folder_id, path, &file_name, config.max_retries)
                .await
            {
                Ok(()) => {
                    log.mark_uploaded(path);
                    stats.succeeded += 1;
                    info!("Uploaded {}", file_name);
                }
                Err(e) => {
                    stats.failed += 1;
                    error!("Failed to upload {}: {:#}", file_name, e);
                }
            }
        }

        // 成功の有無に関わらずログの保存は一回だけ
        self.log_repository.save(&config.log_path, &log).await?;

        Ok(stats)
    }

    /// 単一ファイルのアップロードを指数バックオフ付きでリトライする
    ///
    /// 総試行回数は `max_retries + 1`。試行のたびにファイルを
    /// 先頭から読み直す（部分レジュームなし）。
    async fn upload_with_retry(
        &self,
        folder_id: &str,
        path: &Path,
        file_name: &str,
        max_retries: u32,
    ) -> Result<()> {
        let mut failures = 0u32;

        loop {
            match self.attempt_upload(folder_id, file_name, path).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    failures += 1;
                    if failures > max_retries {
                        return Err(e);
                    }

                    let delay = calculate_retry_delay(failures);
                    warn!(
                        "Upload of {} failed (attempt {}), retrying in {}ms: {:#}",
                        file_name, failures, delay, e
                    );
                    sleep(Duration::from_millis(delay)).await;
                }
            }
        }
    }

    /// 一回分のアップロード試行（読み込みエラーも失敗として扱う）
    async fn attempt_upload(&self, folder_id: &str, file_name: &str, path: &Path) -> Result<()> {
        let content = self.file_repository.read_file(path).await?;
        self.storage_repository
            .upload_file(folder_id, file_name, content)
            .await
    }
}

/// ログ出力用のファイル名を取り出す
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
