//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

use crate::adapter::box_api::client::BoxApiClient;
use crate::adapter::config::Settings;
use crate::adapter::repositories::box_storage_repository::BoxStorageRepository;
use crate::adapter::repositories::csv_file_repository::CsvFileRepository;
use crate::adapter::repositories::json_log_repository::JsonLogRepository;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::discover_files::DiscoverFilesUseCase;
use crate::application::use_cases::generate_dummy::GenerateDummyUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::repositories::log_repository::LogRepository;

use super::cli::{Args, Command};

/// CSV Upload Workflow
pub struct CsvUploadWorkflow {
    settings: Settings,
    file_repository: Arc<CsvFileRepository>,
    log_repository: Arc<JsonLogRepository>,
    discover_use_case: Arc<DiscoverFilesUseCase<CsvFileRepository>>,
    generate_use_case: Arc<GenerateDummyUseCase<CsvFileRepository>>,
}

impl CsvUploadWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(settings: Settings) -> Self {
        // Repository implementations
        let file_repo = Arc::new(CsvFileRepository::new());
        let log_repo = Arc::new(JsonLogRepository::new());

        // Use Cases construction
        let discover_use_case = Arc::new(DiscoverFilesUseCase::new(file_repo.clone()));
        let generate_use_case = Arc::new(GenerateDummyUseCase::new(file_repo.clone()));

        Self {
            settings,
            file_repository: file_repo,
            log_repository: log_repo,
            discover_use_case,
            generate_use_case,
        }
    }

    /// Execute the selected command and return the process exit code
    pub async fn execute(&self, args: Args) -> Result<i32> {
        match args.command {
            Command::MakeDummy { rows, files, dir } => {
                self.run_make_dummy(rows, files, dir).await
            }
            Command::List { dir } => self.run_list(dir).await,
            Command::Upload { limit } => self.run_upload(limit).await,
        }
    }

    /// ダミーCSVを生成する
    async fn run_make_dummy(&self, rows: usize, files: usize, dir: Option<String>) -> Result<i32> {
        let dir = dir.unwrap_or_else(|| self.settings.local_data_dir.clone());

        let created = self.generate_use_case.execute(&dir, rows, files).await?;
        for path in &created {
            info!("Created {}", path.display());
        }
        info!(
            "Dummy generation completed: {} file(s) under {}",
            created.len(),
            dir
        );

        Ok(0)
    }

    /// CSVファイルとアップロード状況を一覧表示する
    async fn run_list(&self, dir: Option<String>) -> Result<i32> {
        let dir = dir.unwrap_or_else(|| self.settings.local_data_dir.clone());

        let files = self.discover_use_case.execute(&dir).await?;
        if files.is_empty() {
            println!("No CSV files found in {}", dir);
            return Ok(0);
        }

        let log = self
            .log_repository
            .load(&self.settings.upload_log_path)
            .await?;

        for path in &files {
            let status = if log.is_uploaded(path) {
                "uploaded"
            } else {
                "pending"
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("{}\t{}", name, status);
        }

        Ok(0)
    }

    /// 未アップロードのCSVファイルをBoxに送る
    async fn run_upload(&self, limit: Option<usize>) -> Result<i32> {
        let mut files = self
            .discover_use_case
            .execute(&self.settings.local_data_dir)
            .await?;

        if files.is_empty() {
            info!("No CSV files found in {}", self.settings.local_data_dir);
            return Ok(0);
        }

        if let Some(limit) = limit {
            files.truncate(limit);
        }

        info!("Found {} CSV files. Starting upload...", files.len());

        // アップロード時のみBoxクライアントを組み立てる
        let client = BoxApiClient::new(self.settings.access_token.clone());
        let storage_repo = Arc::new(BoxStorageRepository::new(client));
        let upload_use_case = UploadFilesUseCase::new(
            self.file_repository.clone(),
            storage_repo,
            self.log_repository.clone(),
        );

        let config = UploadConfig::new(
            self.settings.upload_folder_id.clone(),
            self.settings.local_data_dir.clone(),
            self.settings.upload_log_path.clone(),
            self.settings.max_retries,
        );

        let stats = upload_use_case.execute(&files, &config).await?;

        info!(
            "Upload done: attempted={}, succeeded={}, failed={}, skipped={}",
            stats.attempted, stats.succeeded, stats.failed, stats.skipped
        );

        if !stats.is_success() {
            error!("Some files failed to upload. See logs above.");
            return Ok(1);
        }

        Ok(0)
    }
}
