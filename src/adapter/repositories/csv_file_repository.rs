//! CSV File Repository Implementation
//!
//! FileRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::file_repository::FileRepository;

/// ダミーCSVの固定ヘッダ
pub const DUMMY_CSV_HEADER: &str = "timestamp,sensor_a,sensor_b";

/// ファイルシステムベースのファイルリポジトリ
pub struct CsvFileRepository;

impl CsvFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// CSVファイルを発見する（内部実装）
    fn discover_csv_files_internal(dir: &str) -> Result<Vec<PathBuf>> {
        let expanded = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded.as_ref());

        if !dir.exists() {
            // 未作成というだけで走査が失敗してはならない
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
            return Ok(Vec::new());
        }

        let mut csv_files = Vec::new();

        for entry in WalkDir::new(&dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("csv") {
                csv_files.push(path.to_path_buf());
            }
        }

        csv_files.sort();

        info!("Found {} CSV files in {}", csv_files.len(), dir.display());

        Ok(csv_files)
    }

    /// ファイルを読み込む（内部実装）
    fn read_file_internal(path: &PathBuf) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// ダミーCSVを生成する（内部実装）
    fn create_dummy_files_internal(dir: &str, rows: usize, files: usize) -> Result<Vec<PathBuf>> {
        let expanded = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded.as_ref());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let mut rng = rand::thread_rng();
        let mut generated = Vec::with_capacity(files);

        for index in 0..files {
            let path = dir.join(format!("dummy_{:03}.csv", index));

            let mut content = String::from(DUMMY_CSV_HEADER);
            content.push('\n');

            let base_ts = Utc::now().timestamp();
            for row_idx in 0..rows {
                let sensor_a: f64 = rng.gen_range(0.0..1.0);
                let sensor_b: f64 = rng.gen_range(0.0..1.0);
                content.push_str(&format!(
                    "{},{:.5},{:.5}\n",
                    base_ts + row_idx as i64,
                    sensor_a,
                    sensor_b
                ));
            }

            fs::write(&path, content)
                .with_context(|| format!("Failed to write dummy file: {}", path.display()))?;
            generated.push(path);
        }

        Ok(generated)
    }
}

#[async_trait]
impl FileRepository for CsvFileRepository {
    async fn discover_csv_files(&self, dir: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.to_string();
        tokio::task::spawn_blocking(move || Self::discover_csv_files_internal(&dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_file_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn create_dummy_files(
        &self,
        dir: &str,
        rows: usize,
        files: usize,
    ) -> Result<Vec<PathBuf>> {
        let dir = dir.to_string();
        tokio::task::spawn_blocking(move || Self::create_dummy_files_internal(&dir, rows, files))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for CsvFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
