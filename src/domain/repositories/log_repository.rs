//! # Log Repository Trait
//!
//! アップロードログの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

/// アップロードログ
///
/// どのファイルが既にアップロードされたかを追跡する集合。
/// メンバーシップは正規化された絶対パス文字列で判定する。
/// 一度追加されたエントリは実行中に削除されない。
#[derive(Debug, Clone, Default)]
pub struct UploadLog {
    uploaded: HashSet<String>,
}

impl UploadLog {
    /// 新しい空のアップロードログを作成
    pub fn new() -> Self {
        Self {
            uploaded: HashSet::new(),
        }
    }

    /// 永続化済みのパス集合からログを復元
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            uploaded: entries.into_iter().collect(),
        }
    }

    /// ファイルがアップロード済みかどうかを確認
    ///
    /// シンボリックリンクや相対セグメントを解決した上で判定するため、
    /// 同じ実体ファイルはどの参照形でも認識される。
    pub fn is_uploaded(&self, path: &Path) -> bool {
        self.uploaded.contains(&canonical_key(path))
    }

    /// アップロード済みファイルを追加（冪等、既存エントリはエラーにならない）
    pub fn mark_uploaded(&mut self, path: &Path) {
        self.uploaded.insert(canonical_key(path));
    }

    /// 記録済みエントリ数を返す
    pub fn len(&self) -> usize {
        self.uploaded.len()
    }

    /// ログが空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.uploaded.is_empty()
    }

    /// 昇順にソートしたエントリ一覧を返す（決定的な永続化出力用）
    pub fn sorted_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = self.uploaded.iter().cloned().collect();
        entries.sort();
        entries
    }
}

/// パスを正規化した絶対パス文字列に変換する
///
/// 実体が存在するパスは canonicalize でシンボリックリンクまで解決する。
/// まだ存在しないパスは絶対パス化のみ行い、判定がエラーにならないようにする。
pub fn canonical_key(path: &Path) -> String {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// ログリポジトリ
///
/// アップロードログの永続化を担当するリポジトリ
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// ログを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ログファイルのパス
    ///
    /// # Returns
    ///
    /// アップロードログ（ファイルが無い・壊れている場合は空のログ）
    ///
    /// # Errors
    ///
    /// 既存ファイルの読み込み自体に失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<UploadLog>;

    /// ログを保存する
    ///
    /// # Arguments
    ///
    /// * `path` - ログファイルのパス
    /// * `log` - 保存するアップロードログ
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, log: &UploadLog) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_new_log_empty() {
        let log = UploadLog::new();

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_mark_and_check() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        fs::write(&file, "x").unwrap();

        let mut log = UploadLog::new();
        assert!(!log.is_uploaded(&file));

        log.mark_uploaded(&file);
        assert!(log.is_uploaded(&file));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_mark_uploaded_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        fs::write(&file, "x").unwrap();

        let mut log = UploadLog::new();
        log.mark_uploaded(&file);
        log.mark_uploaded(&file);

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_same_file_different_reference() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        fs::write(&file, "x").unwrap();

        let mut log = UploadLog::new();
        log.mark_uploaded(&file);

        // 相対セグメントを含む別表記でも同じファイルとして認識される
        let indirect = temp_dir.path().join(".").join("a.csv");
        assert!(log.is_uploaded(&indirect));
    }

    #[test]
    fn test_from_entries_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        fs::write(&file, "x").unwrap();

        let mut log = UploadLog::new();
        log.mark_uploaded(&file);

        let restored = UploadLog::from_entries(log.sorted_entries());
        assert!(restored.is_uploaded(&file));
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn test_sorted_entries_ascending() {
        let log = UploadLog::from_entries(vec![
            "/data/b.csv".to_string(),
            "/data/a.csv".to_string(),
            "/data/c.csv".to_string(),
        ]);

        let entries = log.sorted_entries();
        assert_eq!(entries, vec!["/data/a.csv", "/data/b.csv", "/data/c.csv"]);
    }

    #[test]
    fn test_canonical_key_nonexistent_path_is_absolute() {
        let key = canonical_key(&PathBuf::from("does-not-exist.csv"));
        assert!(Path::new(&key).is_absolute());
    }
}
