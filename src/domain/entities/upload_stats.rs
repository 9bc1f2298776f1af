//! # UploadStats Entity
//!
//! アップロード実行の集計カウンタ

/// アップロード統計
///
/// 一回のオーケストレーション呼び出しが所有する可変カウンタ。
/// 実行終了時に呼び出し元へ報告されて破棄される。
#[derive(Debug, Clone, Default)]
pub struct UploadStats {
    /// アップロードを試みたファイル数（スキップ分を含まない）
    pub attempted: u32,
    /// ログ記載済みでスキップしたファイル数
    pub skipped: u32,
    /// アップロードに成功したファイル数
    pub succeeded: u32,
    /// リトライを使い切って失敗したファイル数
    pub failed: u32,
}

impl UploadStats {
    /// 新しい統計カウンタを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// アップロードが完全に成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// 失敗数が0の場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use boxsync::domain::entities::upload_stats::UploadStats;
    ///
    /// let mut stats = UploadStats::new();
    /// stats.succeeded = 3;
    /// assert!(stats.is_success());
    ///
    /// stats.failed = 1;
    /// assert!(!stats.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
