//! Upload Retry Policy
//!
//! リトライ遅延の計算

/// 初回リトライまでの待機時間
pub const INITIAL_RETRY_DELAY_MS: u64 = 500;

/// Calculate retry delay with exponential backoff
///
/// 失敗のたびに遅延を倍にする。試行回数自体が `max_retries` で
/// 制限されるため、遅延には上限を設けない。
pub fn calculate_retry_delay(failure_count: u32) -> u64 {
    INITIAL_RETRY_DELAY_MS * (1u64 << failure_count.saturating_sub(1))
}
