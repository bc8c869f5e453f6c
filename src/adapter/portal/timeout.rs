//! # Request Timeout
//!
//! リクエストタイムアウトの表現と解釈

use std::time::Duration;

/// デフォルトのタイムアウト（ミリ秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// リクエストタイムアウトの指定
///
/// ミリ秒の整数か`"10s"`のような時間テキストで指定する。
/// 未指定や解釈できないテキストはデフォルト（10秒）に落ちる
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeoutSpec {
    /// ミリ秒指定
    Millis(u64),
    /// `"500ms"` / `"10s"` / `"2m"` 形式のテキスト
    Text(String),
    /// 未指定（デフォルトを使う）
    Default,
}

impl TimeoutSpec {
    /// 実際の待機時間に解決する
    pub fn duration(&self) -> Duration {
        match self {
            TimeoutSpec::Millis(ms) => Duration::from_millis(*ms),
            TimeoutSpec::Text(text) => parse_duration_text(text)
                .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            TimeoutSpec::Default => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl From<u64> for TimeoutSpec {
    fn from(ms: u64) -> Self {
        TimeoutSpec::Millis(ms)
    }
}

impl From<&str> for TimeoutSpec {
    fn from(text: &str) -> Self {
        TimeoutSpec::Text(text.to_string())
    }
}

/// `"500ms"` / `"10s"` / `"2m"` 形式のテキストを解釈する
///
/// 単位なしの数字列はミリ秒として扱う
fn parse_duration_text(text: &str) -> Option<Duration> {
    let text = text.trim();

    if let Some(value) = text.strip_suffix("ms") {
        return value.trim().parse::<u64>().ok().map(Duration::from_millis);
    }
    if let Some(value) = text.strip_suffix('s') {
        return value.trim().parse::<u64>().ok().map(Duration::from_secs);
    }
    if let Some(value) = text.strip_suffix('m') {
        return value
            .trim()
            .parse::<u64>()
            .ok()
            .map(|minutes| Duration::from_secs(minutes * 60));
    }
    text.parse::<u64>().ok().map(Duration::from_millis)
}
