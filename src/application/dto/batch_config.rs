//! # Batch Configuration DTO
//!
//! バッチ送信設定のData Transfer Object

use std::time::Duration;

/// バッチ送信設定
///
/// 1回のバッチ実行に必要な設定情報。
/// CLIと設定ファイルから明示的に組み立てられ、
/// グローバルな可変状態は持たない
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// ポータルのベースURL
    pub base_url: String,
    /// 全エントリに付与する説明文
    pub description: String,
    /// 1エントリあたりの時間数
    pub hours: u32,
    /// 1エントリあたりの分数
    pub minutes: u32,
    /// 連続リクエスト間の待機ミリ秒（0で無効）
    pub throttle_ms: u64,
}

impl BatchConfig {
    /// 新しいバッチ送信設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use allowsync::application::dto::batch_config::BatchConfig;
    ///
    /// let config = BatchConfig::new(
    ///     "https://mycontractingplus.com".to_string(),
    ///     "Acme Corp".to_string(),
    ///     8,    // 時間
    ///     0,    // 分
    ///     500,  // スロットル（ミリ秒）
    /// );
    ///
    /// assert_eq!(config.hours, 8);
    /// assert!(config.throttle().is_some());
    /// ```
    pub fn new(
        base_url: String,
        description: String,
        hours: u32,
        minutes: u32,
        throttle_ms: u64,
    ) -> Self {
        Self {
            base_url,
            description,
            hours,
            minutes,
            throttle_ms,
        }
    }

    /// 有効なスロットル時間を返す
    ///
    /// # Returns
    ///
    /// 設定値が正の場合はその待機時間、0の場合は`None`
    pub fn throttle(&self) -> Option<Duration> {
        if self.throttle_ms > 0 {
            Some(Duration::from_millis(self.throttle_ms))
        } else {
            None
        }
    }
}
