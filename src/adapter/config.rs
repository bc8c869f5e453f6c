//! # Configuration
//!
//! 実行設定の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// 実行設定
///
/// CLIフラグで上書きできるデフォルト値を提供する。
/// 設定ファイルが無い場合は組み込みのデフォルトを使う
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// ポータルのベースURL
    pub base_url: String,
    /// 全エントリに付与する説明文
    pub description: String,
    /// 1エントリあたりの時間数
    pub hours: u32,
    /// 1エントリあたりの分数
    pub minutes: u32,
    /// 連続リクエスト間の待機ミリ秒
    pub throttle_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://mycontractingplus.com".to_string(),
            description: String::new(),
            hours: 8,
            minutes: 0,
            throttle_ms: 500,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 設定ファイルのパス（`~`は展開される）
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path))?;
        Ok(config)
    }
}
