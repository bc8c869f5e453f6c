//! # Plan Entries Use Case
//!
//! 送信対象エントリの計画ユースケース

use anyhow::{ensure, Result};

use crate::application::dto::batch_config::BatchConfig;
use crate::domain::entities::allowance_entry::AllowanceEntry;
use crate::domain::services::schedule::ScheduleService;

/// 送信対象エントリの計画ユースケース
///
/// 対象月の営業日から除外日を取り除き、手当エントリのリストを組み立てる。
/// 除外の適用はここで完結し、送信側は受け取ったリストをそのまま処理する
pub struct PlanEntriesUseCase;

impl PlanEntriesUseCase {
    /// 新しいユースケースを作成
    pub fn new() -> Self {
        Self
    }

    /// 対象月の送信対象エントリを組み立てる
    ///
    /// # Arguments
    ///
    /// * `config` - バッチ送信設定
    /// * `year` - 対象の年
    /// * `month` - 対象の月（1-12）
    /// * `excluded_days` - 除外する日番号のリスト
    ///
    /// # Returns
    ///
    /// 昇順の手当エントリのリスト
    ///
    /// # Errors
    ///
    /// 月が範囲外の場合にエラーを返す
    pub fn execute(
        &self,
        config: &BatchConfig,
        year: i32,
        month: u32,
        excluded_days: &[u32],
    ) -> Result<Vec<AllowanceEntry>> {
        ensure!((1..=12).contains(&month), "month must be between 1 and 12");

        let business_days = ScheduleService::business_days_of_month(year, month);
        let excluded = ScheduleService::excluded_dates(year, month, excluded_days);
        let target_days = ScheduleService::remove_same_days(business_days, &excluded);

        target_days
            .into_iter()
            .map(|date| {
                AllowanceEntry::new(date, &config.description, config.hours, config.minutes)
                    .map_err(Into::into)
            })
            .collect()
    }
}

impl Default for PlanEntriesUseCase {
    fn default() -> Self {
        Self::new()
    }
}
