//! # Schedule Service
//!
//! 営業日カレンダーの計算

use chrono::{Datelike, NaiveDate, Weekday};

/// スケジュールサービス
///
/// 対象月の営業日と除外日を計算するビジネスロジック
pub struct ScheduleService;

impl ScheduleService {
    /// 対象月の全営業日（月〜金）を昇順で返す
    ///
    /// # Arguments
    ///
    /// * `year` - 対象の年
    /// * `month` - 対象の月（1-12）
    ///
    /// # Returns
    ///
    /// 週末を除いた全ての日付のリスト
    pub fn business_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
        (1..=31)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .collect()
    }

    /// 日番号のリストを対象月の日付に変換する
    ///
    /// 月に存在しない日番号（例: 2月の30日）は無視する
    ///
    /// # Arguments
    ///
    /// * `year` - 対象の年
    /// * `month` - 対象の月（1-12）
    /// * `days` - 日番号のリスト（例: `[12, 20, 21]`）
    pub fn excluded_dates(year: i32, month: u32, days: &[u32]) -> Vec<NaiveDate> {
        days.iter()
            .filter_map(|&day| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    }

    /// 除外リストと同じ暦日を取り除く
    ///
    /// 元のリストの順序は維持される
    ///
    /// # Arguments
    ///
    /// * `dates` - 元の日付リスト
    /// * `excluded` - 除外する日付のリスト
    pub fn remove_same_days(dates: Vec<NaiveDate>, excluded: &[NaiveDate]) -> Vec<NaiveDate> {
        dates
            .into_iter()
            .filter(|date| !excluded.contains(date))
            .collect()
    }
}
