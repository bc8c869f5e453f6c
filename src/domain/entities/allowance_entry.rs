//! # AllowanceEntry Entity
//!
//! 在宅勤務手当エントリのドメインエンティティ

use chrono::NaiveDate;

use super::entry_date::EntryDate;
use crate::domain::error::PortalError;

/// ポータルのフォームが期待する日付形式
const FORM_DATE_PATTERN: &str = "%d-%m-%Y";

/// 1日分の在宅勤務手当エントリ
///
/// 構築後は不変のバリューオブジェクト。
/// 日付は時刻の意味を持たない単一の暦日に対応する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowanceEntry {
    date: NaiveDate,
    description: String,
    hours: u32,
    minutes: u32,
}

impl AllowanceEntry {
    /// 新しいエントリを作成
    ///
    /// 説明文は前後の空白を除去して保持する
    ///
    /// # Arguments
    ///
    /// * `date` - エントリの日付（ミリ秒・ISOテキスト・暦日のいずれか）
    /// * `description` - エントリの説明文
    /// * `hours` - 1日あたりの時間数
    /// * `minutes` - 1日あたりの分数
    ///
    /// # Errors
    ///
    /// 日付を暦日に解決できない場合に`PortalError::InvalidDate`を返す
    pub fn new(
        date: impl Into<EntryDate>,
        description: &str,
        hours: u32,
        minutes: u32,
    ) -> Result<Self, PortalError> {
        let date = date.into().resolve()?;

        Ok(Self {
            date,
            description: description.trim().to_string(),
            hours,
            minutes,
        })
    }

    /// エントリの暦日
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// エントリの説明文
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 1日あたりの時間数
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// 1日あたりの分数
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// フォーム送信用の`dd-MM-yyyy`形式（ゼロ埋め）
    pub fn form_date(&self) -> String {
        self.date.format(FORM_DATE_PATTERN).to_string()
    }
}
