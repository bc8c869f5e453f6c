//! # EntryDate
//!
//! エントリ日付の分類と正規化

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::error::PortalError;

/// エントリ日付の入力表現
///
/// 入力形式ごとにバリアントを持つタグ付きユニオン。
/// テキストの分類は構造的な述語を順に適用する：
/// 数字のみの文字列はエポックミリ秒、それ以外の文字列はISO-8601テキスト、
/// 構造化された暦日はそのまま通す。どの形式としても解釈できない入力は
/// 解決時に失敗し、既定の日付に置き換えられることはない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDate {
    /// エポックからのミリ秒
    EpochMillis(i64),
    /// ISO-8601形式のテキスト
    Iso(String),
    /// 構造化された暦日
    Calendar(NaiveDate),
}

impl EntryDate {
    /// テキスト入力を分類する
    ///
    /// 空白を除去した上で数字のみなら`EpochMillis`、
    /// それ以外は`Iso`として扱う
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(ms) = trimmed.parse::<i64>() {
                return EntryDate::EpochMillis(ms);
            }
        }
        EntryDate::Iso(trimmed.to_string())
    }

    /// 暦日に解決する
    ///
    /// エポックミリ秒はUTCの暦日として解釈する
    ///
    /// # Errors
    ///
    /// どの形式としても解釈できない場合に`PortalError::InvalidDate`を返す
    pub fn resolve(&self) -> Result<NaiveDate, PortalError> {
        match self {
            EntryDate::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| PortalError::InvalidDate(ms.to_string())),
            EntryDate::Iso(text) => {
                parse_iso_date(text).ok_or_else(|| PortalError::InvalidDate(text.clone()))
            }
            EntryDate::Calendar(date) => Ok(*date),
        }
    }
}

impl From<i64> for EntryDate {
    fn from(ms: i64) -> Self {
        EntryDate::EpochMillis(ms)
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        EntryDate::Calendar(date)
    }
}

impl From<&str> for EntryDate {
    fn from(text: &str) -> Self {
        EntryDate::from_text(text)
    }
}

/// ISO-8601テキストを暦日として解釈する
///
/// タイムゾーン付きタイムスタンプ、秒までのタイムスタンプ、
/// 日付のみの3形式を順に試す
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
