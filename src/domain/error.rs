//! # Domain Errors
//!
//! ポータル連携のエラー分類

use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

/// ポータル連携で発生するエラー
///
/// バッチ実行中のエラーは全て致命的であり、自動リトライは行わない
#[derive(Debug, Error)]
pub enum PortalError {
    /// リクエストが制限時間を超過し、処理中の送信が中断された
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// ポータルが成功でもリダイレクトでもないステータスを返した
    #[error("portal returned an error status: {0}")]
    Http(String),

    /// ログイン自体は通ったが応答にセッションクッキーが無かった
    #[error("login response did not contain a session cookie")]
    Authentication,

    /// 1日分のエントリ送信に失敗した
    #[error("failed to submit allowance for {date}")]
    Submission {
        /// 失敗した日付
        date: NaiveDate,
        /// 元になったエラー（タイムアウトまたはHTTPエラー）
        #[source]
        source: Box<PortalError>,
    },

    /// エントリ日付を送信形式に正規化できなかった
    #[error("invalid or unparseable entry date: {0}")]
    InvalidDate(String),

    /// 接続レベルの失敗
    #[error("transport error: {0}")]
    Transport(String),
}

impl PortalError {
    /// 送信失敗を失敗した日付で包む
    pub fn submission(date: NaiveDate, source: PortalError) -> Self {
        PortalError::Submission {
            date,
            source: Box::new(source),
        }
    }
}
