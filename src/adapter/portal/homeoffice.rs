//! # Homeoffice Submission
//!
//! 在宅勤務手当エントリの送信

use reqwest::header::COOKIE;
use reqwest::{Client, Url};

use super::cookies::serialize_cookie;
use super::fetch::send_bounded;
use super::join_path;
use super::login::SESSION_COOKIE;
use super::timeout::TimeoutSpec;
use crate::domain::entities::allowance_entry::AllowanceEntry;
use crate::domain::entities::session::SessionToken;
use crate::domain::error::PortalError;

/// 手当送信エンドポイントの相対パス
const HOMEOFFICE_PATH: &str = "/public/index.php/homeoffice";

/// 送信のタイムアウト
///
/// ポータル側の書き込み処理が遅いことがあるため長めの予算にする
const SUBMIT_TIMEOUT: &str = "20s";

/// 1日分の手当エントリをポータルに送信する
///
/// セッショントークンをCookieヘッダに載せ、エントリをフォーム
/// エンコードしてPOSTする。日付は`dd-MM-yyyy`形式で送信する
///
/// # Arguments
///
/// * `client` - リダイレクト追従を無効にしたHTTPクライアント
/// * `base_url` - ポータルのベースURL
/// * `token` - 認証で取得したセッショントークン
/// * `entry` - 送信するエントリ
///
/// # Errors
///
/// タイムアウトや異常ステータスでエラーを返す
pub async fn submit_homeoffice(
    client: &Client,
    base_url: &Url,
    token: &SessionToken,
    entry: &AllowanceEntry,
) -> Result<(), PortalError> {
    let endpoint = join_path(base_url, HOMEOFFICE_PATH)?;

    let appdate = entry.form_date();
    let hours = entry.hours().to_string();
    let minutes = entry.minutes().to_string();

    // 例: sts=1&appdate=11-05-2021&hour=8&min=0&desc=Acme+Corp&txyr=0
    let form = [
        ("sts", "1"),
        ("appdate", appdate.as_str()),
        ("hour", hours.as_str()),
        ("min", minutes.as_str()),
        ("desc", entry.description()),
        ("txyr", "0"),
    ];

    send_bounded(
        client
            .post(endpoint)
            .header(COOKIE, serialize_cookie(SESSION_COOKIE, token.as_str()))
            .form(&form),
        TimeoutSpec::from(SUBMIT_TIMEOUT),
    )
    .await?;

    Ok(())
}
