//! # Portal Login
//!
//! ポータルへのフォームログインとセッション取得

use log::info;
use reqwest::header::SET_COOKIE;
use reqwest::{Client, Url};

use super::cookies::extract_cookie;
use super::fetch::send_bounded;
use super::join_path;
use super::timeout::TimeoutSpec;
use crate::domain::entities::session::{Credentials, SessionToken};
use crate::domain::error::PortalError;

/// ログインエンドポイントの相対パス
const LOGIN_PATH: &str = "/public/index.php/auth/login";

/// ログインのタイムアウト
///
/// ログインは高速であることが期待されるため短い予算にする。
/// 遅いログインは失敗として扱い、リトライしない
const LOGIN_TIMEOUT: &str = "5s";

/// セッションクッキーの名前
pub const SESSION_COOKIE: &str = "PHPSESSID";

/// ポータルにログインしてセッショントークンを取得する
///
/// ログイン成功時、ポータルはリダイレクト応答にセッションクッキーを
/// 付けて返す。クッキーはリダイレクト応答そのものに載るため、
/// リダイレクトを自動追従しないクライアントで呼び出すこと
///
/// # Arguments
///
/// * `client` - リダイレクト追従を無効にしたHTTPクライアント
/// * `base_url` - ポータルのベースURL
/// * `credentials` - ログイン資格情報
///
/// # Errors
///
/// 応答にセッションクッキーが無い場合は`PortalError::Authentication`、
/// タイムアウトや異常ステータスはそのまま伝播する
pub async fn login(
    client: &Client,
    base_url: &Url,
    credentials: &Credentials,
) -> Result<SessionToken, PortalError> {
    let endpoint = join_path(base_url, LOGIN_PATH)?;

    // ポータルのログインフォームは空の補助フィールドを要求する
    let form = [
        ("username", credentials.username.as_str()),
        ("userpassword", credentials.password.as_str()),
        ("submit", ""),
        ("status", ""),
    ];

    let response = send_bounded(
        client.post(endpoint).form(&form),
        TimeoutSpec::from(LOGIN_TIMEOUT),
    )
    .await?;

    let token = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| extract_cookie(header, SESSION_COOKIE))
        .ok_or(PortalError::Authentication)?;

    info!("login succeeded, session cookie acquired");

    SessionToken::new(token)
}
