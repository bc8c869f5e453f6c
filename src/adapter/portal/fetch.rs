//! # Bounded Fetch
//!
//! 制限時間付きHTTPリクエスト実行

use log::debug;
use reqwest::{RequestBuilder, Response, StatusCode};
use tokio::time::timeout;

use super::timeout::TimeoutSpec;
use crate::domain::error::PortalError;

/// リダイレクトとして認識するステータスかどうか
pub fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// 制限時間付きでリクエストを送信する
///
/// タイマーと送信を同時に開始し、タイマーが先に発火した場合は
/// 処理中のリクエストを中断して`PortalError::Timeout`で失敗する。
/// 呼び出しごとに独自のタイマーを持つため、状態を共有せず再入可能
///
/// # Arguments
///
/// * `request` - 送信するリクエスト
/// * `limit` - タイムアウト指定
///
/// # Returns
///
/// 2xxまたは認識可能なリダイレクト（3xx）の応答
///
/// # Errors
///
/// それ以外のステータスは`PortalError::Http`、
/// 接続レベルの失敗は`PortalError::Transport`を返す
pub async fn send_bounded(
    request: RequestBuilder,
    limit: TimeoutSpec,
) -> Result<Response, PortalError> {
    let budget = limit.duration();

    let response = match timeout(budget, request.send()).await {
        Ok(sent) => sent.map_err(|e| PortalError::Transport(e.to_string()))?,
        Err(_) => return Err(PortalError::Timeout(budget)),
    };

    let status = response.status();
    debug!("portal responded with {}", status);

    if status.is_success() || is_redirect(status) {
        Ok(response)
    } else {
        Err(PortalError::Http(status_text(status)))
    }
}

/// ステータスの表示用テキスト（例: `"500 Internal Server Error"`）
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_redirect_recognized_statuses() {
        assert!(is_redirect(StatusCode::MOVED_PERMANENTLY));
        assert!(is_redirect(StatusCode::FOUND));
        assert!(is_redirect(StatusCode::SEE_OTHER));
        assert!(is_redirect(StatusCode::TEMPORARY_REDIRECT));
        assert!(is_redirect(StatusCode::PERMANENT_REDIRECT));
    }

    #[test]
    fn test_is_redirect_rejects_non_redirects() {
        assert!(!is_redirect(StatusCode::OK));
        assert!(!is_redirect(StatusCode::NOT_MODIFIED));
        assert!(!is_redirect(StatusCode::BAD_REQUEST));
        assert!(!is_redirect(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_status_text_includes_reason() {
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "500 Internal Server Error"
        );
        assert_eq!(status_text(StatusCode::FORBIDDEN), "403 Forbidden");
    }
}
