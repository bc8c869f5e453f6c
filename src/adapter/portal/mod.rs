//! # Portal Adapter Modules
//!
//! ポータルHTTP統合のためのアダプターモジュール

use reqwest::Url;

use crate::domain::error::PortalError;

pub mod cookies;
pub mod fetch;
pub mod homeoffice;
pub mod login;
pub mod timeout;

/// ベースURLに相対パスを解決してエンドポイントを組み立てる
pub(crate) fn join_path(base_url: &Url, path: &str) -> Result<Url, PortalError> {
    base_url
        .join(path)
        .map_err(|e| PortalError::Transport(format!("invalid endpoint path {}: {}", path, e)))
}
