//! # Session Entities
//!
//! 認証の資格情報とセッショントークン

use std::fmt;

use crate::domain::error::PortalError;

/// ログイン資格情報
///
/// 認証の間だけ保持され、永続化されない。
/// 1回のバッチ実行が排他的に所有する
#[derive(Clone)]
pub struct Credentials {
    /// ポータルのユーザー名
    pub username: String,
    /// ポータルのパスワード
    pub password: String,
}

// パスワードがログや診断出力に漏れないよう手動実装
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// セッショントークン
///
/// ログイン成功時にポータルが発行する不透明な資格情報。
/// 認証後は読み取り専用で、バッチ実行の間は更新されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// 新しいセッショントークンを作成
    ///
    /// # Errors
    ///
    /// 値が空文字列の場合に`PortalError::Authentication`を返す
    pub fn new(value: impl Into<String>) -> Result<Self, PortalError> {
        let value = value.into();
        if value.is_empty() {
            return Err(PortalError::Authentication);
        }
        Ok(Self(value))
    }

    /// トークン値への参照を返す
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_new() {
        let token = SessionToken::new("abc123").unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_session_token_rejects_empty_value() {
        let result = SessionToken::new("");
        assert!(matches!(result, Err(PortalError::Authentication)));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let debug = format!("{:?}", credentials);
        assert!(debug.contains("user@example.com"));
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("hunter2"));
    }
}
