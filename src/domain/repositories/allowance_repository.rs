//! # Allowance Repository Trait
//!
//! ポータルへの認証とエントリ送信を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::allowance_entry::AllowanceEntry;
use crate::domain::entities::session::{Credentials, SessionToken};
use crate::domain::error::PortalError;

/// 手当リポジトリ
///
/// ポータルへの認証と1日分のエントリ送信を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AllowanceRepository: Send + Sync {
    /// ログインしてセッショントークンを取得する
    ///
    /// # Arguments
    ///
    /// * `credentials` - ログイン資格情報
    ///
    /// # Returns
    ///
    /// ポータルが発行したセッショントークン
    ///
    /// # Errors
    ///
    /// ログインの失敗やセッションクッキーの欠落でエラーを返す
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, PortalError>;

    /// 1日分の手当エントリを送信する
    ///
    /// # Arguments
    ///
    /// * `token` - 認証で取得したセッショントークン
    /// * `entry` - 送信するエントリ
    ///
    /// # Errors
    ///
    /// タイムアウトや異常ステータスでエラーを返す
    async fn submit_entry(
        &self,
        token: &SessionToken,
        entry: &AllowanceEntry,
    ) -> Result<(), PortalError>;
}
