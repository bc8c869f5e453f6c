//! # HTTP Allowance Repository Implementation
//!
//! AllowanceRepositoryのポータルHTTP実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client, Url};

use crate::adapter::portal::homeoffice::submit_homeoffice;
use crate::adapter::portal::login::login;
use crate::domain::entities::allowance_entry::AllowanceEntry;
use crate::domain::entities::session::{Credentials, SessionToken};
use crate::domain::error::PortalError;
use crate::domain::repositories::allowance_repository::AllowanceRepository;

/// ポータルHTTPベースの手当リポジトリ
pub struct HttpAllowanceRepository {
    client: Client,
    base_url: Url,
}

impl HttpAllowanceRepository {
    /// 新しいリポジトリを作成
    ///
    /// セッションクッキーはログインのリダイレクト応答に載るため、
    /// リダイレクトを自動追従しないクライアントを構築する
    ///
    /// # Arguments
    ///
    /// * `base_url` - ポータルのベースURL
    ///
    /// # Errors
    ///
    /// ベースURLが不正な場合やクライアントの構築に失敗した場合にエラーを返す
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid portal base url: {}", base_url))?;

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .context("failed to build http client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AllowanceRepository for HttpAllowanceRepository {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, PortalError> {
        login(&self.client, &self.base_url, credentials).await
    }

    async fn submit_entry(
        &self,
        token: &SessionToken,
        entry: &AllowanceEntry,
    ) -> Result<(), PortalError> {
        submit_homeoffice(&self.client, &self.base_url, token, entry).await
    }
}
