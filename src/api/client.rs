//! 商品一覧APIクライアント

use crate::api::ListingEndpoint;
use crate::config::{ApiConfig, HttpConfig};
use crate::error::{AdminError, Result};
use crate::product::ProductPage;
use crate::session::Session;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

const VARIATIONS_PATH: &str = "/variations";

/// テナントAPIクライアント
///
/// ベースURLとトークンは生成時にセッションから一度だけ解決する。
pub struct ApiClient {
    http: Client,
    base_url: String,
    authorization: String,
}

impl ApiClient {
    pub fn new(config: &HttpConfig, api: &ApiConfig, session: &Session) -> Self {
        Self {
            http: config.build_client(),
            base_url: session.base_url(api),
            authorization: session.bearer(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 商品一覧URL
    fn variations_url(&self) -> String {
        format!("{}{}", self.base_url, VARIATIONS_PATH)
    }

    async fn get_page(&self, page: u32, page_size: u32) -> Result<ProductPage> {
        let url = self.variations_url();
        tracing::debug!(%url, page, page_size, "requesting product page");

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("pageSize", page_size)])
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdminError::Api { status, message });
        }

        Ok(response.json::<ProductPage>().await?)
    }
}

impl ListingEndpoint for ApiClient {
    fn fetch_page<'a>(
        &'a self,
        page: u32,
        page_size: u32,
    ) -> Pin<Box<dyn Future<Output = Result<ProductPage>> + Send + 'a>> {
        Box::pin(self.get_page(page, page_size))
    }
}
