//! 管理APIクライアント
//!
//! テナントごとのサブドメイン配下にあるREST APIへのアクセス。

pub mod auth;
pub mod client;

pub use auth::{login, Credentials};
pub use client::ApiClient;

use crate::error::Result;
use crate::product::ProductPage;
use std::future::Future;
use std::pin::Pin;

/// 商品一覧エンドポイント
///
/// `page` は1始まり。`page_size` 件以下の商品と総件数を返す。
pub trait ListingEndpoint: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        page: u32,
        page_size: u32,
    ) -> Pin<Box<dyn Future<Output = Result<ProductPage>> + Send + 'a>>;
}
