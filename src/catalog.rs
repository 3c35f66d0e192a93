//! 全商品の取得
//!
//! 一覧エンドポイントを固定サイズで順にページングし、全商品を1つの列にまとめる。
//! 検索ビューはこの結果に対してローカルで絞り込みを行う。

use crate::api::ListingEndpoint;
use crate::error::Result;
use crate::product::Product;

/// 全件取得時のページサイズ
pub const PAGE_SIZE: u32 = 100;

/// 全商品を取得する
///
/// 1ページ目から順に `PAGE_SIZE` 件ずつ取得し、返却件数がちょうど `PAGE_SIZE` の間だけ
/// 続ける。短いページ（0件を含む）で終了し、総件数は見ない。
/// いずれかのページでエラーになった場合はそのまま返し、途中結果は捨てる。
pub async fn fetch_all(endpoint: &dyn ListingEndpoint) -> Result<Vec<Product>> {
    fetch_all_with_progress(endpoint, |_, _| {}).await
}

/// 全商品を取得する（ページ取得ごとに `(取得済みページ数, 累計件数)` を通知）
pub async fn fetch_all_with_progress<F>(
    endpoint: &dyn ListingEndpoint,
    mut on_page: F,
) -> Result<Vec<Product>>
where
    F: FnMut(u32, usize),
{
    let mut products = Vec::new();
    let mut page = 1;

    loop {
        let batch = endpoint.fetch_page(page, PAGE_SIZE).await?;
        let received = batch.items.len();
        products.extend(batch.items);

        tracing::debug!(page, received, accumulated = products.len(), "fetched page");
        on_page(page, products.len());

        if received != PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }

    Ok(products)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
