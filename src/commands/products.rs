//! oxadm products コマンド
//!
//! 商品一覧を1ページずつ表示する。

use crate::api::{ApiClient, ListingEndpoint};
use crate::config::{ApiConfig, HttpConfig};
use crate::error::{AdminError, Result};
use crate::output::{self, TableOptions};
use crate::product::ProductPage;
use crate::session::SessionStore;
use chrono::Utc;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Page number (1-based)
    #[arg(long, short, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long, short = 's', default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Output the raw page as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, store: &SessionStore) -> Result<()> {
    if args.page == 0 {
        return Err(AdminError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }

    let session = store.require(Utc::now())?;
    let client = ApiClient::new(&HttpConfig::from_env(), &ApiConfig::from_env(), &session);

    let page = client.fetch_page(args.page, args.page_size).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page, &args);
    }

    Ok(())
}

fn print_page(page: &ProductPage, args: &Args) {
    if page.items.is_empty() {
        println!("No products on page {}", args.page);
    } else {
        let rows: Vec<_> = page.items.iter().collect();
        let table = output::product_table(
            &rows,
            TableOptions {
                offset: row_offset(args.page, args.page_size),
                query: None,
                use_color: output::stdout_supports_color(),
            },
        );
        println!("{table}");
    }

    println!(
        "{}",
        output::page_footer(page.total, args.page, page.page_count(args.page_size))
    );
}

/// `#` 列の開始オフセット
fn row_offset(page: u32, page_size: u32) -> usize {
    (page.saturating_sub(1) as usize) * page_size as usize
}
