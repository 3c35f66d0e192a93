//! oxadm search コマンド
//!
//! 全商品を取得してから、商品名でローカルに絞り込む。

use crate::api::ApiClient;
use crate::catalog;
use crate::config::{ApiConfig, HttpConfig};
use crate::error::Result;
use crate::output::{self, TableOptions};
use crate::product::Product;
use crate::search::search_products;
use crate::session::SessionStore;
use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Text to search for in product names (empty lists everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Show at most this many results
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, store: &SessionStore) -> Result<()> {
    let session = store.require(Utc::now())?;
    let client = ApiClient::new(&HttpConfig::from_env(), &ApiConfig::from_env(), &session);

    let all_products = if std::io::stderr().is_terminal() {
        let spinner = fetch_spinner();
        let fetched = catalog::fetch_all_with_progress(&client, |page, count| {
            spinner.set_message(format!("Fetching products... {count} loaded (page {page})"));
        })
        .await;
        spinner.finish_and_clear();
        fetched?
    } else {
        catalog::fetch_all(&client).await?
    };
    tracing::debug!(count = all_products.len(), "catalog loaded");

    let results = search_products(&all_products, &args.query);
    let shown = limited(&results, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No products found");
    } else {
        let table = output::product_table(
            shown,
            TableOptions {
                offset: 0,
                query: Some(&args.query),
                use_color: output::stdout_supports_color(),
            },
        );
        println!("{table}");
    }

    if !args.query.trim().is_empty() {
        println!("{}", output::found_summary(results.len()));
    } else {
        println!("Total {} product(s)", all_products.len());
    }
    if shown.len() < results.len() {
        println!("Showing first {} (use --limit to change)", shown.len());
    }

    Ok(())
}

fn limited<'r, 'a>(results: &'r [&'a Product], limit: Option<usize>) -> &'r [&'a Product] {
    match limit {
        Some(n) if n < results.len() => &results[..n],
        _ => results,
    }
}

fn fetch_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Fetching products...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
