use crate::product::Product;
use crate::search::highlight;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// 標準出力に色を付けるかどうか
pub fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// クエリ一致箇所を強調した文字列
pub fn render_highlight(text: &str, query: &str, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    highlight(text, query)
        .iter()
        .map(|s| {
            if s.matched {
                s.text.black().on_yellow().to_string()
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

/// 商品テーブルの描画オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions<'q> {
    /// 行番号の開始オフセット（`#` 列は offset + 1 から）
    pub offset: usize,
    /// 強調するクエリ
    pub query: Option<&'q str>,
    pub use_color: bool,
}

/// 商品一覧テーブル
pub fn product_table(products: &[&Product], options: TableOptions<'_>) -> Table {
    let query = options.query.unwrap_or("");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "ID", "Name", "SKU", "Price"]);

    for (index, product) in products.iter().enumerate() {
        let sku = product
            .sku
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| render_highlight(s, query, options.use_color))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(options.offset + index + 1).set_alignment(CellAlignment::Right),
            Cell::new(product.id),
            Cell::new(render_highlight(product.display_name(), query, options.use_color)),
            Cell::new(sku),
            Cell::new(product.display_price()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// ページ一覧のフッター
pub fn page_footer(total: u64, page: u32, page_count: u64) -> String {
    format!(
        "Total {} item(s) · page {} of {}",
        total,
        page,
        page_count.max(1)
    )
}

/// 検索件数の表示
pub fn found_summary(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("Found {} {}", count, noun)
}
