//! 商品モデル
//!
//! 一覧APIが返す商品レコードとページ。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 商品レコード
///
/// 既知フィールドはすべて任意。未知のフィールドは `extra` にそのまま保持する。
/// `name` / `sku` / `description` / `price` の型が合わなくてもレコードは失敗せず、
/// そのフィールドだけ未設定になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            sku: None,
            price: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// 表示名（未設定なら空文字列）
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// 表示用の価格（`$12.50` 形式、未設定または0なら `-`）
    pub fn display_price(&self) -> String {
        match self.price {
            Some(price) if price != 0.0 => format!("${:.2}", price),
            _ => "-".to_string(),
        }
    }
}

/// 文字列はそのまま、数値は文字列化し、それ以外は `None`
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// 数値または数値文字列（`"12.50"`）を受け付け、それ以外は `None`
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

/// 一覧APIのレスポンス1ページ分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ProductPage {
    /// 総ページ数（`page_size` が0なら0）
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
