//! 商品検索
//!
//! 取得済みの全商品を商品名でローカルに絞り込む。
//! 前方一致を部分一致より上位に並べ、同順位内は商品名順にする。

use crate::product::Product;
use regex::RegexBuilder;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 一致の種類（前方一致が上位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Prefix,
    Contains,
}

/// 正規化済みクエリに対する商品名の一致種類
///
/// `normalized_query` は小文字化・トリム済みであること。
pub fn classify(name: &str, normalized_query: &str) -> Option<MatchKind> {
    let name = name.to_lowercase();
    if name.starts_with(normalized_query) {
        Some(MatchKind::Prefix)
    } else if name.contains(normalized_query) {
        Some(MatchKind::Contains)
    } else {
        None
    }
}

/// クエリで商品を絞り込み、一致順に並べる
///
/// - クエリが空（空白のみを含む）なら全件を元の順序のまま返す
/// - 大文字小文字を区別せず、前方一致 → 部分一致の順
/// - 同じ一致種類の中では商品名順（安定ソート）
/// - 商品名がない商品は空文字列として扱う
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return products.iter().collect();
    }

    let mut ranked: Vec<(MatchKind, SortKey, &Product)> = products
        .iter()
        .filter_map(|p| {
            let name = p.display_name();
            classify(name, &normalized).map(|kind| (kind, SortKey::new(name), p))
        })
        .collect();

    // 安定ソートなので同名の商品は元の順序を保つ
    ranked.sort_by(|(ka, a, _), (kb, b, _)| ka.cmp(kb).then_with(|| a.cmp(b)));

    ranked.into_iter().map(|(_, _, p)| p).collect()
}

/// 商品名の比較
///
/// 3段階で比較する。
///
/// 1. 基底文字: 分音記号と大文字小文字を無視する（`É` と `e`、`ё` と `е` は同じ）。
///    記号・空白 < 数字 < 文字 の順
/// 2. 分音記号: 記号のない文字が先（"resume" < "résumé"）
/// 3. 大文字小文字: 小文字が先（"apple" < "Apple" < "APPLE"）
///
/// 後の段階は前の段階が全体で等しい場合にだけ効く。
pub fn compare_names(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}

/// 商品名の並べ替えキー（フィールドの宣言順が比較の優先順）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    base: Vec<(CharClass, char)>,
    marks: Vec<Vec<char>>,
    case: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Letter,
}

impl SortKey {
    fn new(name: &str) -> Self {
        let mut key = SortKey {
            base: Vec::new(),
            marks: Vec::new(),
            case: Vec::new(),
        };

        for c in name.nfd() {
            if is_combining_mark(c) {
                // 先頭の結合文字は直前の基底文字がないので単独の記号として扱う
                if let Some(marks) = key.marks.last_mut() {
                    marks.push(c);
                    continue;
                }
            }
            for lower in c.to_lowercase() {
                key.base.push((CharClass::of(lower), lower));
                key.marks.push(Vec::new());
                key.case.push(c.is_uppercase());
            }
        }

        key
    }
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

/// ハイライト用の区間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }
}

/// テキストをクエリの出現箇所で区切る
///
/// 大文字小文字を区別せず、すべての出現箇所を `matched` にする。
/// クエリかテキストが空なら、テキスト全体を1つの非一致区間として返す。
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let query = query.trim();
    if query.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return vec![Segment::plain(text)],
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment {
            text: m.as_str(),
            matched: true,
        });
        last = m.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

#[cfg(test)]
#[path = "search_proptests.rs"]
mod proptests;
