use super::*;
use proptest::prelude::*;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 商品名に使う文字列（大文字小文字・分音記号付き・キリル文字・数字・空白・記号を混在させる）
fn name_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.9, "[a-cA-CàáÄéÉёЁжЖяЯ0-9 \\-]{0,8}")
}

/// 分音記号と大文字小文字を落とした名前
///
/// 名前の文字種（ASCII記号・数字・ラテン文字・キリル文字）では、この文字列の
/// コードポイント順が商品名順の第1段階と一致する。
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(name_strategy(), 0..30).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let mut p = Product::new(i as u64, "");
                p.name = name;
                p
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    " {0,2}[a-cA-CéЁж0-9]{1,3} {0,2}"
}

proptest! {
    /// 空白のみのクエリは全件を元の順序で返す
    #[test]
    fn prop_blank_query_is_identity(
        catalog in catalog_strategy(),
        query in "[ \t]{0,4}"
    ) {
        let result = search_products(&catalog, &query);
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        let expected: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, expected);
    }

    /// 結果はすべてクエリを含み、含むものは漏れない
    #[test]
    fn prop_results_are_exactly_the_matches(
        catalog in catalog_strategy(),
        query in query_strategy()
    ) {
        let normalized = query.trim().to_lowercase();
        let result = search_products(&catalog, &query);

        for p in &result {
            prop_assert!(p.display_name().to_lowercase().contains(&normalized));
        }
        let expected = catalog
            .iter()
            .filter(|p| p.display_name().to_lowercase().contains(&normalized))
            .count();
        prop_assert_eq!(result.len(), expected);
    }

    /// 前方一致がすべて部分一致より前に来る
    #[test]
    fn prop_prefix_tier_first(
        catalog in catalog_strategy(),
        query in query_strategy()
    ) {
        let normalized = query.trim().to_lowercase();
        let kinds: Vec<MatchKind> = search_products(&catalog, &query)
            .iter()
            .filter_map(|p| classify(p.display_name(), &normalized))
            .collect();

        prop_assert!(kinds.windows(2).all(|w| w[0] <= w[1]));
    }

    /// 同じ一致種類の中では、分音記号と大文字小文字を無視した名前が非減少
    #[test]
    fn prop_base_letters_sorted_within_tier(
        catalog in catalog_strategy(),
        query in query_strategy()
    ) {
        let normalized = query.trim().to_lowercase();
        let result = search_products(&catalog, &query);

        for w in result.windows(2) {
            let (a, b) = (w[0].display_name(), w[1].display_name());
            if classify(a, &normalized) == classify(b, &normalized) {
                prop_assert!(
                    base_letters(a) <= base_letters(b),
                    "{:?} sorted before {:?}", a, b
                );
            }
        }
    }

    /// 入力の並びを入れ替えても、結果の商品名の並びは変わらない
    #[test]
    fn prop_result_names_independent_of_input_order(
        (catalog, shuffled) in catalog_strategy()
            .prop_flat_map(|c| (Just(c.clone()), Just(c).prop_shuffle())),
        query in query_strategy()
    ) {
        let names = |products: &[Product]| -> Vec<String> {
            search_products(products, &query)
                .iter()
                .map(|p| p.display_name().to_string())
                .collect()
        };

        prop_assert_eq!(names(&catalog), names(&shuffled));
    }

    /// 絞り込み結果を再度同じクエリで絞り込んでも変わらない
    #[test]
    fn prop_search_is_stable_under_reapplication(
        catalog in catalog_strategy(),
        query in query_strategy()
    ) {
        let first: Vec<Product> = search_products(&catalog, &query)
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<u64> = search_products(&first, &query).iter().map(|p| p.id).collect();
        let first_ids: Vec<u64> = first.iter().map(|p| p.id).collect();

        prop_assert_eq!(second, first_ids);
    }

    /// ハイライト区間を連結すると元のテキストに戻る
    #[test]
    fn prop_highlight_preserves_text(
        text in "[a-cA-CéÉёЁ ]{0,12}",
        query in query_strategy()
    ) {
        let joined: String = highlight(&text, &query).iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }
}
