use super::*;

fn make_products(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Product::new(i as u64 + 1, *name))
        .collect()
}

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.display_name()).collect()
}

// =========================================================================
// search_products tests
// =========================================================================

#[test]
fn prefix_matches_precede_contains_matches() {
    let products = make_products(&["Blue Shirt", "Red Blue Hat", "blueprint"]);
    let result = search_products(&products, "blue");
    assert_eq!(names(&result), vec!["Blue Shirt", "blueprint", "Red Blue Hat"]);
}

#[test]
fn empty_query_returns_all_in_original_order() {
    let products = make_products(&["zeta", "Alpha", "mid"]);
    let result = search_products(&products, "");
    assert_eq!(names(&result), vec!["zeta", "Alpha", "mid"]);
}

#[test]
fn whitespace_query_returns_all_in_original_order() {
    let products = make_products(&["zeta", "Alpha"]);
    let result = search_products(&products, "  \t ");
    assert_eq!(names(&result), vec!["zeta", "Alpha"]);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let products = make_products(&["Coffee Mug", "Tea Cup"]);
    let result = search_products(&products, "  COFFEE ");
    assert_eq!(names(&result), vec!["Coffee Mug"]);
}

#[test]
fn no_match_returns_empty() {
    let products = make_products(&["foo", "bar"]);
    assert!(search_products(&products, "xyz").is_empty());
}

#[test]
fn missing_name_is_treated_as_empty() {
    let mut products = make_products(&["Lamp"]);
    let mut nameless = Product::new(99, "");
    nameless.name = None;
    products.push(nameless);

    let result = search_products(&products, "lamp");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

#[test]
fn missing_name_kept_for_empty_query() {
    let mut nameless = Product::new(1, "");
    nameless.name = None;
    let products = vec![nameless];

    assert_eq!(search_products(&products, "").len(), 1);
}

#[test]
fn contains_group_sorted_by_name() {
    let products = make_products(&["the zebra", "a zebra", "my Zebra"]);
    let result = search_products(&products, "zebra");
    assert_eq!(names(&result), vec!["a zebra", "my Zebra", "the zebra"]);
}

#[test]
fn equal_names_keep_original_order() {
    let products = make_products(&["Cap", "Cap", "Cap"]);
    let result = search_products(&products, "cap");
    let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn input_is_not_mutated() {
    let products = make_products(&["b item", "a item"]);
    let before = products.clone();
    let _ = search_products(&products, "item");
    assert_eq!(products, before);
}

#[test]
fn query_in_middle_of_word_is_contains_match() {
    let products = make_products(&["Notebook", "Book"]);
    let result = search_products(&products, "book");
    assert_eq!(names(&result), vec!["Book", "Notebook"]);
}

#[test]
fn cyrillic_names_are_matched_case_insensitively() {
    let products = make_products(&["Молоко", "Хлеб", "кефир молочный"]);
    let result = search_products(&products, "МОЛ");
    assert_eq!(names(&result), vec!["Молоко", "кефир молочный"]);
}

// =========================================================================
// classify / compare_names tests
// =========================================================================

#[test]
fn classify_kinds() {
    assert_eq!(classify("Blue Shirt", "blue"), Some(MatchKind::Prefix));
    assert_eq!(classify("Red Blue Hat", "blue"), Some(MatchKind::Contains));
    assert_eq!(classify("Green", "blue"), None);
}

#[test]
fn compare_names_ignores_case_first() {
    assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
}

#[test]
fn compare_names_lowercase_before_uppercase_on_tie() {
    assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
    assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
    assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
}

#[test]
fn compare_names_case_variants_lowercase_first() {
    let mut names = vec!["APPLE", "Apple", "apple", "apples"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["apple", "Apple", "APPLE", "apples"]);
}

#[test]
fn compare_names_accented_letters_sort_with_base_letter() {
    let mut names = vec!["Fig", "Éclair", "zebra", "Ärmel"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["Ärmel", "Éclair", "Fig", "zebra"]);
}

#[test]
fn compare_names_cyrillic_yo_sorts_with_ye() {
    let mut names = vec!["яблоко", "ёж", "жук", "еда"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["еда", "ёж", "жук", "яблоко"]);
}

#[test]
fn compare_names_latin_before_cyrillic() {
    let mut names = vec!["ёж", "zebra", "Ärmel", "яблоко"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["Ärmel", "zebra", "ёж", "яблоко"]);
}

#[test]
fn compare_names_accent_outranks_case() {
    let mut names = vec!["résumé", "Resume", "resume"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["resume", "Resume", "résumé"]);
}

#[test]
fn compare_names_precomposed_and_decomposed_are_equal() {
    assert_eq!(compare_names("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
}

#[test]
fn compare_names_symbols_then_digits_then_letters() {
    let mut names = vec!["apple", "~tilde", "42 caps", "-dash", "Zed"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["-dash", "~tilde", "42 caps", "apple", "Zed"]);
}

#[test]
fn compare_names_punctuation_inside_name() {
    assert_eq!(compare_names("a-b", "ab"), Ordering::Less);
    assert_eq!(compare_names("t-shirt", "tank"), Ordering::Less);
}

#[test]
fn accented_names_ranked_within_tier() {
    let products = make_products(&["Fig shirt", "Éclair shirt", "zip shirt", "Ärmel shirt"]);
    let result = search_products(&products, "shirt");
    assert_eq!(
        names(&result),
        vec!["Ärmel shirt", "Éclair shirt", "Fig shirt", "zip shirt"]
    );
}

#[test]
fn mixed_case_ties_within_prefix_tier() {
    let products = make_products(&["APPLE pie", "apple pie", "Apple pie"]);
    let result = search_products(&products, "apple");
    assert_eq!(names(&result), vec!["apple pie", "Apple pie", "APPLE pie"]);
}

#[test]
fn compare_names_shorter_prefix_first() {
    assert_eq!(compare_names("Blue", "Blue Shirt"), Ordering::Less);
    assert_eq!(compare_names("", "a"), Ordering::Less);
}

// =========================================================================
// highlight tests
// =========================================================================

fn rendered(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                format!("[{}]", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

#[test]
fn highlight_all_occurrences_case_insensitive() {
    let segments = highlight("Blue shirt, BLUE hat", "blue");
    assert_eq!(rendered(&segments), "[Blue] shirt, [BLUE] hat");
}

#[test]
fn highlight_empty_query_is_plain() {
    assert_eq!(highlight("Blue", "  "), vec![Segment::plain("Blue")]);
}

#[test]
fn highlight_no_match_is_plain() {
    assert_eq!(highlight("Blue", "red"), vec![Segment::plain("Blue")]);
}

#[test]
fn highlight_escapes_regex_metacharacters() {
    let segments = highlight("Size (XL) + extra", "(xl)");
    assert_eq!(rendered(&segments), "Size [(XL)] + extra");
}

#[test]
fn highlight_whole_text() {
    let segments = highlight("cap", "CAP");
    assert_eq!(
        segments,
        vec![Segment {
            text: "cap",
            matched: true
        }]
    );
}
