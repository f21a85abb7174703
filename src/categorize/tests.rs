#![allow(clippy::unwrap_used)]

use super::*;

fn standard() -> Categorizer {
    Categorizer::standard()
}

// ── Keyword table ─────────────────────────────────────────────

#[test]
fn test_categorize_each_rule() {
    let cat = standard();
    assert_eq!(cat.categorize("Coffee run"), Category::FoodAndDrink);
    assert_eq!(cat.categorize("Groceries"), Category::FoodAndDrink);
    assert_eq!(cat.categorize("Taxi to airport"), Category::Transportation);
    assert_eq!(cat.categorize("Metro card"), Category::Transportation);
    assert_eq!(cat.categorize("Concert tickets"), Category::Entertainment);
    assert_eq!(cat.categorize("Streaming subscription"), Category::Entertainment);
    assert_eq!(cat.categorize("Tuition fee"), Category::Education);
    assert_eq!(cat.categorize("Online course"), Category::Education);
    assert_eq!(cat.categorize("Electric bill"), Category::Utilities);
    assert_eq!(cat.categorize("Internet"), Category::Utilities);
}

#[test]
fn test_categorize_case_insensitive() {
    let cat = standard();
    assert_eq!(cat.categorize("COFFEE SHOP"), Category::FoodAndDrink);
    assert_eq!(cat.categorize("coffee shop"), Category::FoodAndDrink);
    assert_eq!(cat.categorize("CoFfEe ShOp"), Category::FoodAndDrink);
}

#[test]
fn test_categorize_no_match() {
    let cat = standard();
    assert_eq!(cat.categorize("Birthday present"), Category::Other);
}

#[test]
fn test_categorize_empty_description() {
    let cat = standard();
    assert_eq!(cat.categorize(""), Category::Other);
    assert!(cat.explain("").is_none());
}

#[test]
fn test_categorize_first_match_wins() {
    let cat = standard();
    // Transportation (rule 2) precedes Education (rule 4)
    assert_eq!(cat.categorize("bus book"), Category::Transportation);
    assert_eq!(cat.categorize("book bus"), Category::Transportation);
    // Food & Drink precedes Entertainment
    assert_eq!(cat.categorize("movie and restaurant"), Category::FoodAndDrink);
}

#[test]
fn test_categorize_substring_match() {
    let cat = standard();
    // "parentheses" contains "rent"
    assert_eq!(cat.categorize("parentheses"), Category::Utilities);
    // "busy" contains "bus"
    assert_eq!(cat.categorize("busy day"), Category::Transportation);
    assert_eq!(cat.categorize("Facebook ads"), Category::Education);
}

#[test]
fn test_categorize_only_known_categories() {
    let cat = standard();
    for desc in ["", "x", "🎉", "rent", "WATER", "game night", "1234"] {
        assert!(Category::all().contains(&cat.categorize(desc)));
    }
}

#[test]
fn test_explain_reports_keyword() {
    let cat = standard();
    let (category, keyword) = cat.explain("Weekly GROCERIES haul").unwrap();
    assert_eq!(category, Category::FoodAndDrink);
    assert_eq!(keyword, "groceries");
}

// ── Custom rules ──────────────────────────────────────────────

#[test]
fn test_custom_rules_escape_metacharacters() {
    let rules = [KeywordRule {
        category: Category::Entertainment,
        keywords: &["c++", "a.b"],
    }];
    let cat = Categorizer::new(&rules);
    assert_eq!(cat.categorize("C++ conference"), Category::Entertainment);
    assert_eq!(cat.categorize("axb"), Category::Other);
    assert_eq!(cat.categorize("a.b"), Category::Entertainment);
}

#[test]
fn test_rule_without_keywords_is_skipped() {
    let rules = [
        KeywordRule {
            category: Category::Education,
            keywords: &[""],
        },
        KeywordRule {
            category: Category::Utilities,
            keywords: &["water"],
        },
    ];
    let cat = Categorizer::new(&rules);
    assert_eq!(cat.categorize("anything"), Category::Other);
    assert_eq!(cat.categorize("water"), Category::Utilities);
}

#[test]
fn test_empty_rule_table() {
    let cat = Categorizer::new(&[]);
    assert_eq!(cat.categorize("coffee"), Category::Other);
}
