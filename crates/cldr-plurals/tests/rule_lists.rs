//! Integration tests for rule lists and locale resolution.

use std::sync::Arc;

use cldr_plurals::PluralCategory::{Few, Many, One, Other, Two, Zero};
use cldr_plurals::{
    Condition, PluralCategory, PluralLocale, PluralRule, PluralRuleList, resolve_index,
};

fn rules_for(language: &str) -> Arc<PluralRuleList> {
    PluralRuleList::for_locale(language, None).unwrap()
}

fn assert_categories(language: &str, expected: &[(i64, PluralCategory)]) {
    let rules = rules_for(language);
    for &(quantity, category) in expected {
        assert_eq!(
            rules.category(quantity),
            category,
            "{language}: wrong category for {quantity}"
        );
    }
}

// =========================================================================
// Rules
// =========================================================================

#[test]
fn rule_from_condition() {
    let rule = PluralRule::new(Few, Condition::True);
    assert_eq!(rule.category(), Few);
    assert!(rule.applies_to(0));
    assert!(rule.applies_to(1_000));
}

#[test]
fn rule_from_text() {
    let rule = PluralRule::parse(Two, "n % 10 = 2 and n % 100 != 12").unwrap();
    assert!(rule.applies_to(2));
    assert!(rule.applies_to(22));
    assert!(!rule.applies_to(12));
}

#[test]
fn rule_parse_errors_propagate() {
    let err = PluralRule::parse(One, "n = ").unwrap_err();
    assert_eq!(err.position, 5);
}

// =========================================================================
// Per-language classification
// =========================================================================

#[test]
fn english() {
    assert_categories(
        "en",
        &[(0, Other), (1, One), (2, Other), (3, Other), (11, Other), (101, Other)],
    );
    assert_eq!(rules_for("en").categories().collect::<Vec<_>>(), vec![One, Other]);
}

#[test]
fn english_negative_quantities() {
    assert_categories("en", &[(-1, One), (-2, Other)]);
}

#[test]
fn no_plural_languages() {
    for language in ["ja", "zh", "ko", "vi", "th"] {
        assert_categories(language, &[(0, Other), (1, Other), (2, Other)]);
    }
}

#[test]
fn french() {
    assert_categories(
        "fr",
        &[
            (0, One),
            (1, One),
            (2, Other),
            (1_000_000, Many),
            (2_000_000, Many),
            (1_000_001, Other),
        ],
    );
}

#[test]
fn russian() {
    assert_categories(
        "ru",
        &[
            (1, One),
            (21, One),
            (11, Many),
            (2, Few),
            (24, Few),
            (12, Many),
            (0, Many),
            (5, Many),
            (111, Many),
        ],
    );
}

#[test]
fn polish() {
    assert_categories(
        "pl",
        &[(1, One), (2, Few), (22, Few), (12, Many), (5, Many), (21, Many), (0, Many)],
    );
}

#[test]
fn arabic() {
    assert_categories(
        "ar",
        &[
            (0, Zero),
            (1, One),
            (2, Two),
            (3, Few),
            (10, Few),
            (11, Many),
            (99, Many),
            (100, Other),
            (102, Other),
            (103, Few),
        ],
    );
    assert_eq!(
        rules_for("ar").categories().collect::<Vec<_>>(),
        PluralCategory::ALL.to_vec()
    );
}

#[test]
fn welsh() {
    assert_categories(
        "cy",
        &[(0, Zero), (1, One), (2, Two), (3, Few), (4, Other), (6, Many), (7, Other)],
    );
}

#[test]
fn latvian() {
    assert_categories(
        "lv",
        &[(0, Zero), (10, Zero), (11, Zero), (19, Zero), (1, One), (21, One), (2, Other)],
    );
}

#[test]
fn icelandic() {
    assert_categories("is", &[(1, One), (21, One), (11, Other), (2, Other)]);
}

#[test]
fn breton() {
    assert_categories(
        "br",
        &[
            (1, One),
            (11, Other),
            (21, One),
            (71, Other),
            (2, Two),
            (3, Few),
            (9, Few),
            (19, Other),
            (1_000_000, Many),
        ],
    );
}

#[test]
fn cornish() {
    assert_categories(
        "kw",
        &[
            (0, Zero),
            (1, One),
            (2, Two),
            (22, Two),
            (3, Few),
            (21, Many),
            (4, Other),
            (1_000, Two),
            (100_000, Two),
        ],
    );
}

// =========================================================================
// Locale resolution
// =========================================================================

#[test]
fn region_specific_rules_win() {
    let pt = resolve_index("pt", None).unwrap();
    let pt_pt = resolve_index("pt", Some("PT")).unwrap();
    assert_ne!(pt, pt_pt);

    let brazil = PluralRuleList::for_locale("pt", Some("BR")).unwrap();
    let portugal = PluralRuleList::for_locale("pt", Some("PT")).unwrap();
    assert_eq!(brazil.category(0), One);
    assert_eq!(portugal.category(0), Other);
    assert_eq!(portugal.category(1), One);
    assert_eq!(portugal.category(1_000_000), Many);
}

#[test]
fn unknown_region_falls_back_to_language() {
    assert_eq!(resolve_index("en", Some("ZZ")), resolve_index("en", None));
    let fallback = PluralRuleList::for_locale("en", Some("ZZ")).unwrap();
    assert!(Arc::ptr_eq(&fallback, &rules_for("en")));
}

#[test]
fn unknown_language_has_empty_rules() {
    assert_eq!(resolve_index("qq", Some("PT")), None);
    let rules = PluralRuleList::for_locale("qq", None).unwrap();
    assert!(rules.is_empty());
    assert_eq!(rules.try_category(1), None);
}

#[test]
fn resolution_is_case_sensitive() {
    assert_eq!(resolve_index("EN", None), None);
    assert_eq!(resolve_index("pt", Some("pt")), resolve_index("pt", None));
}

#[test]
fn languages_sharing_rules_share_the_list() {
    let german = rules_for("de");
    let english = rules_for("en");
    assert!(Arc::ptr_eq(&german, &english));
    assert_eq!(
        PluralRuleList::for_index(resolve_index("en", None).unwrap()).unwrap(),
        english
    );
}

// =========================================================================
// PluralLocale
// =========================================================================

#[test]
fn locale_defaults_to_english() {
    let locale = PluralLocale::builder().build().unwrap();
    assert_eq!(locale.language(), "en");
    assert_eq!(locale.region(), None);
    assert!(locale.is_supported());
    assert_eq!(locale.category(1), Some(One));
}

#[test]
fn locale_with_region() {
    let locale = PluralLocale::builder()
        .language("pt")
        .region("PT")
        .build()
        .unwrap();
    assert_eq!(locale.region(), Some("PT"));
    assert_eq!(locale.category(0), Some(Other));
    assert_eq!(locale.rules().len(), 3);
}

#[test]
fn unsupported_locale_has_no_categories() {
    let locale = PluralLocale::builder().language("tlh").build().unwrap();
    assert!(!locale.is_supported());
    assert_eq!(locale.category(1), None);
}

// =========================================================================
// Categories
// =========================================================================

#[test]
fn categories_serialize_as_keywords() {
    assert_eq!(serde_json::to_string(&Many).unwrap(), r#""many""#);
    let parsed: PluralCategory = serde_json::from_str(r#""zero""#).unwrap();
    assert_eq!(parsed, Zero);
}
