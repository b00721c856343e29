use std::sync::Arc;

use tracing::{debug, trace};

use crate::data::rule_list_row;
use crate::global::rule_list_cache;
use crate::rules::cache::KeyedCache;
use crate::rules::error::RuleError;
use crate::rules::locale::resolve_index;
use crate::rules::rule::PluralRule;
use crate::types::PluralCategory;

/// What a rule list cache stores per index.
pub type LoadedRuleList = Result<Arc<PluralRuleList>, RuleError>;

/// The ordered plural rules of one locale family.
///
/// Rules are tried in order and the first match wins, so the catch-all
/// `other` rule comes last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralRuleList {
    rules: Vec<PluralRule>,
}

impl PluralRuleList {
    pub fn new(rules: Vec<PluralRule>) -> Self {
        Self { rules }
    }

    /// A list with no rules, used for locales without plural data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse one row of the generated rule list table.
    pub fn from_table(index: usize) -> Result<Self, RuleError> {
        let row = rule_list_row(index).ok_or(RuleError::UnknownIndex { index })?;
        let rules = row
            .iter()
            .map(|&(category, condition)| {
                PluralRule::parse(category, condition).map_err(|source| RuleError::Table {
                    index,
                    category,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(index, rules = rules.len(), "built plural rule list");
        Ok(Self::new(rules))
    }

    /// The shared rule list for a table index, built on first use.
    pub fn for_index(index: usize) -> LoadedRuleList {
        Self::for_index_in(rule_list_cache(), index)
    }

    /// Like [`for_index`](Self::for_index), memoized in `cache` instead of the
    /// process-wide cache.
    pub fn for_index_in<C>(cache: &C, index: usize) -> LoadedRuleList
    where
        C: KeyedCache<usize, LoadedRuleList>,
    {
        let mut built = false;
        let list = cache.get_or_load(index, || {
            built = true;
            Self::from_table(index).map(Arc::new)
        });
        if !built {
            trace!(index, "plural rule list cache hit");
        }
        list
    }

    /// The shared rule list for a locale.
    ///
    /// Looks up `{language}_{region}` first, then `language`. A locale with
    /// neither gets an empty list.
    ///
    /// ```
    /// use cldr_plurals::{PluralCategory, PluralRuleList};
    ///
    /// let rules = PluralRuleList::for_locale("en", Some("GB")).unwrap();
    /// assert_eq!(rules.category(1), PluralCategory::One);
    /// assert_eq!(rules.category(2), PluralCategory::Other);
    /// ```
    pub fn for_locale(language: &str, region: Option<&str>) -> LoadedRuleList {
        match resolve_index(language, region) {
            Some(index) => Self::for_index(index),
            None => {
                debug!(language, region, "no plural rules for locale");
                Ok(Arc::new(Self::empty()))
            }
        }
    }

    pub fn rules(&self) -> &[PluralRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The categories of the rules, in rule order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.rules.iter().map(PluralRule::category)
    }

    /// The category of the first rule that applies to `quantity`.
    pub fn try_category(&self, quantity: i64) -> Option<PluralCategory> {
        let category = self
            .rules
            .iter()
            .find(|rule| rule.applies_to(quantity))
            .map(PluralRule::category);
        trace!(quantity, ?category, "selected plural category");
        category
    }

    /// The category of the first rule that applies to `quantity`.
    ///
    /// # Panics
    ///
    /// Panics if no rule applies, which only happens for an empty list or a
    /// list without a catch-all `other` rule. Check [`is_empty`](Self::is_empty)
    /// for lists resolved from an arbitrary locale.
    pub fn category(&self, quantity: i64) -> PluralCategory {
        match self.try_category(quantity) {
            Some(category) => category,
            None => panic!(
                "no plural rule applies to {quantity} in a list of {} rules",
                self.rules.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RULE_LISTS;
    use crate::parser::Condition;
    use crate::rules::cache::SingleFlightCache;

    #[test]
    fn first_matching_rule_wins() {
        let list = PluralRuleList::new(vec![
            PluralRule::parse(PluralCategory::Few, "n = 2..4").unwrap(),
            PluralRule::parse(PluralCategory::Two, "n = 2").unwrap(),
            PluralRule::new(PluralCategory::Other, Condition::True),
        ]);
        assert_eq!(list.category(2), PluralCategory::Few);
        assert_eq!(list.category(5), PluralCategory::Other);
    }

    #[test]
    fn every_table_row_parses() {
        for index in 0..RULE_LISTS.len() {
            let list = PluralRuleList::from_table(index).unwrap();
            assert_eq!(list.len(), RULE_LISTS[index].len());
            assert_eq!(list.categories().last(), Some(PluralCategory::Other));
        }
    }

    #[test]
    fn cached_lists_are_not_rebuilt() {
        let cache = SingleFlightCache::new();
        let first = PluralRuleList::for_index_in(&cache, 4).unwrap();
        let second = cache.get_or_load(4, || panic!("cached list rebuilt"));
        assert!(Arc::ptr_eq(&first, &second.unwrap()));
        let third = PluralRuleList::for_index_in(&cache, 4).unwrap();
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let index = RULE_LISTS.len();
        assert_eq!(
            PluralRuleList::from_table(index),
            Err(RuleError::UnknownIndex { index })
        );
    }

    #[test]
    fn empty_list_has_no_category() {
        let list = PluralRuleList::empty();
        assert!(list.is_empty());
        assert_eq!(list.try_category(1), None);
    }

    #[test]
    #[should_panic(expected = "no plural rule applies to 3")]
    fn category_panics_without_catch_all() {
        let list = PluralRuleList::new(vec![
            PluralRule::parse(PluralCategory::One, "n = 1").unwrap(),
        ]);
        list.category(3);
    }
}
