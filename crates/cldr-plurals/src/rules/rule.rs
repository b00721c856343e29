use crate::parser::{Condition, ParseError, parse_condition};
use crate::types::PluralCategory;

/// One plural category together with the condition that selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    category: PluralCategory,
    condition: Condition,
}

impl PluralRule {
    pub fn new(category: PluralCategory, condition: Condition) -> Self {
        Self {
            category,
            condition,
        }
    }

    /// Parse `condition` and pair it with `category`.
    ///
    /// ```
    /// use cldr_plurals::{PluralCategory, PluralRule};
    ///
    /// let rule = PluralRule::parse(PluralCategory::One, "i = 1 and v = 0").unwrap();
    /// assert!(rule.applies_to(1));
    /// assert!(!rule.applies_to(2));
    /// ```
    pub fn parse(category: PluralCategory, condition: &str) -> Result<Self, ParseError> {
        Ok(Self::new(category, parse_condition(condition)?))
    }

    pub fn category(&self) -> PluralCategory {
        self.category
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Whether this rule's category applies to `quantity`.
    pub fn applies_to(&self, quantity: i64) -> bool {
        self.condition.is_fulfilled(quantity)
    }
}
