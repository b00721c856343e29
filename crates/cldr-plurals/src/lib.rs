//! CLDR plural rules for integer quantities.
//!
//! Parses CLDR plural rule conditions, resolves a locale to its rule list,
//! and classifies quantities into [`PluralCategory`] values.
//!
//! ```
//! use cldr_plurals::{PluralCategory, PluralRuleList};
//!
//! let rules = PluralRuleList::for_locale("pl", None).unwrap();
//! assert_eq!(rules.category(1), PluralCategory::One);
//! assert_eq!(rules.category(22), PluralCategory::Few);
//! assert_eq!(rules.category(25), PluralCategory::Many);
//! ```

pub mod data;
pub mod global;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::{Condition, ParseError, parse_condition};
pub use rules::{
    KeyedCache, LoadedRuleList, PluralLocale, PluralRule, PluralRuleList, RuleError,
    SingleFlightCache, resolve_index,
};
pub use types::{Operand, PluralCategory};
