//! Plural rules, per-locale rule lists, and their cache.

mod cache;
mod error;
mod locale;
mod rule;
mod rule_list;

pub use cache::{KeyedCache, SingleFlightCache};
pub use error::RuleError;
pub use locale::{PluralLocale, resolve_index};
pub use rule::PluralRule;
pub use rule_list::{LoadedRuleList, PluralRuleList};
