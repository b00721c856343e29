//! Generated CLDR tables.
//!
//! `LOCALES` maps a locale identifier (`"en"`, `"pt_PT"`) to an index into
//! `RULE_LISTS`. Each row of `RULE_LISTS` holds `(category, condition)` pairs
//! in the order CLDR publishes them.

mod locales;
mod rule_lists;

pub use locales::LOCALES;
pub use rule_lists::RULE_LISTS;

use crate::types::PluralCategory;

/// Look up the rule list index for an exact locale identifier.
pub fn locale_index(locale: &str) -> Option<usize> {
    LOCALES
        .binary_search_by_key(&locale, |&(name, _)| name)
        .ok()
        .map(|position| LOCALES[position].1)
}

/// The generated row for a rule list index.
pub fn rule_list_row(index: usize) -> Option<&'static [(PluralCategory, &'static str)]> {
    RULE_LISTS.get(index).copied()
}
