//! Process-wide rule list storage.
//!
//! Rule lists are parsed on first use and kept for the life of the process.
//! There are only a few dozen distinct lists, so nothing is ever evicted.

use std::sync::LazyLock;

use crate::rules::{LoadedRuleList, SingleFlightCache};

static RULE_LISTS: LazyLock<SingleFlightCache<usize, LoadedRuleList>> =
    LazyLock::new(SingleFlightCache::new);

/// The cache behind [`PluralRuleList::for_index`](crate::PluralRuleList::for_index)
/// and [`PluralRuleList::for_locale`](crate::PluralRuleList::for_locale).
pub fn rule_list_cache() -> &'static SingleFlightCache<usize, LoadedRuleList> {
    &RULE_LISTS
}
