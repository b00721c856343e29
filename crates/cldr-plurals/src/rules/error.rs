//! Error types for building rule lists.

use thiserror::Error;

use crate::parser::ParseError;
use crate::types::PluralCategory;

/// An error building a [`PluralRuleList`](crate::PluralRuleList) from the
/// generated tables.
///
/// Both variants mean the shipped data is broken; they are not caused by
/// caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The index is past the end of the generated rule lists.
    #[error("no plural rule list at index {index}")]
    UnknownIndex { index: usize },

    /// A generated condition string failed to parse.
    #[error("malformed '{category}' rule in rule list {index}: {source}")]
    Table {
        index: usize,
        category: PluralCategory,
        #[source]
        source: ParseError,
    },
}
