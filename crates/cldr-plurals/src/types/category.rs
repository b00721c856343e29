use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A CLDR plural category.
///
/// Every locale partitions quantities into some subset of these six buckets.
/// English only uses `One` and `Other`, while Arabic uses all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories, in the order CLDR lists them.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Look up a category by name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not one of the six category names.
    ///
    /// ```
    /// use cldr_plurals::PluralCategory;
    ///
    /// assert_eq!(PluralCategory::from_name("FEW"), Some(PluralCategory::Few));
    /// assert_eq!(PluralCategory::from_name("several"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }

    /// The lowercase CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
