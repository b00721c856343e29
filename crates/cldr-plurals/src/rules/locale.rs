//! Locale resolution and the per-locale facade.

use std::sync::Arc;

use bon::bon;
use tracing::trace;

use crate::data::locale_index;
use crate::rules::error::RuleError;
use crate::rules::rule_list::PluralRuleList;
use crate::types::PluralCategory;

/// Resolve a language and optional region to a rule list index.
///
/// `{language}_{region}` wins if the tables list it; otherwise the bare
/// language is used. Case is not normalized.
///
/// ```
/// use cldr_plurals::resolve_index;
///
/// assert_ne!(resolve_index("pt", Some("PT")), resolve_index("pt", None));
/// assert_eq!(resolve_index("pt", Some("BR")), resolve_index("pt", None));
/// assert_eq!(resolve_index("xx", None), None);
/// ```
pub fn resolve_index(language: &str, region: Option<&str>) -> Option<usize> {
    if let Some(region) = region {
        let compound = format!("{language}_{region}");
        if let Some(index) = locale_index(&compound) {
            trace!(locale = %compound, index, "resolved plural rules for region");
            return Some(index);
        }
    }
    let index = locale_index(language);
    trace!(language, ?index, "resolved plural rules for language");
    index
}

/// The plural rules for one locale.
///
/// # Example
///
/// ```
/// use cldr_plurals::{PluralCategory, PluralLocale};
///
/// let locale = PluralLocale::builder()
///     .language("ru")
///     .build()
///     .unwrap();
///
/// assert_eq!(locale.category(1), Some(PluralCategory::One));
/// assert_eq!(locale.category(3), Some(PluralCategory::Few));
/// assert_eq!(locale.category(5), Some(PluralCategory::Many));
/// ```
#[derive(Debug, Clone)]
pub struct PluralLocale {
    language: String,
    region: Option<String>,
    rules: Arc<PluralRuleList>,
}

#[bon]
impl PluralLocale {
    /// Resolve the locale and load its rules through the process-wide cache.
    #[builder]
    pub fn new(
        #[builder(into, default = "en".to_string())] language: String,
        #[builder(into)] region: Option<String>,
    ) -> Result<Self, RuleError> {
        let rules = PluralRuleList::for_locale(&language, region.as_deref())?;
        Ok(Self {
            language,
            region,
            rules,
        })
    }
}

impl PluralLocale {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn rules(&self) -> &Arc<PluralRuleList> {
        &self.rules
    }

    /// Whether the tables have plural rules for this locale.
    pub fn is_supported(&self) -> bool {
        !self.rules.is_empty()
    }

    /// The plural category of `quantity`, or `None` for an unsupported locale.
    pub fn category(&self, quantity: i64) -> Option<PluralCategory> {
        self.rules.try_category(quantity)
    }
}
