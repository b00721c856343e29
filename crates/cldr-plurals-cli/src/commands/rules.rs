//! Implementation of the `cldr-plurals rules` command.

use cldr_plurals::data::rule_list_row;
use cldr_plurals::{resolve_index, Condition, PluralLocale, PluralRuleList};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_rules_table, RuleRow};

/// Largest number of example quantities listed per category.
const MAX_EXAMPLES: usize = 6;

/// Arguments for the rules command.
#[derive(Debug, clap::Args)]
pub struct RulesArgs {
    /// Language code (e.g., en, ru, pt)
    #[arg(long, required = true)]
    pub lang: String,

    /// Region code (e.g., PT)
    #[arg(long)]
    pub region: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one rule.
#[derive(Debug, Serialize)]
struct RuleJson {
    category: String,
    source: String,
    simplified: String,
    examples: Vec<i64>,
}

/// Quantities selecting each rule, from small numbers and a few powers of ten.
fn examples(list: &PluralRuleList) -> Vec<Vec<i64>> {
    let candidates = (0..=200).chain([1_000, 10_000, 100_000, 1_000_000, 2_000_000]);
    let mut examples = vec![Vec::new(); list.len()];
    for quantity in candidates {
        let matched = list.rules().iter().position(|rule| rule.applies_to(quantity));
        if let Some(position) = matched {
            if examples[position].len() < MAX_EXAMPLES {
                examples[position].push(quantity);
            }
        }
    }
    examples
}

/// One row per rule of `locale`: the table text next to its simplified form.
fn rule_rows(locale: &PluralLocale) -> Vec<RuleRow> {
    let sources = resolve_index(locale.language(), locale.region())
        .and_then(rule_list_row)
        .unwrap_or_default();
    let list = locale.rules();
    list.rules()
        .iter()
        .zip(examples(list))
        .enumerate()
        .map(|(position, (rule, examples))| RuleRow {
            category: rule.category().to_string(),
            source: sources
                .get(position)
                .map(|&(_, text)| text.to_string())
                .unwrap_or_default(),
            simplified: match rule.condition() {
                Condition::True => String::new(),
                condition => condition.to_string(),
            },
            examples,
        })
        .collect()
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> Result<i32> {
    let locale = PluralLocale::builder()
        .language(args.lang.as_str())
        .maybe_region(args.region.as_deref())
        .build()
        .map_err(|e| miette!("Failed to load plural rules: {}", e))?;

    if !locale.is_supported() {
        eprintln!("No plural rules for locale '{}'", args.lang);
        return Ok(exitcode::DATAERR);
    }

    let rows = rule_rows(&locale);

    if args.json {
        let json_data: Vec<RuleJson> = rows
            .into_iter()
            .map(|row| RuleJson {
                category: row.category,
                source: row.source,
                simplified: row.simplified,
                examples: row.examples,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("{}", format_rules_table(&rows));
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_follow_rule_order() {
        let list = PluralRuleList::for_locale("en", None).unwrap();
        let examples = examples(&list);
        assert_eq!(examples[0], vec![1]);
        assert_eq!(examples[1], vec![0, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rows_show_table_text_and_simplified_form() {
        let locale = PluralLocale::builder()
            .language("pt")
            .region("PT")
            .build()
            .unwrap();
        let rows = rule_rows(&locale);
        let columns: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|row| (row.category.as_str(), row.source.as_str(), row.simplified.as_str()))
            .collect();
        assert_eq!(
            columns,
            vec![
                ("one", "i = 1 and v = 0", "i = 1"),
                (
                    "many",
                    "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5",
                    "i != 0 and i % 1000000 = 0",
                ),
                ("other", "", ""),
            ]
        );
        assert_eq!(rows[1].examples, vec![1_000_000, 2_000_000]);
    }

    #[test]
    fn brazilian_portuguese_uses_the_language_rows() {
        let locale = PluralLocale::builder().language("pt").build().unwrap();
        let rows = rule_rows(&locale);
        assert_eq!(rows[0].source, "i = 0..1");
        assert_eq!(rows[0].simplified, "i = 0..1");
        assert_eq!(rows[0].examples, vec![0, 1]);
    }
}
