//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One rule of a resolved rule list.
pub struct RuleRow {
    /// Category keyword (e.g., "one", "few").
    pub category: String,
    /// Condition text as it appears in the CLDR data.
    pub source: String,
    /// Condition after integer simplification.
    pub simplified: String,
    /// Quantities that select this category.
    pub examples: Vec<i64>,
}

/// Format a rule list as a table.
pub fn format_rules_table(rows: &[RuleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Rule", "Simplified", "Examples"]);

    for row in rows {
        let examples: Vec<String> = row.examples.iter().map(i64::to_string).collect();
        table.add_row(vec![
            row.category.clone(),
            row.source.clone(),
            row.simplified.clone(),
            examples.join(", "),
        ]);
    }

    table
}
