//! Implementation of the `cldr-plurals check` command.

use cldr_plurals::parser::{parse_condition, Condition};
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use crate::output::RuleDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Rule conditions to check (e.g., "i = 1 and v = 0")
    #[arg(required = true)]
    pub rules: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked rule.
#[derive(Debug, Serialize)]
struct CheckJson {
    rule: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    simplified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

/// Describe a simplified condition for display.
fn describe(condition: &Condition) -> String {
    match condition {
        Condition::True => "always true for integers".to_string(),
        Condition::False => "never true for integers".to_string(),
        other => other.to_string(),
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::with_capacity(args.rules.len());
    let mut any_invalid = false;

    for (i, rule) in args.rules.iter().enumerate() {
        match parse_condition(rule) {
            Ok(condition) => {
                debug!(rule = %rule, simplified = %condition, "rule is valid");
                if !args.json {
                    println!("{} {}", "ok".green(), rule);
                    println!("   simplified: {}", describe(&condition));
                }
                results.push(CheckJson {
                    rule: rule.clone(),
                    valid: true,
                    simplified: Some(condition.to_string()),
                    error: None,
                    position: None,
                });
            }
            Err(e) => {
                any_invalid = true;
                if !args.json {
                    let name = format!("rule {}", i + 1);
                    let diagnostic = RuleDiagnostic::from_parse_error(&name, rule, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckJson {
                    rule: rule.clone(),
                    valid: false,
                    simplified: None,
                    error: Some(e.message),
                    position: Some(e.position),
                });
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    }

    if any_invalid {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
