//! Implementation of the `cldr-plurals eval` command.

use cldr_plurals::{PluralCategory, PluralLocale};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Language code (e.g., en, ru, pt)
    #[arg(long, required = true)]
    pub lang: String,

    /// Region code (e.g., PT)
    #[arg(long)]
    pub region: Option<String>,

    /// Quantities to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub quantities: Vec<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one classified quantity.
#[derive(Serialize)]
pub struct EvalResult {
    pub quantity: i64,
    pub category: PluralCategory,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> Result<i32> {
    let locale = PluralLocale::builder()
        .language(args.lang.as_str())
        .maybe_region(args.region.as_deref())
        .build()
        .map_err(|e| miette!("Failed to load plural rules: {}", e))?;

    if !locale.is_supported() {
        if args.json {
            let output = serde_json::json!({
                "error": format!("no plural rules for locale '{}'", args.lang)
            });
            eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        } else {
            eprintln!("No plural rules for locale '{}'", args.lang);
        }
        return Ok(exitcode::DATAERR);
    }

    let results: Vec<EvalResult> = args
        .quantities
        .iter()
        .filter_map(|&quantity| {
            locale
                .category(quantity)
                .map(|category| EvalResult { quantity, category })
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        for result in &results {
            println!("{}: {}", result.quantity, result.category);
        }
    }

    Ok(exitcode::OK)
}
