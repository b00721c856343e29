//! Miette diagnostic wrapper for plural rule parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use cldr_plurals::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for plural rule parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(cldr_plurals::syntax))]
pub struct RuleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RuleDiagnostic {
    /// Create a diagnostic from a ParseError with the rule text as source.
    pub fn from_parse_error(name: &str, rule: &str, err: &ParseError) -> Self {
        // Positions are 1-based characters; spans are byte offsets.
        let offset = rule
            .char_indices()
            .nth(err.position.saturating_sub(1))
            .map_or(rule.len(), |(offset, _)| offset);
        let length = rule[offset..].chars().next().map_or(0, char::len_utf8);

        RuleDiagnostic {
            src: NamedSource::new(name, rule.to_string()),
            span: (offset, length).into(),
            message: err.message.clone(),
            help: Some("conditions look like `n % 10 = 1 and n % 100 != 11`".into()),
        }
    }
}
