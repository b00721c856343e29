//! Condition parser using winnow.
//!
//! Grammar:
//!
//! ```text
//! condition     = and_condition ('or' and_condition)*
//! and_condition = relation ('and' relation)*
//! relation      = operand ('%' value)? ('=' | '!=') range_list
//! operand       = 'n' | 'i' | 'f' | 't' | 'v' | 'w' | 'c' | 'e'
//! range_list    = (range | value) (',' range_list)*
//! range         = value '..' value
//! ```
//!
//! The parser never backtracks past a consumed token: every branch commits
//! with `cut_err` as soon as its first character matched, so error positions
//! point at the first character that could not continue the current token.

use std::ops::RangeInclusive;

use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, fail, opt, preceded};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::Stream;
use winnow::token::{any, take_while};

use super::ast::{Condition, Relation};
use super::error::ParseError;
use crate::types::Operand;

/// Parse a rule condition and simplify it for integer quantities.
///
/// An empty or all-whitespace condition is the CLDR "otherwise" case and
/// parses to [`Condition::True`].
///
/// ```
/// use cldr_plurals::parser::parse_condition;
///
/// let condition = parse_condition("n % 10 = 1 and n % 100 != 11").unwrap();
/// assert!(condition.is_fulfilled(21));
/// assert!(!condition.is_fulfilled(11));
/// ```
pub fn parse_condition(input: &str) -> Result<Condition, ParseError> {
    parse_condition_unsimplified(input).map(Condition::simplify_for_integer)
}

/// Parse a rule condition exactly as written, keeping relations on operands
/// that are always zero for integers.
pub fn parse_condition_unsimplified(input: &str) -> Result<Condition, ParseError> {
    if input.chars().all(|c| c.is_ascii_whitespace()) {
        return Ok(Condition::True);
    }

    let mut remaining = input;
    match condition(&mut remaining) {
        Ok(parsed) => {
            let rest = remaining.trim_start_matches(|c: char| c.is_ascii_whitespace());
            match rest.chars().next() {
                None => Ok(parsed),
                Some(c) => Err(ParseError::new(
                    calculate_position(input, rest),
                    format!("unexpected character '{c}', expected 'and', 'or' or end of input"),
                )),
            }
        }
        Err(e) => Err(syntax_error(input, remaining, e)),
    }
}

/// 1-based character position of the start of `remaining` within `original`.
fn calculate_position(original: &str, remaining: &str) -> usize {
    let consumed = original.len() - remaining.len();
    original[..consumed].chars().count() + 1
}

fn syntax_error(original: &str, remaining: &str, err: ErrMode<ContextError>) -> ParseError {
    let position = calculate_position(original, remaining);
    let err = match err {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let label = err.context().find_map(|context| match context {
        StrContext::Label(label) => Some(*label),
        _ => None,
    });
    if let Some(label) = label {
        return ParseError::new(position, label);
    }

    let found = match remaining.chars().next() {
        Some(c) => format!("unexpected character '{c}'"),
        None => "unexpected end of input".to_string(),
    };
    let expected = err.context().find_map(|context| match context {
        StrContext::Expected(value) => Some(value.to_string()),
        _ => None,
    });
    match expected {
        Some(expected) => ParseError::new(position, format!("{found}, expected {expected}")),
        None => ParseError::new(position, found),
    }
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

/// Parse a disjunction of conjunctions.
fn condition(input: &mut &str) -> ModalResult<Condition> {
    let mut result = and_condition(input)?;
    while keyword(input, 'o', "r", "'or'")? {
        let right = and_condition(input)?;
        result = Condition::or(result, right);
    }
    Ok(result)
}

/// Parse a conjunction of relations.
fn and_condition(input: &mut &str) -> ModalResult<Condition> {
    let mut result = relation(input)?;
    while keyword(input, 'a', "nd", "'and'")? {
        let right = relation(input)?;
        result = Condition::and(result, right);
    }
    Ok(result)
}

/// Skip whitespace, then consume a keyword if its first letter is next.
///
/// No other token can start with `o` or `a` here, so once the first letter
/// matched the rest of the keyword is required.
fn keyword(
    input: &mut &str,
    first: char,
    rest: &'static str,
    description: &'static str,
) -> ModalResult<bool> {
    ws(input)?;
    if opt(first).parse_next(input)?.is_none() {
        return Ok(false);
    }
    cut_err(rest).context(expected(description)).parse_next(input)?;
    Ok(true)
}

/// Parse a relation: operand, optional modulus, comparison, range list.
fn relation(input: &mut &str) -> ModalResult<Condition> {
    ws(input)?;
    let operand = cut_err(operand_letter).parse_next(input)?;
    ws(input)?;
    let modulus = modulus(input)?;
    ws(input)?;
    let negated = cut_err(comparison).parse_next(input)?;
    let ranges = range_list(input)?;

    let relation = Relation::builder()
        .operand(operand)
        .maybe_modulus(modulus)
        .negated(negated)
        .ranges(ranges)
        .build();
    match relation {
        Some(relation) => Ok(Condition::Relation(relation)),
        None => cut_err(fail.context(StrContext::Label("invalid relation"))).parse_next(input),
    }
}

/// Parse one operand letter.
fn operand_letter(input: &mut &str) -> ModalResult<Operand> {
    any.verify_map(Operand::from_char)
        .context(expected("operand (n, i, f, t, v, w, c or e)"))
        .parse_next(input)
}

/// Parse an optional `% value` modulus.
fn modulus(input: &mut &str) -> ModalResult<Option<u64>> {
    if opt('%').parse_next(input)?.is_none() {
        return Ok(None);
    }
    ws(input)?;
    let start = input.checkpoint();
    let divisor = cut_err(value).parse_next(input)?;
    if divisor == 0 {
        input.reset(&start);
        return cut_err(fail.context(StrContext::Label("modulus must be positive")))
            .parse_next(input);
    }
    Ok(Some(divisor))
}

/// Parse `=` or `!=`, returning whether the comparison is negated.
fn comparison(input: &mut &str) -> ModalResult<bool> {
    alt((
        '='.value(false),
        ('!', cut_err('=').context(expected("'=' after '!'"))).value(true),
    ))
    .context(expected("'=' or '!='"))
    .parse_next(input)
}

/// Parse a comma-separated list of values and ranges.
fn range_list(input: &mut &str) -> ModalResult<Vec<RangeInclusive<u64>>> {
    let mut ranges = vec![range(input)?];
    while opt((ws, ',')).parse_next(input)?.is_some() {
        ranges.push(range(input)?);
    }
    Ok(ranges)
}

/// Parse `value` or `value..value`. A bare value is a single-value range.
fn range(input: &mut &str) -> ModalResult<RangeInclusive<u64>> {
    ws(input)?;
    let start = cut_err(value).parse_next(input)?;
    let end = opt(preceded((ws, ".."), preceded(ws, cut_err(value)))).parse_next(input)?;
    Ok(start..=end.unwrap_or(start))
}

/// Parse a decimal integer.
fn value(input: &mut &str) -> ModalResult<u64> {
    let start = input.checkpoint();
    let digits = digit1.context(expected("digit")).parse_next(input)?;
    match digits.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            input.reset(&start);
            cut_err(fail.context(StrContext::Label("value out of range"))).parse_next(input)
        }
    }
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_characters_not_bytes() {
        let original = "ü n";
        assert_eq!(calculate_position(original, &original[3..]), 3);
    }

    #[test]
    fn trailing_whitespace_is_skipped() {
        assert!(parse_condition_unsimplified("n = 1 \t ").is_ok());
        let err = parse_condition_unsimplified("n = 1   x").unwrap_err();
        assert_eq!(err.position, 9);
        assert_eq!(
            err.message,
            "unexpected character 'x', expected 'and', 'or' or end of input"
        );
    }

    #[test]
    fn keyword_requires_full_spelling() {
        let mut input = " ox";
        let err = keyword(&mut input, 'o', "r", "'or'").unwrap_err();
        assert!(matches!(err, ErrMode::Cut(_)));
        assert_eq!(input, "x");
    }

    #[test]
    fn keyword_leaves_other_input_alone() {
        let mut input = "  n = 1";
        assert!(!keyword(&mut input, 'a', "nd", "'and'").unwrap());
        assert_eq!(input, "n = 1");
    }

    #[test]
    fn range_accepts_spaced_dots() {
        let mut input = "3 .. 5";
        assert_eq!(range(&mut input).unwrap(), 3..=5);
        assert!(input.is_empty());
    }
}
