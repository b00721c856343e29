//! CLDR plural rule condition parser.
//!
//! Turns the condition half of a CLDR rule (`"n % 10 = 1 and n % 100 != 11"`)
//! into a [`Condition`] tree restricted to integer quantities.

pub mod ast;
mod condition;
pub mod error;
mod simplify;

pub use ast::{Condition, Relation};
pub use condition::{parse_condition, parse_condition_unsimplified};
pub use error::ParseError;
