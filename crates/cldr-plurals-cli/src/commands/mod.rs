//! CLI command implementations.

mod check;
mod eval;
mod rules;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use rules::{run_rules, RulesArgs};
