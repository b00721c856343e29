//! Condition trees for CLDR plural rules.
//!
//! These types are public so tooling can inspect parsed rules.

use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;

use bon::bon;

use crate::types::Operand;

/// A boolean expression over one integer quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Always satisfied. An empty rule condition parses to this.
    True,
    /// Never satisfied.
    False,
    /// A single comparison such as `n % 10 = 2..4`.
    Relation(Relation),
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    /// Evaluate the condition for the quantity `n`.
    ///
    /// Negative quantities are classified by their absolute value, matching the
    /// CLDR definition of operand `n`.
    pub fn is_fulfilled(&self, n: i64) -> bool {
        match self {
            Condition::True => true,
            Condition::False => false,
            Condition::Relation(relation) => relation.is_fulfilled(n),
            Condition::And(left, right) => left.is_fulfilled(n) && right.is_fulfilled(n),
            Condition::Or(left, right) => left.is_fulfilled(n) || right.is_fulfilled(n),
        }
    }
}

impl From<Relation> for Condition {
    fn from(relation: Relation) -> Self {
        Condition::Relation(relation)
    }
}

/// A comparison of one operand against a list of inclusive ranges.
///
/// The range list is never empty and the modulus, when present, is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    operand: Operand,
    modulus: Option<u64>,
    negated: bool,
    ranges: Vec<RangeInclusive<u64>>,
}

#[bon]
impl Relation {
    /// Build a relation.
    ///
    /// Returns `None` if `ranges` is empty or `modulus` is zero.
    ///
    /// ```
    /// use cldr_plurals::Operand;
    /// use cldr_plurals::parser::Relation;
    ///
    /// let relation = Relation::builder()
    ///     .operand(Operand::N)
    ///     .modulus(10)
    ///     .ranges(vec![2..=4])
    ///     .build()
    ///     .unwrap();
    /// assert!(relation.is_fulfilled(23));
    /// assert!(!relation.is_fulfilled(25));
    /// ```
    #[builder]
    pub fn new(
        operand: Operand,
        modulus: Option<u64>,
        #[builder(default)] negated: bool,
        ranges: Vec<RangeInclusive<u64>>,
    ) -> Option<Self> {
        if ranges.is_empty() || modulus == Some(0) {
            return None;
        }
        Some(Self {
            operand,
            modulus,
            negated,
            ranges,
        })
    }
}

impl Relation {
    pub fn operand(&self) -> Operand {
        self.operand
    }

    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    /// True for `!=`, false for `=`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn ranges(&self) -> &[RangeInclusive<u64>] {
        &self.ranges
    }

    /// Test the relation against an already extracted operand value.
    pub fn holds_for(&self, value: u64) -> bool {
        let value = match self.modulus {
            Some(divisor) => value % divisor,
            None => value,
        };
        self.ranges.iter().any(|range| range.contains(&value)) != self.negated
    }

    /// Evaluate the relation for the integer quantity `n`.
    pub fn is_fulfilled(&self, n: i64) -> bool {
        let value = if self.operand.is_integer_valued() {
            n.unsigned_abs()
        } else {
            0
        };
        self.holds_for(value)
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operand)?;
        if let Some(divisor) = self.modulus {
            write!(f, " % {divisor}")?;
        }
        f.write_str(if self.negated { " != " } else { " = " })?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}..{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

/// Renders rule text. The literals print as `true` and `false`, which the
/// grammar does not accept; every other parsed tree reparses equivalently.
impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::True => f.write_str("true"),
            Condition::False => f.write_str("false"),
            Condition::Relation(relation) => write!(f, "{relation}"),
            Condition::And(left, right) => {
                write_conjunct(f, left)?;
                f.write_str(" and ")?;
                write_conjunct(f, right)
            }
            Condition::Or(left, right) => write!(f, "{left} or {right}"),
        }
    }
}

/// `or` binds looser than `and`, so a disjunction under a conjunction needs
/// parentheses to keep its meaning.
fn write_conjunct(f: &mut Formatter<'_>, condition: &Condition) -> fmt::Result {
    match condition {
        Condition::Or(..) => write!(f, "({condition})"),
        _ => write!(f, "{condition}"),
    }
}
