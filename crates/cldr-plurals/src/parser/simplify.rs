//! Simplification of conditions for integer quantities.

use super::ast::{Condition, Relation};

impl Condition {
    /// Rewrite the tree for a domain of plain integers.
    ///
    /// Relations on operands that are always zero for integers (`f`, `t`,
    /// `v`, `w`, `c`/`e`) fold to their truth value at zero. `and` and `or`
    /// then fold against the literals, and a node whose two sides are
    /// equivalent collapses to one side. The result contains `True` or
    /// `False` only as the whole tree, never as a child.
    ///
    /// ```
    /// use cldr_plurals::parser::{Condition, parse_condition_unsimplified};
    ///
    /// let raw = parse_condition_unsimplified("i = 1 and v = 0").unwrap();
    /// assert_eq!(raw.simplify_for_integer().to_string(), "i = 1");
    ///
    /// let raw = parse_condition_unsimplified("v != 0").unwrap();
    /// assert_eq!(raw.simplify_for_integer(), Condition::False);
    /// ```
    pub fn simplify_for_integer(self) -> Condition {
        match self {
            Condition::Relation(relation) if !relation.operand().is_integer_valued() => {
                if relation.holds_for(0) {
                    Condition::True
                } else {
                    Condition::False
                }
            }
            Condition::And(left, right) => {
                match (left.simplify_for_integer(), right.simplify_for_integer()) {
                    (Condition::False, _) | (_, Condition::False) => Condition::False,
                    (Condition::True, other) | (other, Condition::True) => other,
                    (left, right) if left.equivalent_for_integer(&right) => left,
                    (left, right) => Condition::and(left, right),
                }
            }
            Condition::Or(left, right) => {
                match (left.simplify_for_integer(), right.simplify_for_integer()) {
                    (Condition::True, _) | (_, Condition::True) => Condition::True,
                    (Condition::False, other) | (other, Condition::False) => other,
                    (left, right) if left.equivalent_for_integer(&right) => left,
                    (left, right) => Condition::or(left, right),
                }
            }
            other => other,
        }
    }

    /// Structural equality where `n` and `i` count as the same operand.
    ///
    /// Meant for trees that were already passed through
    /// [`simplify_for_integer`](Self::simplify_for_integer).
    pub fn equivalent_for_integer(&self, other: &Condition) -> bool {
        match (self, other) {
            (Condition::True, Condition::True) | (Condition::False, Condition::False) => true,
            (Condition::Relation(a), Condition::Relation(b)) => a.equivalent_for_integer(b),
            (Condition::And(a_left, a_right), Condition::And(b_left, b_right))
            | (Condition::Or(a_left, a_right), Condition::Or(b_left, b_right)) => {
                a_left.equivalent_for_integer(b_left) && a_right.equivalent_for_integer(b_right)
            }
            _ => false,
        }
    }
}

impl Relation {
    /// Equality where `n` and `i` are interchangeable.
    pub fn equivalent_for_integer(&self, other: &Relation) -> bool {
        let same_operand = self.operand() == other.operand()
            || (self.operand().is_integer_valued() && other.operand().is_integer_valued());
        same_operand
            && self.modulus() == other.modulus()
            && self.is_negated() == other.is_negated()
            && self.ranges() == other.ranges()
    }
}
