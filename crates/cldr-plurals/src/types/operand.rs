use std::fmt::{self, Display, Formatter};

/// A quantity a CLDR relation can test.
///
/// CLDR derives these from the textual form of the source number. Only `N`
/// (absolute value) and `I` (integer digits) carry information for plain
/// integers; the rest are zero for any integer without a visible fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Absolute value of the source number.
    N,
    /// Integer digits.
    I,
    /// Visible fraction digits, with trailing zeros.
    F,
    /// Visible fraction digits, without trailing zeros.
    T,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Compact decimal exponent. Written as either `c` or `e`.
    C,
}

impl Operand {
    /// Map a grammar letter to its operand.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Operand::N),
            'i' => Some(Operand::I),
            'f' => Some(Operand::F),
            't' => Some(Operand::T),
            'v' => Some(Operand::V),
            'w' => Some(Operand::W),
            'c' | 'e' => Some(Operand::C),
            _ => None,
        }
    }

    /// Whether this operand can be nonzero for an integer quantity.
    pub fn is_integer_valued(self) -> bool {
        matches!(self, Operand::N | Operand::I)
    }

    pub fn as_char(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::V => 'v',
            Operand::W => 'w',
            Operand::C => 'c',
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
