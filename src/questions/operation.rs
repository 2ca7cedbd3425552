//! Arithmetic operations.

use serde::{Deserialize, Serialize};

/// One of the four arithmetic operations a question can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown in the question text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Parse a display symbol. Accepts the ASCII forms `*`, `x` and `/` too.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' | '−' => Some(Operation::Subtract),
            '×' | '*' | 'x' => Some(Operation::Multiply),
            '÷' | '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Evaluate `lhs op rhs` in exact integer arithmetic.
    ///
    /// Returns `None` when the result is not a non-negative integer
    /// (negative difference, division by zero, or a remainder).
    #[must_use]
    pub fn apply(self, lhs: u32, rhs: u32) -> Option<u32> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide => {
                if rhs != 0 && lhs % rhs == 0 {
                    Some(lhs / rhs)
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
