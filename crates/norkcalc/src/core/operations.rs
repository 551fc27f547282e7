//! Binary operators and their (total) application
//!
//! Every operator is a plain IEEE-754 binary function: division by zero
//! yields a signed infinity (or NaN for `0 ÷ 0`), modulo is the
//! floating-point remainder with the sign of the left operand. Nothing in
//! here can fail, which is what keeps the whole engine total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type-safe binary operator enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Modulo (%)
    Modulo,
}

impl Operator {
    /// Returns the operator glyph shown on the keypad and in the history line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",  // −
            Self::Multiply => "\u{00d7}",  // ×
            Self::Divide => "\u{00f7}",    // ÷
            Self::Modulo => "%",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Total by construction: `a ÷ 0` is `±inf` per IEEE-754 (NaN when `a`
    /// is also zero) and `a % 0` is NaN. Callers never see an error.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Modulo => a % b,
        }
    }
}

/// Error returned when a character maps to no operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no operator assigned to {0:?}")]
pub struct UnknownOperator(pub char);

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    /// Accepts both the keypad glyphs (`− × ÷`) and their ASCII keyboard
    /// equivalents (`- * /`).
    fn try_from(ch: char) -> Result<Self, UnknownOperator> {
        match ch {
            '+' => Ok(Self::Add),
            '-' | '\u{2212}' => Ok(Self::Subtract),
            '*' | '\u{00d7}' => Ok(Self::Multiply),
            '/' | '\u{00f7}' => Ok(Self::Divide),
            '%' => Ok(Self::Modulo),
            other => Err(UnknownOperator(other)),
        }
    }
}
