//! Calculator evaluation state machine
//!
//! The engine turns a sequence of keypad presses into a running numeric
//! result and a pair of display strings. Evaluation is immediate and
//! strictly left-to-right: pressing an operator while another is pending
//! resolves the pending one first, so `2 + 3 × 4 =` is `(2 + 3) × 4 = 20`.
//! There is no precedence, no expression buffer and no error state — every
//! transition is a total function.

mod format;
mod operations;

pub use format::{format_value, MAX_PLAIN_WIDTH};
pub use operations::{Operator, UnknownOperator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One keypad press, the engine's entire input alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit key, `0`–`9`
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key (`C`)
    Clear,
    /// The backspace key (`⌫`)
    Backspace,
}

/// Error returned when a character maps to no keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no key assigned to {0:?}")]
pub struct UnknownKey(pub char);

impl TryFrom<char> for Key {
    type Error = UnknownKey;

    /// Maps a typed character to its keypad key. Digits, `.`, the operator
    /// glyphs and their ASCII equivalents, `=`, and `c`/`C` for clear.
    fn try_from(ch: char) -> Result<Self, UnknownKey> {
        if let Some(d) = ch.to_digit(10) {
            #[allow(clippy::cast_possible_truncation)]
            return Ok(Self::Digit(d as u8));
        }
        match ch {
            '.' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            other => Operator::try_from(other)
                .map(Self::Operator)
                .map_err(|UnknownOperator(c)| UnknownKey(c)),
        }
    }
}

/// The two lines a frontend renders after each press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The faded history line: pending value, its operator, and the
    /// in-progress right operand. Empty when no operation is pending.
    pub history: String,
    /// The main line: the entry buffer as typed or last computed
    pub value: String,
}

/// The pending left operand and its operator, always set and cleared as one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Pending {
    value: f64,
    op: Operator,
}

/// The calculator engine
///
/// Owns the single mutable state of the application: the entry buffer
/// (always a valid decimal numeral, never empty), the optional pending
/// operation, and the awaiting-new-entry flag set after an operator or
/// equals press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    entry: String,
    pending: Option<Pending>,
    awaiting_new_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a fresh engine displaying `"0"` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
            awaiting_new_entry: false,
        }
    }

    /// Returns the entry buffer — the main display line
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns the pending left operand, if an operation is in progress
    #[must_use]
    pub fn pending_value(&self) -> Option<f64> {
        self.pending.map(|p| p.value)
    }

    /// Returns the pending operator, if an operation is in progress
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.op)
    }

    /// Returns true when the next digit press starts a fresh entry
    #[must_use]
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Dispatches one keypad press to the matching transition
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.input_equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Appends a digit, starting a fresh entry after an operator/equals
    /// press and collapsing a leading `"0"`.
    ///
    /// Values above 9 are not digits and are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.awaiting_new_entry {
            self.entry.clear();
            self.entry.push(ch);
            self.awaiting_new_entry = false;
        } else if self.entry == "0" {
            self.entry.clear();
            self.entry.push(ch);
        } else {
            self.entry.push(ch);
        }
    }

    /// Appends a decimal point; a no-op if the entry already has one.
    /// After an operator/equals press the fresh entry becomes `"0."`.
    pub fn input_decimal(&mut self) {
        if self.awaiting_new_entry {
            self.entry.clear();
            self.entry.push_str("0.");
            self.awaiting_new_entry = false;
        } else if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    /// Records an operator, first resolving any already-pending operation
    /// against the current entry (left-to-right immediate evaluation).
    pub fn input_operator(&mut self, op: Operator) {
        let current = self.current_value();
        let value = match self.pending {
            None => current,
            Some(p) => {
                let result = p.op.apply(p.value, current);
                self.entry = format_value(result);
                result
            }
        };
        self.pending = Some(Pending { value, op });
        self.awaiting_new_entry = true;
    }

    /// Resolves the pending operation against the current entry. A no-op
    /// when nothing is pending.
    ///
    /// When equals follows an operator press directly, the entry buffer
    /// still holds the operator's left-hand result, so that value doubles
    /// as the right operand: `4 + 5 − =` yields `9 − 9 = 0`.
    pub fn input_equals(&mut self) {
        if let Some(p) = self.pending.take() {
            let current = self.current_value();
            self.entry = format_value(p.op.apply(p.value, current));
            self.awaiting_new_entry = true;
        }
    }

    /// Resets the engine to its initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drops the last character of the entry, bottoming out at `"0"`.
    /// The pending operation is untouched.
    pub fn backspace(&mut self) {
        if self.entry.len() > 1 {
            self.entry.pop();
        } else {
            self.entry.clear();
            self.entry.push('0');
        }
    }

    /// Produces the history and main display lines for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            history: self.history_line(),
            value: self.entry.clone(),
        }
    }

    /// The faded line above the main display: `pending op entry`, with the
    /// entry part omitted while a fresh one is still awaited.
    fn history_line(&self) -> String {
        match self.pending {
            None => String::new(),
            Some(p) => {
                let rhs = if self.awaiting_new_entry {
                    ""
                } else {
                    self.entry.as_str()
                };
                format!("{}{}{rhs}", format_value(p.value), p.op.symbol())
            }
        }
    }

    /// Parses the entry buffer as the current operand.
    ///
    /// The buffer is a valid numeral by construction (including `"0."`,
    /// `"inf"` and `"NaN"`, which `f64` parses), so the fallback is
    /// unreachable in practice.
    fn current_value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }
}
