//! Nork Calc — a two-screen keypad calculator
//!
//! The heart of the crate is [`core::Calculator`], an immediate-evaluation
//! state machine: each keypad press is one total transition, and after every
//! press the engine yields the two strings a frontend renders (the faded
//! history line and the main entry line). There is no operator precedence —
//! `2 + 3 × 4 =` evaluates left to right to `20` — and no error state:
//! division by zero simply displays infinity.
//!
//! The bundled frontend (feature `tui`, on by default) is a terminal
//! keypad: a 5×4 button grid, a light/dark theme toggle, and an about
//! screen.
//!
//! # Example
//!
//! ```rust
//! use norkcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for ch in "2+3*4=".chars() {
//!     calc.press(Key::try_from(ch).unwrap());
//! }
//! assert_eq!(calc.snapshot().value, "20");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_value, Calculator, Key, Operator, Snapshot, UnknownKey, UnknownOperator,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{App, ColorScheme, InputHandler, KeyAction, Screen};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.press(Key::Digit(2));
        calc.press(Key::Operator(Operator::Add));
        calc.press(Key::Digit(3));
        calc.press(Key::Equals);
        assert_eq!(calc.snapshot().value, "5");
    }

    #[test]
    fn test_format_value_reexport() {
        assert_eq!(format_value(5.0), "5");
    }
}
