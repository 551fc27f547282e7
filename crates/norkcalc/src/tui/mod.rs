//! Terminal frontend
//!
//! A two-screen ratatui app: the calculator with its button grid, and an
//! about page. Everything in here is presentation: input mapping, the
//! button grid, the palettes, and the screen widgets. The engine is
//! consumed strictly through its press operations and display snapshot.

mod app;
mod input;
mod keypad;
mod theme;
mod ui;

pub use app::{App, Screen};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use theme::{ColorScheme, Theme, DARK, LIGHT};
pub use ui::{render, AboutScreen, CalculatorScreen};
