//! Keyboard input handling
//!
//! Maps crossterm key events to typed actions: engine keys pass through as
//! [`Key`] presses, everything else (theme toggle, about screen, quit) is a
//! shell action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Key;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a keypad key to the engine
    Press(Key),
    /// Switch between the light and dark palettes
    ToggleTheme,
    /// Open the about screen, or close it when already open
    ToggleAbout,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// Digits, `.`, the operator characters, `=`/Enter, `c`/Esc (clear) and
    /// Backspace drive the engine; `t` toggles the theme, `i` the about
    /// screen; `q` and Ctrl+C quit.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('i') => KeyAction::ToggleAbout,
            KeyCode::Char(ch) => Key::try_from(ch)
                .map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Esc => KeyAction::Press(Key::Clear),
            KeyCode::Backspace => KeyAction::Press(Key::Backspace),
            _ => KeyAction::None,
        }
    }
}
