//! Application shell
//!
//! Owns the engine plus everything that is presentation-only: which screen
//! is showing, which palette is active, and the quit flag. Input reaches the
//! engine exclusively through [`App::apply`], which also enforces the
//! screen-aware policy (keypad presses are ignored while the about screen
//! is open).

use crate::core::{Calculator, Key, Snapshot};
use crate::tui::input::KeyAction;
use crate::tui::theme::ColorScheme;

/// Which screen is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The keypad and display
    #[default]
    Calculator,
    /// The static informational screen
    About,
}

/// Calculator application state
#[derive(Debug, Default)]
pub struct App {
    /// The evaluation engine
    calc: Calculator,
    /// The visible screen
    screen: Screen,
    /// The active palette
    scheme: ColorScheme,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Creates a new app on the calculator screen with the light palette
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the visible screen
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the active color scheme
    #[must_use]
    pub const fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switches between the light and dark palettes
    pub fn toggle_theme(&mut self) {
        self.scheme = self.scheme.toggled();
    }

    /// Opens the about screen, or returns to the calculator if it is open
    pub fn toggle_about(&mut self) {
        self.screen = match self.screen {
            Screen::Calculator => Screen::About,
            Screen::About => Screen::Calculator,
        };
    }

    /// Forwards a keypad press to the engine
    pub fn press(&mut self, key: Key) {
        self.calc.press(key);
    }

    /// Returns the engine's current display snapshot
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.calc.snapshot()
    }

    /// Applies one input action according to the visible screen.
    ///
    /// Theme toggling and quitting work everywhere. On the about screen the
    /// keypad is inert; clear (Esc) and backspace double as back buttons.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::ToggleAbout => self.toggle_about(),
            KeyAction::Press(key) => match self.screen {
                Screen::Calculator => self.press(key),
                Screen::About => {
                    if matches!(key, Key::Clear | Key::Backspace) {
                        self.screen = Screen::Calculator;
                    }
                }
            },
            KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Calculator);
        assert_eq!(app.color_scheme(), ColorScheme::Light);
        assert!(!app.should_quit());
        assert_eq!(app.snapshot().value, "0");
    }

    #[test]
    fn test_app_default_matches_new() {
        let app = App::default();
        assert_eq!(app.screen(), App::new().screen());
        assert_eq!(app.color_scheme(), App::new().color_scheme());
    }

    // ===== Navigation tests =====

    #[test]
    fn test_toggle_about_round_trips() {
        let mut app = App::new();
        app.toggle_about();
        assert_eq!(app.screen(), Screen::About);
        app.toggle_about();
        assert_eq!(app.screen(), Screen::Calculator);
    }

    #[test]
    fn test_toggle_theme_round_trips() {
        let mut app = App::new();
        app.toggle_theme();
        assert_eq!(app.color_scheme(), ColorScheme::Dark);
        app.toggle_theme();
        assert_eq!(app.color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.apply(KeyAction::Quit);
        assert!(app.should_quit());
    }

    // ===== apply() policy tests =====

    #[test]
    fn test_apply_forwards_keys_on_calculator_screen() {
        let mut app = App::new();
        app.apply(KeyAction::Press(Key::Digit(4)));
        app.apply(KeyAction::Press(Key::Operator(Operator::Add)));
        app.apply(KeyAction::Press(Key::Digit(2)));
        app.apply(KeyAction::Press(Key::Equals));
        assert_eq!(app.snapshot().value, "6");
    }

    #[test]
    fn test_apply_ignores_keypad_on_about_screen() {
        let mut app = App::new();
        app.apply(KeyAction::Press(Key::Digit(5)));
        app.apply(KeyAction::ToggleAbout);
        app.apply(KeyAction::Press(Key::Digit(9)));
        app.apply(KeyAction::Press(Key::Equals));
        // Engine untouched while about is showing
        assert_eq!(app.snapshot().value, "5");
    }

    #[test]
    fn test_apply_escape_leaves_about_without_clearing() {
        let mut app = App::new();
        app.apply(KeyAction::Press(Key::Digit(5)));
        app.apply(KeyAction::ToggleAbout);
        app.apply(KeyAction::Press(Key::Clear));
        assert_eq!(app.screen(), Screen::Calculator);
        // The clear acted as "back", not as engine clear
        assert_eq!(app.snapshot().value, "5");
    }

    #[test]
    fn test_apply_backspace_leaves_about() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        app.apply(KeyAction::Press(Key::Backspace));
        assert_eq!(app.screen(), Screen::Calculator);
    }

    #[test]
    fn test_apply_theme_toggle_works_on_about_screen() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        app.apply(KeyAction::ToggleTheme);
        assert_eq!(app.color_scheme(), ColorScheme::Dark);
        assert_eq!(app.screen(), Screen::About);
    }

    #[test]
    fn test_apply_none_is_noop() {
        let mut app = App::new();
        app.apply(KeyAction::None);
        assert_eq!(app.screen(), Screen::Calculator);
        assert!(!app.should_quit());
        assert_eq!(app.snapshot().value, "0");
    }

    // ===== Display passthrough tests =====

    #[test]
    fn test_snapshot_history_line() {
        let mut app = App::new();
        app.apply(KeyAction::Press(Key::Digit(8)));
        app.apply(KeyAction::Press(Key::Operator(Operator::Divide)));
        let snap = app.snapshot();
        assert_eq!(snap.history, "8÷");
        assert_eq!(snap.value, "8");
    }
}
