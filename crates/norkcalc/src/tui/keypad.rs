//! The calculator button grid
//!
//! A 5×4 grid of buttons:
//!
//! ```text
//! [ C ] [ ÷ ] [ % ] [ + ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ . ] [ 0 ] [ ⌫ ] [ = ]
//! ```
//!
//! `+` appears twice; the duplication is intentional and both buttons reach
//! the same add operation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::core::{Key, Operator};
use crate::tui::theme::Theme;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The engine key this button presses
    pub key: Key,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            pressed: false,
            key: Key::Digit(d),
        }
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol().chars().next().unwrap_or('?'),
            pressed: false,
            key: Key::Operator(op),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub const fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            key: Key::Decimal,
        }
    }

    /// Creates the equals button
    #[must_use]
    pub const fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            key: Key::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub const fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            key: Key::Clear,
        }
    }

    /// Creates the backspace button
    #[must_use]
    pub const fn backspace() -> Self {
        Self {
            label: '\u{232b}', // ⌫
            pressed: false,
            key: Key::Backspace,
        }
    }

    /// Sets the highlighted state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true for buttons drawn in the accent color (operators and
    /// equals)
    #[must_use]
    pub const fn is_accent(&self) -> bool {
        matches!(self.key, Key::Operator(_) | Key::Equals)
    }
}

/// The keypad: buttons in row-major order over a fixed 5×4 grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ÷ % +
            KeypadButton::clear(),
            KeypadButton::operator(Operator::Divide),
            KeypadButton::operator(Operator::Modulo),
            KeypadButton::operator(Operator::Add),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 4 5 6 −
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            // Row 5: . 0 ⌫ =
            KeypadButton::decimal(),
            KeypadButton::digit(0),
            KeypadButton::backspace(),
            KeypadButton::equals(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the first button pressing the given engine key
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Finds a button by its label glyph
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Removes all highlighting
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button matching an engine key, releasing the rest
    pub fn highlight_key(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button_by_key(key) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        let btn_width = area.width / self.cols as u16;
        let btn_height = area.height / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (rel_x / btn_width) as usize;
        let row = (rel_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: &'a Theme,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget drawn with the given palette
    #[must_use]
    pub const fn new(keypad: &'a Keypad, theme: &'a Theme) -> Self {
        Self { keypad, theme }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < self.keypad.cols as u16 || area.height < self.keypad.rows as u16 {
            return; // Too small to render
        }

        let btn_width = area.width / self.keypad.cols as u16;
        let btn_height = area.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = area.x + (col as u16 * btn_width);
            let y = area.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(self.theme.background)
                    .bg(self.theme.text)
                    .add_modifier(Modifier::BOLD)
            } else if btn.is_accent() {
                Style::default()
                    .fg(self.theme.accent_text)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text).bg(self.theme.button)
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < area.y + area.height && label_x < area.x + area.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
