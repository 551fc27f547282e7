//! Light and dark color schemes
//!
//! Two fixed palettes toggled at runtime from the header. Each palette
//! covers the same roles: background, text, plain button, accent button.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which of the two palettes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl ColorScheme {
    /// Returns the other scheme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the palette for this scheme
    #[must_use]
    pub const fn theme(self) -> &'static Theme {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Returns the glyph shown on the header toggle: the symbol of the
    /// scheme a press would switch to
    #[must_use]
    pub const fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{263e}", // ☾ — press for dark
            Self::Dark => "\u{2600}",  // ☀ — press for light
        }
    }
}

/// A palette of display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// De-emphasized text (history line, hints)
    pub muted: Color,
    /// Plain button background (digits, decimal, backspace)
    pub button: Color,
    /// Accent button background (operators, equals)
    pub accent: Color,
    /// Text on accent buttons
    pub accent_text: Color,
}

/// The light palette
pub const LIGHT: Theme = Theme {
    background: Color::Rgb(0xf8, 0xf9, 0xfa),
    text: Color::Rgb(0x11, 0x11, 0x11),
    muted: Color::Rgb(0x6c, 0x75, 0x7d),
    button: Color::Rgb(0xe9, 0xec, 0xef),
    accent: Color::Rgb(0xff, 0x9f, 0x0a),
    accent_text: Color::Rgb(0xff, 0xff, 0xff),
};

/// The dark palette
pub const DARK: Theme = Theme {
    background: Color::Rgb(0x1c, 0x1c, 0x1e),
    text: Color::Rgb(0xf2, 0xf2, 0xf7),
    muted: Color::Rgb(0x8e, 0x8e, 0x93),
    button: Color::Rgb(0x2c, 0x2c, 0x2e),
    accent: Color::Rgb(0xff, 0x9f, 0x0a),
    accent_text: Color::Rgb(0xff, 0xff, 0xff),
};
