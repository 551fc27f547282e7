//! Screen rendering
//!
//! The two screens: the calculator (header, two-line display, keypad)
//! and the static about page. Widgets draw from the active palette only;
//! all state lives in [`App`].

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use super::app::{App, Screen};
use super::keypad::{Keypad, KeypadWidget};
use super::theme::Theme;

/// Application title shown in the header
pub const APP_TITLE: &str = "Nork Calc";

/// Hint shown on the left of the header
pub const ABOUT_HINT: &str = "(i) about";

/// The about screen's sections: a heading followed by its lines
pub const ABOUT_SECTIONS: &[(&str, &[&str])] = &[
    (
        "About Calculator",
        &["A simple and elegant calculator with basic arithmetic operations."],
    ),
    (
        "Features",
        &[
            "- Addition, subtraction, multiplication, division",
            "- Modulo (remainder) calculations",
            "- Decimal support",
            "- Clear to reset, backspace to delete the last digit",
            "- Dark and light mode",
        ],
    ),
    (
        "How to Use",
        &[
            "1. Enter a number (0-9)",
            "2. Select an operation (+, \u{2212}, \u{00d7}, \u{00f7}, %)",
            "3. Enter the second number",
            "4. Press = to see the result",
            "Use C to clear or \u{232b} to delete the last digit",
        ],
    ),
];

/// Hint at the bottom of the about screen
pub const ABOUT_BACK_HINT: &str = "Esc back \u{00b7} t theme \u{00b7} q quit";

/// Renders the visible screen to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    match app.screen() {
        Screen::Calculator => frame.render_widget(CalculatorScreen::new(app), area),
        Screen::About => frame.render_widget(AboutScreen::new(app), area),
    }
}

/// The calculator screen: header, display, keypad
#[derive(Debug)]
pub struct CalculatorScreen<'a> {
    app: &'a App,
    keypad: Keypad,
}

impl<'a> CalculatorScreen<'a> {
    /// Creates the calculator screen widget
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
        }
    }

    /// Splits the screen into header, display, and keypad areas
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Header
                Constraint::Min(4),     // Display
                Constraint::Length(10), // Keypad (5 rows x 2 cells)
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the header: about hint, title, theme toggle glyph
    fn render_header(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(8),
                Constraint::Length(4),
            ])
            .split(area);

        Paragraph::new(Span::styled(ABOUT_HINT, Style::default().fg(theme.muted)))
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(Span::styled(
            self.app.color_scheme().toggle_glyph(),
            Style::default().fg(theme.text),
        ))
        .alignment(Alignment::Right)
        .render(chunks[2], buf);
    }

    /// Renders the two right-aligned display lines above the keypad
    fn render_display(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let snap = self.app.snapshot();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        Paragraph::new(Span::styled(snap.history, Style::default().fg(theme.muted)))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);

        Paragraph::new(Span::styled(
            snap.value,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .render(chunks[2], buf);
    }
}

impl Widget for CalculatorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.color_scheme().theme();

        Block::default()
            .style(Style::default().bg(theme.background))
            .render(area, buf);

        let chunks = Self::create_layout(area);
        if chunks.len() < 3 {
            return;
        }

        self.render_header(chunks[0], buf, theme);
        self.render_display(chunks[1], buf, theme);
        KeypadWidget::new(&self.keypad, theme).render(chunks[2], buf);
    }
}

/// The static about screen
#[derive(Debug)]
pub struct AboutScreen<'a> {
    app: &'a App,
}

impl<'a> AboutScreen<'a> {
    /// Creates the about screen widget
    #[must_use]
    pub const fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Builds the about text as styled lines
    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "About",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (heading, body) in ABOUT_SECTIONS {
            lines.push(Line::from(Span::styled(
                *heading,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )));
            for text in *body {
                lines.push(Line::from(Span::styled(
                    *text,
                    Style::default().fg(theme.text),
                )));
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            format!("Calculator v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            ABOUT_BACK_HINT,
            Style::default().fg(theme.muted),
        )));

        lines
    }
}

impl Widget for AboutScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.color_scheme().theme();

        Block::default()
            .style(Style::default().bg(theme.background))
            .render(area, buf);

        Paragraph::new(Self::lines(theme)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Key;
    use crate::tui::input::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 20);
        Terminal::new(backend).unwrap()
    }

    fn buf_to_string(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Calculator screen tests =====

    #[test]
    fn test_render_initial_screen() {
        let app = App::new();
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains(APP_TITLE));
        assert!(content.contains("[7]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_render_shows_entry() {
        let mut app = App::new();
        for ch in "123".chars() {
            app.apply(KeyAction::Press(Key::try_from(ch).unwrap()));
        }
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("123"));
    }

    #[test]
    fn test_render_shows_history_line() {
        let mut app = App::new();
        for ch in "12+34".chars() {
            app.apply(KeyAction::Press(Key::try_from(ch).unwrap()));
        }
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("12+34"));
    }

    #[test]
    fn test_render_shows_about_hint_and_toggle_glyph() {
        let app = App::new();
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("(i)"));
        assert!(content.contains('☾')); // light scheme offers the dark toggle
    }

    #[test]
    fn test_render_dark_toggle_glyph() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleTheme);
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains('☀'));
    }

    #[test]
    fn test_render_infinity_result() {
        let mut app = App::new();
        for ch in "5/0=".chars() {
            app.apply(KeyAction::Press(Key::try_from(ch).unwrap()));
        }
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("inf"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = App::new();
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        // Should not panic even when nothing fits
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    // ===== About screen tests =====

    #[test]
    fn test_render_about_screen() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains("About Calculator"));
        assert!(content.contains("Features"));
        assert!(content.contains("How to Use"));
    }

    #[test]
    fn test_about_screen_hides_keypad() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(!content.contains("[7]"));
    }

    #[test]
    fn test_about_screen_shows_version() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        let mut terminal = create_test_terminal();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buf_to_string(terminal.backend().buffer());
        assert!(content.contains(env!("CARGO_PKG_VERSION")));
    }

    // ===== Constant tests =====

    #[test]
    fn test_about_sections_cover_all_operators() {
        let body: String = ABOUT_SECTIONS
            .iter()
            .flat_map(|(_, lines)| lines.iter())
            .copied()
            .collect();
        for glyph in ['+', '−', '×', '÷', '%'] {
            assert!(body.contains(glyph), "about text missing {glyph}");
        }
    }

    #[test]
    fn test_about_sections_nonempty() {
        assert!(ABOUT_SECTIONS.len() >= 3);
        for (heading, body) in ABOUT_SECTIONS {
            assert!(!heading.is_empty());
            assert!(!body.is_empty());
        }
    }

    // ===== Direct widget tests =====

    #[test]
    fn test_calculator_screen_layout() {
        let area = Rect::new(0, 0, 40, 20);
        let chunks = CalculatorScreen::create_layout(area);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 1); // header
        assert_eq!(chunks[2].height, 10); // keypad
    }

    #[test]
    fn test_calculator_screen_widget_direct() {
        let app = App::new();
        let screen = CalculatorScreen::new(&app);
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);

        screen.render(area, &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("Nork"));
    }

    #[test]
    fn test_about_screen_widget_direct() {
        let mut app = App::new();
        app.apply(KeyAction::ToggleAbout);
        let screen = AboutScreen::new(&app);
        let area = Rect::new(0, 0, 60, 25);
        let mut buf = Buffer::empty(area);

        screen.render(area, &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("Esc back"));
    }
}
