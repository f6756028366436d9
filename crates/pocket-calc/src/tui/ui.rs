//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title shown on the calculator panel
pub const APP_TITLE: &str = " Calculator App ";

/// Hint shown under the keypad
pub const QUIT_HINT: &str = " click keys · q quits ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let view = self.app.view();
        let lines = vec![
            Line::from(Span::styled(
                view.secondary_text().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                view.primary,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CalculatorApp::layout(area);

        Block::default()
            .title(Line::from(APP_TITLE).centered())
            .title_bottom(Line::from(QUIT_HINT).centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(layout.panel, buf);

        self.render_display(layout.display, buf);

        KeypadWidget::new(self.app.keypad())
            .active_operator(self.app.view().active_operator)
            .pressed(self.app.pressed())
            .render(layout.keypad, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 24);
        Terminal::new(backend).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        let start = usize::from(row) * width;
        buffer.content()[start..start + width]
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_initial() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();

        let content = screen_text(&terminal);
        assert!(content.contains("Calculator App"));
        assert!(content.contains("[AC]"));
        assert!(content.contains("[=]"));
        assert!(content.contains("q quits"));
    }

    #[test]
    fn test_render_primary_right_aligned() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for label in ["1", "2", "5"] {
            app.press(label.parse().unwrap());
        }
        terminal.draw(|f| render(&app, f)).unwrap();

        // Display box spans rows 1..5; primary text sits on row 3
        let display = CalculatorApp::layout(Rect::new(0, 0, 60, 24)).display;
        let row = row_text(&terminal, display.y + 2);
        let inner_end = usize::from(display.right() - 1);
        let line: String = row.chars().take(inner_end).collect();
        assert!(line.trim_end().ends_with("125"), "row was {row:?}");
    }

    #[test]
    fn test_render_secondary_line() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for label in ["7", "×"] {
            app.press(label.parse().unwrap());
        }
        terminal.draw(|f| render(&app, f)).unwrap();

        let display = CalculatorApp::layout(Rect::new(0, 0, 60, 24)).display;
        assert!(row_text(&terminal, display.y + 1).contains("7 ×"));
    }

    #[test]
    fn test_render_active_operator_highlighted() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for label in ["7", "+"] {
            app.press(label.parse().unwrap());
        }
        terminal.draw(|f| render(&app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let highlighted = buffer
            .content()
            .iter()
            .filter(|c| c.bg == Color::Yellow)
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(highlighted, "[+]");
    }

    #[test]
    fn test_render_non_finite_result() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for label in ["1", "÷", "0", "="] {
            app.press(label.parse().unwrap());
        }
        terminal.draw(|f| render(&app, f)).unwrap();
        assert!(screen_text(&terminal).contains("Infinity"));
    }

    #[test]
    fn test_render_small_terminal() {
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = CalculatorApp::new();
        // Should not panic
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal() {
        let backend = TestBackend::new(3, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
    }
}
