//! Keypad rendering and mouse hit-testing for the terminal front end
//!
//! Clicks are the only way to enter numbers; hit-testing mirrors the grid
//! the widget draws so a click lands on the cell it visually hits.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operator;
use crate::keypad::{ButtonKind, Keypad, KeypadButton};

/// Geometry of the keypad grid inside a bordered area
pub trait KeypadGeometry {
    /// Size of one button cell (width, height); `None` if the area is too small
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)>;

    /// Converts a click position to a button index
    fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize>;

    /// Screen position of the middle of a button cell
    fn button_center(&self, area: Rect, index: usize) -> Option<(u16, u16)>;
}

impl KeypadGeometry for Keypad {
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let (rows, cols) = self.dimensions();
        let btn_width = area.width.saturating_sub(2) / cols as u16;
        let btn_height = area.height.saturating_sub(2) / rows as u16;
        if btn_width == 0 || btn_height == 0 {
            None
        } else {
            Some((btn_width, btn_height))
        }
    }

    fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border takes one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area)?;
        let col = usize::from((rel_x - 1) / btn_width);
        let row = usize::from((rel_y - 1) / btn_height);

        let (rows, cols) = self.dimensions();
        if row < rows && col < cols {
            Some(row * cols + col)
        } else {
            None
        }
    }

    fn button_center(&self, area: Rect, index: usize) -> Option<(u16, u16)> {
        let button = self.get_button(index)?;
        let (btn_width, btn_height) = self.cell_size(area)?;
        let x = area.x + 1 + button.col as u16 * btn_width + btn_width / 2;
        let y = area.y + 1 + button.row as u16 * btn_height + btn_height / 2;
        Some((x, y))
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active_operator: Option<Operator>,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active_operator: None,
            pressed: None,
        }
    }

    /// Draws the button for `operator` as selected
    #[must_use]
    pub fn active_operator(mut self, operator: Option<Operator>) -> Self {
        self.active_operator = operator;
        self
    }

    /// Highlights the button under the mouse
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }

    fn button_style(&self, index: usize, button: &KeypadButton) -> Style {
        if self.pressed == Some(index) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD);
        }

        match button.kind {
            ButtonKind::Operator
                if self.active_operator.is_some() && button.operator() == self.active_operator =>
            {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            }
            ButtonKind::Operator => Style::default().fg(Color::Yellow),
            ButtonKind::Digit => Style::default().fg(Color::White),
            ButtonKind::Function => Style::default().fg(Color::Gray),
            ButtonKind::Equals => Style::default().fg(Color::Green),
            ButtonKind::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let Some((btn_width, btn_height)) = self.keypad.cell_size(area) else {
            return; // Too small to render
        };

        for (index, button) in self.keypad.buttons().enumerate() {
            let cell = Rect {
                x: area.x + 1 + button.col as u16 * btn_width,
                y: area.y + 1 + button.row as u16 * btn_height,
                width: btn_width,
                height: btn_height,
            };
            let style = self.button_style(index, button);

            let label = format!("[{}]", button.label);
            let label_width = label.chars().count() as u16;
            let label_x = cell.x + cell.width.saturating_sub(label_width) / 2;
            let label_y = cell.y + cell.height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), cell.width);
        }
    }
}
