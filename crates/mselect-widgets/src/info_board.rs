//! Centered informational panel: a bold title over a dimmed, wrapped
//! description. Used for error and empty states in place of list content.

use mselect_core::command::Command;
use mselect_core::component::Component;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::convert::Infallible;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct InfoBoardStyle {
    pub title: Style,
    pub description: Style,
}

impl Default for InfoBoardStyle {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
        }
    }
}

/// A titled message panel.
#[derive(Debug, Clone)]
pub struct InfoBoard {
    title: String,
    description: String,
    style: InfoBoardStyle,
}

impl InfoBoard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            style: InfoBoardStyle::default(),
        }
    }

    pub fn with_style(mut self, style: InfoBoardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // Word wrapping can break earlier than the cell count suggests, so a
    // wrapped description gets one spare row.
    fn wrapped_height(&self, width: u16) -> u16 {
        let rows = |text: &str| -> u16 {
            let cells = text.width().max(1);
            cells.div_ceil(width.max(1) as usize) as u16
        };
        let description = rows(&self.description);
        let slack = u16::from(description > 1);
        rows(&self.title) + 1 + description + slack
    }
}

impl Component for InfoBoard {
    type Message = Infallible;

    fn update(&mut self, msg: Infallible) -> Command<Infallible> {
        match msg {}
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = vec![
            Line::from(Span::styled(self.title.as_str(), self.style.title)),
            Line::default(),
            Line::from(Span::styled(self.description.as_str(), self.style.description)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Center vertically on the wrapped height.
        let height = self.wrapped_height(area.width).min(area.height);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(paragraph, middle);
    }
}
