//! Removable chips laid out in wrapping rows.
//!
//! Each chip renders as ` label ✕ ` on a tinted background. Clicking a chip
//! (or [`Message::RemoveLast`]) emits [`Message::Removed`] with the chip's
//! key; the owner decides what removal means and calls
//! [`ChipBar::set_chips`] with the new list.

use mselect_core::command::Command;
use mselect_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::cell::Cell;
use unicode_width::UnicodeWidthStr;

const CLOSE: &str = "✕";

/// One removable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub key: String,
    pub label: String,
}

impl Chip {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    fn text(&self) -> String {
        format!(" {} {CLOSE} ", self.label)
    }
}

/// Style configuration for chips.
#[derive(Debug, Clone)]
pub struct ChipStyle {
    pub chip: Style,
    pub gap: u16,
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self {
            chip: Style::default().fg(Color::Black).bg(Color::Gray),
            gap: 1,
        }
    }
}

/// Messages for the chip bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer press at absolute terminal coordinates.
    Click { column: u16, row: u16 },
    /// Remove the most recently added chip.
    RemoveLast,
    /// Emitted when the chip with this key should be removed.
    Removed(String),
}

/// A wrapping row of removable chips.
pub struct ChipBar {
    chips: Vec<Chip>,
    style: ChipStyle,
    // Where the last frame drew us; clicks are resolved against it.
    area: Cell<Rect>,
}

impl Default for ChipBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipBar {
    pub fn new() -> Self {
        Self {
            chips: Vec::new(),
            style: ChipStyle::default(),
            area: Cell::new(Rect::default()),
        }
    }

    pub fn with_style(mut self, style: ChipStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_chips(&mut self, chips: Vec<Chip>) {
        self.chips = chips;
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Position of every chip inside `area`, wrapping to new rows as needed.
    /// Chips that do not fit vertically are left out.
    pub fn placements(&self, area: Rect) -> Vec<(usize, Rect)> {
        let mut out = Vec::with_capacity(self.chips.len());
        let (mut x, mut y) = (area.x, area.y);
        for (i, chip) in self.chips.iter().enumerate() {
            let width = (chip.text().width() as u16).min(area.width);
            if x > area.x && x + width > area.right() {
                x = area.x;
                y += 1;
            }
            if y >= area.bottom() {
                break;
            }
            out.push((i, Rect::new(x, y, width, 1)));
            x = x.saturating_add(width + self.style.gap);
        }
        out
    }

    /// Rows needed to show every chip at the given width.
    pub fn height_for(&self, width: u16) -> u16 {
        if self.chips.is_empty() || width == 0 {
            return 0;
        }
        let area = Rect::new(0, 0, width, u16::MAX);
        self.placements(area)
            .last()
            .map_or(0, |(_, rect)| rect.y + 1)
    }

    /// The chip under an absolute position, if any.
    pub fn chip_at(&self, area: Rect, column: u16, row: u16) -> Option<&Chip> {
        self.placements(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(i, _)| &self.chips[i])
    }
}

impl Component for ChipBar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Click { column, row } => match self.chip_at(self.area.get(), column, row) {
                Some(chip) => Command::message(Message::Removed(chip.key.clone())),
                None => Command::none(),
            },
            Message::RemoveLast => match self.chips.last() {
                Some(chip) => Command::message(Message::Removed(chip.key.clone())),
                None => Command::none(),
            },
            Message::Removed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        for (i, rect) in self.placements(area) {
            let chip = Paragraph::new(Span::styled(self.chips[i].text(), self.style.chip));
            frame.render_widget(chip, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mselect_core::testing::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn bar(labels: &[&str]) -> ChipBar {
        let mut bar = ChipBar::new();
        bar.set_chips(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| Chip::new(i.to_string(), *l))
                .collect(),
        );
        bar
    }

    #[test]
    fn placements_wrap() {
        // " Rick ✕ " is 8 cells wide.
        let bar = bar(&["Rick", "Rick", "Rick"]);
        let placed = bar.placements(Rect::new(0, 0, 18, 5));
        assert_eq!(placed[0].1, Rect::new(0, 0, 8, 1));
        assert_eq!(placed[1].1, Rect::new(9, 0, 8, 1));
        assert_eq!(placed[2].1, Rect::new(0, 1, 8, 1));
        assert_eq!(bar.height_for(18), 2);
        assert_eq!(bar.height_for(40), 1);
    }

    #[test]
    fn empty_has_no_height() {
        assert_eq!(ChipBar::new().height_for(40), 0);
    }

    #[test]
    fn chip_at_hits_and_misses() {
        let bar = bar(&["Rick", "Morty"]);
        let area = Rect::new(2, 3, 40, 1);
        assert_eq!(bar.chip_at(area, 2, 3).map(|c| c.key.as_str()), Some("0"));
        assert_eq!(bar.chip_at(area, 12, 3).map(|c| c.key.as_str()), Some("1"));
        assert!(bar.chip_at(area, 10, 3).is_none());
        assert!(bar.chip_at(area, 2, 4).is_none());
    }

    #[test]
    fn click_after_render_removes() {
        let mut bar = bar(&["Rick", "Morty"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).expect("backend");
        terminal
            .draw(|f| bar.view(f, f.area()))
            .expect("draw");
        assert!(buffer_to_string(terminal.backend().buffer()).contains("Morty ✕"));

        let cmd = bar.update(Message::Click { column: 11, row: 0 });
        match cmd.into_message() {
            Some(Message::Removed(key)) => assert_eq!(key, "1"),
            other => panic!("expected Removed, got {other:?}"),
        }
    }

    #[test]
    fn remove_last() {
        let mut bar = bar(&["Rick", "Morty"]);
        match bar.update(Message::RemoveLast).into_message() {
            Some(Message::Removed(key)) => assert_eq!(key, "1"),
            other => panic!("expected Removed, got {other:?}"),
        }
        assert!(ChipBar::new().update(Message::RemoveLast).is_none());
    }
}
