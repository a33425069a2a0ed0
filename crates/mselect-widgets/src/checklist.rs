//! Scrollable list of checkbox rows.
//!
//! Every item takes two terminal rows: a checkbox with a title, then a dimmed
//! detail line. The list never decides what "checked" means; it reports
//! [`Message::Toggled`] with an item index and renders whatever rows its
//! owner hands it through [`Checklist::set_rows`].
//!
//! Each scroll movement emits [`Message::Scrolled`] with the new
//! [`ScrollMetrics`], so owners can react to the viewport reaching the end
//! of the content (for example to load more rows).

use crate::selection::{ScrollMetrics, ScrollState};
use mselect_core::command::Command;
use mselect_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;
use std::cell::Cell;

/// Rows occupied by one item.
pub const ITEM_HEIGHT: usize = 2;

/// One checkable item.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRow {
    pub key: String,
    pub title: Line<'static>,
    pub detail: String,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct ChecklistStyle {
    pub checkbox: Style,
    pub detail: Style,
    pub cursor: Style,
}

impl Default for ChecklistStyle {
    fn default() -> Self {
        Self {
            checkbox: Style::default().fg(Color::Cyan),
            detail: Style::default().fg(Color::DarkGray),
            cursor: Style::default().bg(Color::Rgb(40, 44, 52)),
        }
    }
}

/// Messages for the checklist.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event: arrows, paging, Home/End, Enter to toggle.
    KeyPress(KeyEvent),
    /// A mouse wheel notch.
    Wheel { up: bool },
    /// A pointer press at absolute terminal coordinates.
    Click { column: u16, row: u16 },
    /// Emitted after the view moved.
    Scrolled(ScrollMetrics),
    /// Emitted when the item at this index should flip.
    Toggled(usize),
}

pub struct Checklist {
    rows: Vec<CheckRow>,
    state: ScrollState,
    focus: bool,
    style: ChecklistStyle,
    area: Cell<Rect>,
}

impl Checklist {
    /// An empty list showing `viewport` rows.
    pub fn new(viewport: usize) -> Self {
        Self {
            rows: Vec::new(),
            state: ScrollState::new(ITEM_HEIGHT, viewport),
            focus: false,
            style: ChecklistStyle::default(),
            area: Cell::new(Rect::default()),
        }
    }

    pub fn with_style(mut self, style: ChecklistStyle) -> Self {
        self.style = style;
        self
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Replace the rows. Appending keeps cursor and scroll position.
    pub fn set_rows(&mut self, rows: Vec<CheckRow>) {
        self.state.set_count(rows.len());
        self.rows = rows;
    }

    /// Drop all rows and scroll back to the top.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.state.set_count(0);
        self.state.reset();
    }

    pub fn rows(&self) -> &[CheckRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn set_viewport(&mut self, rows: usize) {
        self.state.set_viewport(rows);
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.state.metrics()
    }

    fn scrolled(&self) -> Command<Message> {
        Command::message(Message::Scrolled(self.state.metrics()))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Up => self.state.move_up(),
            KeyCode::Down => self.state.move_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::Home => self.state.home(),
            KeyCode::End => self.state.end(),
            KeyCode::Enter if !self.rows.is_empty() => {
                return Command::message(Message::Toggled(self.state.cursor()));
            }
            _ => return Command::none(),
        }
        self.scrolled()
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Command<Message> {
        let area = self.area.get();
        let inside =
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom();
        if !inside {
            return Command::none();
        }
        match self.state.item_at_row((row - area.y) as usize) {
            Some(index) => {
                self.state.select(index);
                Command::message(Message::Toggled(index))
            }
            None => Command::none(),
        }
    }

    fn row_line(&self, row: usize) -> Option<Line<'static>> {
        let index = row / ITEM_HEIGHT;
        let item = self.rows.get(index)?;
        let mut line = if row % ITEM_HEIGHT == 0 {
            let mark = if item.checked { "[x] " } else { "[ ] " };
            let mut spans = vec![Span::styled(mark, self.style.checkbox)];
            spans.extend(item.title.spans.iter().cloned());
            Line::from(spans)
        } else {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(item.detail.clone(), self.style.detail),
            ])
        };
        if self.focus && index == self.state.cursor() {
            line = line.patch_style(self.style.cursor);
        }
        Some(line)
    }
}

impl Component for Checklist {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Wheel { up } => {
                let rows = ITEM_HEIGHT as isize;
                self.state.scroll_by(if up { -rows } else { rows });
                self.scrolled()
            }
            Message::Click { column, row } => self.handle_click(column, row),
            Message::Scrolled(_) | Message::Toggled(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let metrics = self.state.metrics();
        let lines: Vec<Line<'static>> = (metrics.offset..metrics.offset + area.height as usize)
            .map_while(|row| self.row_line(row))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);

        if metrics.content_height > metrics.viewport_height {
            let max = metrics.content_height - metrics.viewport_height;
            let mut scrollbar = ScrollbarState::new(max).position(metrics.offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar,
            );
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use mselect_core::testing::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn rows(n: usize) -> Vec<CheckRow> {
        (0..n)
            .map(|i| CheckRow {
                key: i.to_string(),
                title: Line::raw(format!("Item {i}")),
                detail: format!("{i} Episodes"),
                checked: i == 1,
            })
            .collect()
    }

    fn scrolled(cmd: Command<Message>) -> ScrollMetrics {
        match cmd.into_message() {
            Some(Message::Scrolled(m)) => m,
            other => panic!("expected Scrolled, got {other:?}"),
        }
    }

    fn draw(list: &Checklist, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("backend");
        terminal.draw(|f| list.view(f, f.area())).expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn end_reports_bottom() {
        let mut list = Checklist::new(6);
        list.set_rows(rows(10));
        let m = scrolled(list.update(key(KeyCode::End)));
        assert!(m.at_bottom());
        assert_eq!(m.content_height, 20);
    }

    #[test]
    fn wheel_moves_by_one_item() {
        let mut list = Checklist::new(6);
        list.set_rows(rows(10));
        assert_eq!(scrolled(list.update(Message::Wheel { up: false })).offset, 2);
        assert_eq!(scrolled(list.update(Message::Wheel { up: true })).offset, 0);
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn enter_toggles_cursor_item() {
        let mut list = Checklist::new(6);
        assert!(list.update(key(KeyCode::Enter)).is_none());
        list.set_rows(rows(3));
        list.update(key(KeyCode::Down));
        match list.update(key(KeyCode::Enter)).into_message() {
            Some(Message::Toggled(1)) => {}
            other => panic!("expected Toggled(1), got {other:?}"),
        }
    }

    #[test]
    fn renders_checkboxes_and_details() {
        let mut list = Checklist::new(4);
        list.set_rows(rows(3));
        let screen = draw(&list, 30, 4);
        assert!(screen.contains("[ ] Item 0"));
        assert!(screen.contains("0 Episodes"));
        assert!(screen.contains("[x] Item 1"));
        assert!(!screen.contains("Item 2"));
    }

    #[test]
    fn click_toggles_item_under_pointer() {
        let mut list = Checklist::new(4);
        list.set_rows(rows(3));
        draw(&list, 30, 4);
        // Row 3 is the detail line of item 1.
        match list.update(Message::Click { column: 5, row: 3 }).into_message() {
            Some(Message::Toggled(1)) => {}
            other => panic!("expected Toggled(1), got {other:?}"),
        }
        assert_eq!(list.cursor(), 1);
        assert!(list.update(Message::Click { column: 5, row: 9 }).is_none());
    }

    #[test]
    fn clear_resets_scroll() {
        let mut list = Checklist::new(4);
        list.set_rows(rows(10));
        list.update(key(KeyCode::End));
        list.clear();
        assert_eq!(list.metrics(), ScrollMetrics { offset: 0, content_height: 0, viewport_height: 4 });
    }
}
