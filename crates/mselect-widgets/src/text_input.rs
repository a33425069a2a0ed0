//! Single-line text input that reports every edit as a
//! [`Message::Changed`] carrying the new value.

use mselect_core::command::Command;
use mselect_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Style configuration for the text input.
#[derive(Debug, Clone)]
pub struct TextInputStyle {
    /// Style applied to the prompt string.
    pub prompt: Style,
    /// Style applied to the input text.
    pub text: Style,
    /// Style applied to the placeholder text.
    pub placeholder: Style,
    /// Style applied to the cursor cell.
    pub cursor: Style,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(Color::Cyan),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Messages for the text input component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Insert pasted text at the cursor.
    Paste(String),
    /// Emitted after any edit, with the new value.
    Changed(String),
}

/// A single-line text input component.
///
/// ```ignore
/// let mut input = TextInput::new("Search character").with_prompt("> ");
/// input.focus();
/// // update:  Msg::Input(m) => self.input.update(m).map(Msg::Input)
/// // view:    self.input.view(frame, area)
/// ```
pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    placeholder: String,
    prompt: String,
    style: TextInputStyle,
}

impl TextInput {
    /// Create a new text input with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: false,
            placeholder: placeholder.into(),
            prompt: String::new(),
            style: TextInputStyle::default(),
        }
    }

    /// Set a prompt string displayed before the input (e.g., `> `).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set custom styles for the input.
    pub fn with_style(mut self, style: TextInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Give this input keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
    }

    /// Cursor position as a character index.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn insert(&mut self, text: &str) -> Command<Message> {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
        if chars.is_empty() {
            return Command::none();
        }
        let n = chars.len();
        self.value.splice(self.cursor..self.cursor, chars);
        self.cursor += n;
        self.changed()
    }

    fn delete_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_forward(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_word_backward(&mut self) -> Command<Message> {
        let end = self.cursor;
        let mut start = end;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        if start == end {
            return Command::none();
        }
        self.value.drain(start..end);
        self.cursor = start;
        self.changed()
    }

    fn delete_to_start(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.value.drain(..self.cursor);
        self.cursor = 0;
        self.changed()
    }

    fn delete_to_end(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.truncate(self.cursor);
        self.changed()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            KeyCode::Char('u') if ctrl => self.delete_to_start(),
            KeyCode::Char('k') if ctrl => self.delete_to_end(),
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                Command::none()
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.len();
                Command::none()
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let mut buf = [0u8; 4];
                self.insert(c.encode_utf8(&mut buf))
            }
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
                self.delete_word_backward()
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Command::none()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Command::none()
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                Command::none()
            }
            _ => Command::none(),
        }
    }
}

impl Component for TextInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::Paste(text) if self.focus => self.insert(&text),
            Message::KeyPress(_) | Message::Paste(_) | Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        if !self.prompt.is_empty() {
            spans.push(Span::styled(self.prompt.as_str(), self.style.prompt));
        }

        if self.value.is_empty() {
            if self.focus {
                spans.push(Span::styled(" ", self.style.cursor));
            }
            spans.push(Span::styled(self.placeholder.as_str(), self.style.placeholder));
        } else {
            // Scroll horizontally so the cursor cell stays on screen.
            let available = (area.width as usize)
                .saturating_sub(self.prompt.width())
                .max(1);
            let offset = (self.cursor + 1).saturating_sub(available);
            let end = (offset + available).min(self.value.len());

            let before: String = self.value[offset..self.cursor.max(offset)].iter().collect();
            spans.push(Span::styled(before, self.style.text));
            if self.focus {
                let at_cursor = self
                    .value
                    .get(self.cursor)
                    .map_or_else(|| " ".to_string(), char::to_string);
                spans.push(Span::styled(at_cursor, self.style.cursor));
                if self.cursor < end {
                    let after: String = self.value[self.cursor + 1..end].iter().collect();
                    spans.push(Span::styled(after, self.style.text));
                }
            } else if self.cursor < end {
                let after: String = self.value[self.cursor..end].iter().collect();
                spans.push(Span::styled(after, self.style.text));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> Message {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("Search");
        input.focus();
        for c in text.chars() {
            input.update(key(KeyCode::Char(c)));
        }
        input
    }

    fn changed(cmd: Command<Message>) -> Option<String> {
        match cmd.into_message() {
            Some(Message::Changed(v)) => Some(v),
            _ => None,
        }
    }

    #[test]
    fn typing_reports_each_value() {
        let mut input = typed("Ric");
        let cmd = input.update(key(KeyCode::Char('k')));
        assert_eq!(changed(cmd).as_deref(), Some("Rick"));
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut input = TextInput::new("Search");
        assert!(input.update(key(KeyCode::Char('a'))).is_none());
        assert!(input.is_empty());
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = typed("Morty");
        assert_eq!(changed(input.update(key(KeyCode::Backspace))).as_deref(), Some("Mort"));
        input.update(key(KeyCode::Home));
        assert_eq!(changed(input.update(key(KeyCode::Delete))).as_deref(), Some("ort"));
        input.update(key(KeyCode::Home));
        assert!(input.update(key(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn cursor_movement_does_not_report_change() {
        let mut input = typed("abc");
        assert!(input.update(key(KeyCode::Left)).is_none());
        assert!(input.update(key(KeyCode::Right)).is_none());
        assert!(input.update(key(KeyCode::Right)).is_none());
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn ctrl_edits() {
        let mut input = typed("rick sanchez");
        let cmd = input.update(key_with(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(changed(cmd).as_deref(), Some("rick "));
        let cmd = input.update(key_with(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(changed(cmd).as_deref(), Some(""));
        assert!(input.is_empty());
    }

    #[test]
    fn paste_inserts_at_cursor() {
        let mut input = typed("Rick");
        input.update(key(KeyCode::Home));
        let cmd = input.update(Message::Paste("Evil\n".into()));
        assert_eq!(changed(cmd).as_deref(), Some("EvilRick"));
    }

    #[test]
    fn unicode_counts_characters() {
        let input = typed("Señor");
        assert_eq!(input.len(), 5);
        assert_eq!(input.value(), "Señor");
    }
}
