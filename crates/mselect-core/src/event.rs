use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal input as seen by models.
///
/// Delivered through [`terminal_events`](crate::subscriptions::terminal_events)
/// subscriptions, each of which maps the events it cares about into the
/// model's own message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (requires mouse capture).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
    /// Focus changes and anything else the models do not consume.
    Other,
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::Paste(s) => TerminalEvent::Paste(s),
            Event::FocusGained | Event::FocusLost => TerminalEvent::Other,
        }
    }
}
