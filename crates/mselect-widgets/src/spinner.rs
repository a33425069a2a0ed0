//! Animated loading indicator.
//!
//! The spinner only asks for timer ticks while it is spinning, so a stopped
//! spinner costs nothing.

use mselect_core::command::Command;
use mselect_core::component::Component;
use mselect_core::subscription::{subscribe, Subscription};
use mselect_core::subscriptions::Every;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

/// Built-in frame sets.
pub mod frames {
    /// Braille dots cycling through ten positions.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    /// ASCII line: |, /, -, \.
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Advance to the next frame.
    Tick,
}

/// An animated spinner with an optional caption.
pub struct Spinner {
    frames: &'static [&'static str],
    frame_index: usize,
    title: String,
    style: Style,
    interval: Duration,
    spinning: bool,
    id: &'static str,
}

impl Spinner {
    /// Create a stopped spinner. `id` names its timer subscription.
    pub fn new(id: &'static str) -> Self {
        Self {
            frames: frames::DOTS,
            frame_index: 0,
            title: String::new(),
            style: Style::default().fg(Color::Cyan),
            interval: Duration::from_millis(80),
            spinning: false,
            id,
        }
    }

    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn start(&mut self) {
        self.spinning = true;
    }

    pub fn stop(&mut self) {
        self.spinning = false;
        self.frame_index = 0;
    }

    /// Start or stop to match `loading`.
    pub fn set_spinning(&mut self, loading: bool) {
        if loading {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The frame that would be drawn now.
    pub fn current_frame(&self) -> &'static str {
        self.frames.get(self.frame_index).copied().unwrap_or("")
    }
}

impl Component for Spinner {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tick => {
                if self.spinning && !self.frames.is_empty() {
                    self.frame_index = (self.frame_index + 1) % self.frames.len();
                }
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if !self.spinning || area.width == 0 || area.height == 0 {
            return;
        }
        let text = if self.title.is_empty() {
            self.current_frame().to_string()
        } else {
            format!("{} {}", self.current_frame(), self.title)
        };
        let paragraph = Paragraph::new(Span::styled(text, self.style)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.spinning {
            vec![subscribe(Every::new(self.interval, self.id)).map(|_| Message::Tick)]
        } else {
            vec![]
        }
    }
}
