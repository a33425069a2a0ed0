use crate::command::{Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionId;
use futures::future::BoxFuture;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a terminal.
///
/// Immediate messages ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Async work
/// ([`Command::perform`]) is parked instead of spawned, so a test decides
/// exactly when, and in which order, each completion arrives:
///
/// ```rust,ignore
/// let mut prog = TestProgram::<App>::new(flags);
/// prog.send(Msg::Search("Rick".into()));
/// prog.resolve_all().await;          // deliver parked completions in order
/// assert!(prog.render_string(60, 20).contains("Rick Sanchez"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    parked: Vec<BoxFuture<'static, M::Message>>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            parked: Vec::new(),
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued immediate messages until none are left.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Number of async completions waiting to be resolved.
    pub fn parked_count(&self) -> usize {
        self.parked.len()
    }

    /// Take the parked futures out, oldest first, without running them.
    ///
    /// Lets a test await them itself and feed the results back through
    /// [`send`](TestProgram::send) in any order it likes.
    pub fn take_parked(&mut self) -> Vec<BoxFuture<'static, M::Message>> {
        std::mem::take(&mut self.parked)
    }

    /// Await every parked future in the order it was issued and feed each
    /// result into `update`, repeating until nothing new is parked.
    pub async fn resolve_all(&mut self) {
        loop {
            self.drain_messages();
            let parked = self.take_parked();
            if parked.is_empty() {
                break;
            }
            for fut in parked {
                let msg = fut.await;
                self.send(msg);
            }
        }
    }

    /// Whether the model has asked to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Ids of the subscriptions the model currently declares.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.model
            .subscriptions()
            .iter()
            .map(|sub| sub.id().clone())
            .collect()
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Terminal(_) => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit = true,
            CommandInner::Future(fut) => self.parked.push(fut),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer into text, rows separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
