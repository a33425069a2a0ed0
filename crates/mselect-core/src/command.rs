use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// The model never performs I/O itself. It describes the work as a `Command`
/// and the runtime carries it out, feeding any result back in as a message.
///
/// ```rust,ignore
/// // Fetch a page and deliver the outcome as a message:
/// let cmd = Command::perform(source.fetch_page(query), Msg::PageLoaded);
///
/// // Leave the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Quit,
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Terminal management commands executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Start reporting mouse presses, releases, drags and wheel events.
    EnableMouseCapture,
    /// Stop reporting mouse events.
    DisableMouseCapture,
    /// Set the terminal window title.
    SetTitle(String),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver `msg` back to `update` on the next loop iteration.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Quit,
        }
    }

    /// Run an async future on the runtime and map its output to a message.
    ///
    /// The future runs concurrently with the event loop. Its message arrives
    /// whenever it completes, so several `perform` commands may finish in any
    /// order. Models that care about ordering must tag their messages.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Run multiple commands concurrently.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.remove(0),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Terminal management command.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command {
            inner: CommandInner::Terminal(cmd),
        }
    }

    /// Request the current terminal size. The callback receives (columns, rows).
    pub fn window_size(map: impl FnOnce(u16, u16) -> Msg + Send + 'static) -> Self {
        Command::perform(
            async { crossterm::terminal::size().unwrap_or((80, 24)) },
            move |(cols, rows)| map(cols, rows),
        )
    }

    /// Enable mouse capture.
    pub fn enable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Command::terminal(TerminalCommand::SetTitle(title.into()))
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Quit => Command::quit(),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter().map(|cmd| cmd.map_with(f.clone())).collect(),
                ),
            },
            CommandInner::Terminal(tcmd) => Command::terminal(tcmd),
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Returns `true` if this command, or any command in its batch, spawns
    /// async work.
    pub fn is_async(&self) -> bool {
        match &self.inner {
            CommandInner::Future(_) => true,
            CommandInner::Batch(cmds) => cmds.iter().any(Command::is_async),
            _ => false,
        }
    }

    /// Returns `true` if this is a quit command.
    pub fn is_quit(&self) -> bool {
        matches!(self.inner, CommandInner::Quit)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
        assert!(!cmd.is_async());
    }

    #[test]
    fn message_round_trips() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn batch_drops_noops() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::none()]);
        assert!(cmd.is_none());

        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(7)]);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn batch_keeps_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        assert_eq!(cmd.into_batch().map(|cmds| cmds.len()), Some(2));
    }

    #[test]
    fn perform_is_async_inside_batch() {
        let cmd: Command<i32> =
            Command::batch(vec![Command::message(1), Command::perform(async { 2 }, |n| n)]);
        assert!(cmd.is_async());
    }

    #[test]
    fn map_preserves_shape() {
        let mapped: Command<String> = Command::message(42).map(|n: i32| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));

        let mapped: Command<String> = Command::<i32>::quit().map(|n| n.to_string());
        assert!(mapped.is_quit());

        let mapped: Command<String> = Command::<i32>::set_title("t").map(|n| n.to_string());
        assert!(matches!(
            mapped.inner,
            CommandInner::Terminal(TerminalCommand::SetTitle(ref s)) if s == "t"
        ));
    }

    #[tokio::test]
    async fn map_applies_to_future_output() {
        let mapped: Command<String> =
            Command::perform(async { 5 }, |n: i32| n * 2).map(|n| format!("n={n}"));
        match mapped.inner {
            CommandInner::Future(fut) => assert_eq!(fut.await, "n=10"),
            _ => panic!("expected a future"),
        }
    }
}
