use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`].
///
/// Same shape as [`Model`](crate::Model), but the parent decides where the
/// component draws by handing it an `area`. Parents wrap the component's
/// message in one of their own variants and lift returned commands with
/// [`Command::map`]:
///
/// ```rust,ignore
/// Msg::Input(m) => self.input.update(m).map(Msg::Input),
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must stay inside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Listeners for this component. The parent collects and maps them into
    /// its own [`Model::subscriptions`](crate::Model::subscriptions).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has keyboard focus.
    fn focused(&self) -> bool {
        false
    }
}
