use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime owns the model and drives it through one loop:
///
/// 1. [`init`](Model::init) builds the first state and may return a
///    [`Command`], typically the first data fetch.
/// 2. [`view`](Model::view) draws the current state.
/// 3. Input and async completions arrive as messages.
/// 4. [`update`](Model::update) applies one message and may return more work.
/// 5. [`subscriptions`](Model::subscriptions) is re-read so listeners follow
///    the new state, then the loop repeats from step 2.
///
/// `update` is never re-entered. Every state change happens inside one call,
/// which is what lets a model reason about ordering without locks.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Every event that can affect the model.
    type Message: Send + 'static;

    /// Startup data handed to [`Model::init`], such as configuration and
    /// injected service clients. Use `()` when nothing is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Apply a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must not mutate anything.
    fn view(&self, frame: &mut Frame);

    /// Listeners that should be active for the current state.
    ///
    /// Called after every update. The runtime diffs the result against the
    /// previous list by [`SubscriptionId`](crate::SubscriptionId): new entries
    /// are started, missing ones are aborted.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
