use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::{Arc, OnceLock};
use tokio::sync::{broadcast, mpsc};
use tokio::task::AbortHandle;
use tokio_stream::wrappers::BroadcastStream;

const HUB_CAPACITY: usize = 256;

/// Marker type for terminal event subscription ids.
pub struct TerminalEvents;

static HUB: OnceLock<broadcast::Sender<TerminalEvent>> = OnceLock::new();

/// Receiver on the shared terminal reader.
///
/// crossterm's `EventStream` instances all pull from one global reader, so
/// two live streams would steal events from each other. A single task owns
/// the `EventStream` and broadcasts every event; each subscription holds its
/// own receiver and can come and go without disturbing the others.
fn hub() -> broadcast::Receiver<TerminalEvent> {
    HUB.get_or_init(|| {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        let reader = tx.clone();
        tokio::spawn(async move {
            let mut events = EventStream::new();
            while let Some(result) = events.next().await {
                match result {
                    // No receivers is fine: nobody is listening right now.
                    Ok(event) => {
                        let _ = reader.send(TerminalEvent::from(event));
                    }
                    Err(err) => log::warn!("terminal event read failed: {err}"),
                }
            }
            log::debug!("terminal event reader finished");
        });
        tx
    })
    .subscribe()
}

/// Create a named terminal events subscription.
///
/// `map` receives every [`TerminalEvent`] and returns `Some(msg)` to forward
/// it or `None` to discard it. Subscriptions with different `name`s are
/// independent: a model can keep a keyboard listener alive for its whole
/// lifetime while declaring a pointer listener only while a popup is open.
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     let mut subs = vec![terminal_events("keys", |ev| match ev {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         _ => None,
///     })];
///     if self.open {
///         subs.push(terminal_events("pointer", |ev| match ev {
///             TerminalEvent::Mouse(m) => Some(Msg::Pointer(m)),
///             _ => None,
///         }));
///     }
///     subs
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    name: &'static str,
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // The receiver is taken inside the spawned task, so declaring the
    // subscription on every update cycle costs nothing while it is active.
    Subscription {
        id: SubscriptionId::with_str::<TerminalEvents>(name),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let handle = tokio::spawn(async move {
                let mut events = BroadcastStream::new(hub());
                while let Some(item) = events.next().await {
                    let event = match item {
                        Ok(event) => event,
                        Err(lagged) => {
                            log::warn!("{name}: {lagged}");
                            continue;
                        }
                    };
                    if let Some(msg) = map(event) {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_give_distinct_ids() {
        let keys = terminal_events::<()>("keys", |_| None);
        let pointer = terminal_events::<()>("pointer", |_| None);
        assert_ne!(keys.id(), pointer.id());
        assert_eq!(
            keys.id(),
            terminal_events::<()>("keys", |_| Some(())).id()
        );
    }
}
