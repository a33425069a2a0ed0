use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` keeps several timers
/// apart when they run at the same time.
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(80), "spinner"))
///     .map(|_| Msg::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Distinguishes this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let stream =
            tokio_stream::wrappers::IntervalStream::new(interval).map(|tick| tick.into_std());
        Box::pin(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_name() {
        let a = Every::new(Duration::from_millis(10), "a");
        let b = Every::new(Duration::from_millis(10), "b");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), Every::new(Duration::from_secs(1), "a").id());
    }

    #[tokio::test]
    async fn emits_ticks() {
        let mut stream = Every::new(Duration::from_millis(5), "t").stream();
        let first = stream.next().await;
        let second = stream.next().await;
        assert!(first.is_some() && second.is_some());
    }
}
