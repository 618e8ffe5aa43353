//! Keyed one-shot notification fan-out.
//!
//! Subscribers registered under a key receive exactly one delivery for that
//! key, then are removed. The bus holds no history: subscribing after a
//! publish has no retroactive effect, so callers must consult their own
//! cache before subscribing.

use std::collections::HashMap;

use tokio::sync::oneshot;

/// Keyed one-shot publish/subscribe.
#[derive(Debug)]
pub struct PageEvents<T> {
    waiters: HashMap<String, Vec<oneshot::Sender<T>>>,
}

impl<T> Default for PageEvents<T> {
    fn default() -> Self {
        Self {
            waiters: HashMap::new(),
        }
    }
}

impl<T: Clone> PageEvents<T> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the next publish under `key`.
    pub fn subscribe(&mut self, key: &str) -> oneshot::Receiver<T> {
        let (tx, rx) = oneshot::channel();
        self.waiters.entry(key.to_string()).or_default().push(tx);
        rx
    }

    /// Deliver `value` to every subscriber currently under `key`, in
    /// subscription order, removing them all. Returns the number of
    /// subscribers notified.
    pub fn publish(&mut self, key: &str, value: T) -> usize {
        let Some(senders) = self.waiters.remove(key) else {
            return 0;
        };
        let notified = senders.len();
        for tx in senders {
            // A dropped receiver means the waiter went away; nothing to do.
            let _ = tx.send(value.clone());
        }
        notified
    }

    /// Number of live subscriptions under `key`.
    pub fn subscriber_count(&self, key: &str) -> usize {
        self.waiters.get(key).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_delivers_to_all_then_clears() {
        let mut events = PageEvents::new();
        let rx1 = events.subscribe("/a");
        let rx2 = events.subscribe("/a");
        let other = events.subscribe("/b");
        assert_eq!(events.subscriber_count("/a"), 2);

        assert_eq!(events.publish("/a", 7), 2);
        assert_eq!(rx1.await.unwrap(), 7);
        assert_eq!(rx2.await.unwrap(), 7);
        assert_eq!(events.subscriber_count("/a"), 0);
        assert_eq!(events.subscriber_count("/b"), 1);
        drop(other);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let mut events: PageEvents<u32> = PageEvents::new();
        assert_eq!(events.publish("/a", 1), 0);

        // No retroactive delivery for late subscribers.
        let rx = events.subscribe("/a");
        assert_eq!(events.subscriber_count("/a"), 1);
        drop(events);
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_block_others() {
        let mut events = PageEvents::new();
        let rx1 = events.subscribe("/a");
        drop(rx1);
        let rx2 = events.subscribe("/a");
        assert_eq!(events.publish("/a", 3), 2);
        assert_eq!(rx2.await.unwrap(), 3);
    }
}
