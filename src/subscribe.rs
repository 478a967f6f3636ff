//! `DiffBus`: fan-out of a reducer's diffs to any number of listeners.
//!
//! Kept deliberately trivial: a `Vec` of boxed closures, each called in
//! registration order for every diff. There is no unsubscribe-by-id;
//! `subscribe` returns an unsubscribe handle that removes its own entry
//! by a private token.

use crate::block::Diff;

type Listener = Box<dyn FnMut(&Diff) + Send>;

#[derive(Default)]
pub struct DiffBus {
    listeners: Vec<(u64, Listener)>,
    next_token: u64,
}

/// Returned by `subscribe`; calling `unsubscribe` removes the listener.
pub struct Subscription {
    token: u64,
}

impl DiffBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`, to be called with every diff published from
    /// now on. Returns a `Subscription` that can later remove it.
    pub fn subscribe(&mut self, listener: impl FnMut(&Diff) + Send + 'static) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        self.listeners.push((token, Box::new(listener)));
        Subscription { token }
    }

    /// Removes the listener registered for `subscription`, if still present.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(t, _)| *t != subscription.token);
    }

    /// Calls every registered listener with `diff`, in registration order.
    pub fn publish(&mut self, diff: &Diff) {
        for (_, listener) in &mut self.listeners {
            listener(diff);
        }
    }

    /// Calls every registered listener with each diff in `diffs`, in order.
    pub fn publish_all(&mut self, diffs: &[Diff]) {
        for diff in diffs {
            self.publish(diff);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_receives_published_diffs() {
        let mut bus = DiffBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        bus.subscribe(move |_diff| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        let block = Block::Paragraph { id: BlockId(0), text: "hi".into() };
        bus.publish(&Diff::append(block));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = DiffBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let sub = bus.subscribe(move |_diff| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        bus.unsubscribe(sub);
        let block = Block::Paragraph { id: BlockId(0), text: "hi".into() };
        bus.publish(&Diff::append(block));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_multiple_listeners_all_receive() {
        let mut bus = DiffBus::new();
        let a = Arc::new(AtomicUsize::new(0));
        let b = Arc::new(AtomicUsize::new(0));
        let (a2, b2) = (Arc::clone(&a), Arc::clone(&b));
        bus.subscribe(move |_| {
            a2.fetch_add(1, Ordering::SeqCst);
        });
        bus.subscribe(move |_| {
            b2.fetch_add(1, Ordering::SeqCst);
        });
        let block = Block::Paragraph { id: BlockId(0), text: "hi".into() };
        bus.publish_all(&[Diff::append(block)]);
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }
}
