//! Observation primitives for in-process event delivery.
//!
//! A [`Signal`] is a synchronous subject: subscribers register a callback
//! and receive every value passed to [`Signal::emit`] on the emitting
//! thread, in registration order. Subscriptions are owned by an
//! [`ObservationToken`]; dropping or cancelling the token removes the
//! subscriber. Both the lifecycle and push-note plumbing are built on
//! this type.
//!
//! Delivery is serialized by an internal lock. Callbacks must not
//! subscribe to or cancel on the signal they are being delivered on.

use std::sync::{Arc, Mutex as StdMutex, Weak};

type Subscriber<T> = Box<dyn FnMut(&T) + Send>;

struct SignalInner<T> {
    /// Monotonic ID source for subscriptions
    next_id: u64,
    /// Subscribers in registration order
    subscribers: Vec<(u64, Subscriber<T>)>,
}

/// A synchronous multi-subscriber event source.
pub struct Signal<T> {
    inner: Arc<StdMutex<SignalInner<T>>>,
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StdMutex::new(SignalInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a callback for every emitted value.
    ///
    /// The subscription lives as long as the returned token. Dropping the
    /// token cancels it, so the token must be stored somewhere.
    #[must_use = "dropping the token cancels the subscription"]
    pub fn subscribe(&self, callback: impl FnMut(&T) + Send + 'static) -> ObservationToken
    where
        T: 'static,
    {
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Box::new(callback)));
            id
        };

        tracing::debug!("Signal subscription registered (id={})", id);

        let weak = Arc::downgrade(&self.inner);
        ObservationToken {
            cancel: Some(Box::new(move || cancel_subscription(&weak, id))),
        }
    }

    /// Deliver a value to all current subscribers.
    pub fn emit(&self, value: &T) {
        let mut inner = self.inner.lock().unwrap();
        for (_, callback) in inner.subscribers.iter_mut() {
            callback(value);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

fn cancel_subscription<T>(weak: &Weak<StdMutex<SignalInner<T>>>, id: u64) {
    // Signal may already be gone; cancelling then is a no-op
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.lock().unwrap();
    inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
    tracing::debug!("Signal subscription cancelled (id={})", id);
}

/// Handle that owns a [`Signal`] subscription.
///
/// Cancelling is idempotent, and dropping the token cancels the
/// subscription automatically.
pub struct ObservationToken {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ObservationToken {
    /// Cancel the subscription. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether the subscription has already been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for ObservationToken {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ObservationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_and_emit() {
        let signal: Signal<u32> = Signal::new();
        let received = Arc::new(StdMutex::new(Vec::new()));

        let sink = Arc::clone(&received);
        let _token = signal.subscribe(move |value| {
            sink.lock().unwrap().push(*value);
        });

        signal.emit(&1);
        signal.emit(&2);

        assert_eq!(*received.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_emit_with_no_subscribers() {
        let signal: Signal<&str> = Signal::new();
        signal.emit(&"ignored");
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let signal: Signal<()> = Signal::new();
        let order = Arc::new(StdMutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = signal.subscribe(move |_| first.lock().unwrap().push("first"));
        let second = Arc::clone(&order);
        let _b = signal.subscribe(move |_| second.lock().unwrap().push("second"));

        signal.emit(&());

        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_cancel_stops_delivery() {
        let signal: Signal<()> = Signal::new();
        let count = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&count);
        let mut token = signal.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(&());
        token.cancel();
        signal.emit(&());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let signal: Signal<()> = Signal::new();
        let mut token = signal.subscribe(|_| {});

        token.cancel();
        token.cancel();

        assert!(token.is_cancelled());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_cancels_subscription() {
        let signal: Signal<()> = Signal::new();
        {
            let _token = signal.subscribe(|_| {});
            assert_eq!(signal.subscriber_count(), 1);
        }
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_after_signal_dropped() {
        let signal: Signal<()> = Signal::new();
        let mut token = signal.subscribe(|_| {});
        drop(signal);

        // Must not panic
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_only_cancelled_subscriber_removed() {
        let signal: Signal<u32> = Signal::new();
        let kept = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));

        let kept_sink = Arc::clone(&kept);
        let _kept_token = signal.subscribe(move |_| {
            kept_sink.fetch_add(1, Ordering::SeqCst);
        });
        let dropped_sink = Arc::clone(&dropped);
        let mut dropped_token = signal.subscribe(move |_| {
            dropped_sink.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(&0);
        dropped_token.cancel();
        signal.emit(&0);

        assert_eq!(kept.load(Ordering::SeqCst), 2);
        assert_eq!(dropped.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_shares_subscribers() {
        let signal: Signal<u32> = Signal::new();
        let clone = signal.clone();
        let count = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&count);
        let _token = signal.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        clone.emit(&7);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(clone.subscriber_count(), 1);
    }
}
