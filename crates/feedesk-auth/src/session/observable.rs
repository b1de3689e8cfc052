//! A last-value observable: new subscribers receive the current value
//! immediately, then every subsequent change.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use parking_lot::Mutex;

struct Inner<T> {
    value: T,
    subscribers: Vec<UnboundedSender<T>>,
}

/// Holds one value and an ordered list of subscribers.
///
/// Notification is synchronous and happens in registration order while
/// the value lock is held, so every subscriber sees changes in the same
/// order they were applied. Subscribers whose stream was dropped are
/// pruned on the next change.
pub struct Observable<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("subscribers", &self.inner.lock().subscribers.len())
            .finish()
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    /// Creates an observable holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Inner {
                value: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replaces the value and notifies every live subscriber.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock();
        inner.value = value;
        let Inner { value, subscribers } = &mut *inner;
        subscribers.retain(|tx| tx.unbounded_send(value.clone()).is_ok());
    }

    /// Subscribes to the value. The first item is the current value.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.lock();
        // The receiver is still in hand, so this send cannot fail.
        let _ = tx.unbounded_send(inner.value.clone());
        inner.subscribers.push(tx);
        Subscription { rx }
    }

    /// Number of subscribers registered (including ones not yet pruned).
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Stream of values from an [`Observable`]. Ends only when the observable is dropped.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: UnboundedReceiver<T>,
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}
