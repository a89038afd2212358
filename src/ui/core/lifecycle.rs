//! Lifecycle-scoped state collection.
//!
//! A screen observes a `watch` channel only while it is started. Stopping
//! drops the [`Subscription`]; starting again opens a fresh one and picks up
//! whatever snapshot is current at that moment.

use log::trace;
use tokio::sync::watch;

/// Lifecycle of a hosted screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Initialized,
    Started,
    Stopped,
    Disposed,
}

/// An open subscription. Dropping it unsubscribes.
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    pub fn new(rx: watch::Receiver<T>) -> Self {
        trace!("Subscription opened");
        Self { rx }
    }

    /// Current snapshot, marking it as seen.
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// The newest snapshot if one arrived since the last read.
    pub fn changed(&mut self) -> Option<T> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.latest()),
            // A closed channel has nothing new to deliver.
            Ok(false) | Err(_) => None,
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        trace!("Subscription closed");
    }
}

/// Last value seen from a channel, collected only while started.
pub struct CollectedState<T> {
    value: T,
    subscription: Option<Subscription<T>>,
}

impl<T: Clone> CollectedState<T> {
    /// `initial` is served until the first snapshot arrives.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscription: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_collecting(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe and take the current snapshot right away.
    pub fn start(&mut self, rx: watch::Receiver<T>) {
        let mut subscription = Subscription::new(rx);
        self.value = subscription.latest();
        self.subscription = Some(subscription);
    }

    /// Unsubscribe. The last value stays readable.
    pub fn stop(&mut self) {
        self.subscription = None;
    }

    /// Pull a pending snapshot. Returns whether the value changed.
    pub fn poll(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        match subscription.changed() {
            Some(value) => {
                self.value = value;
                true
            }
            None => false,
        }
    }
}
