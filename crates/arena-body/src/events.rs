//! Position-changed event hub.
//!
//! Position changes are published through explicit registration:
//! [`subscribe`](PositionEvents::subscribe) hands back a [`Subscription`]
//! token that removes the callback when cancelled or dropped.
//!
//! # Delivery rules
//!
//! Delivery is a plain callback invocation and never happens under a lock —
//! not the body's motion guard and not the subscriber-list lock.  `emit`
//! snapshots the current subscriber list (cheap `Arc` clones), releases the
//! list lock, and only then invokes.  A callback is therefore free to
//! re-enter the body: read its position, subscribe, or cancel its own
//! subscription.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use arena_core::Vec2;

type Callback = Arc<dyn Fn(Vec2) + Send + Sync + 'static>;

/// Per-body registry of position-changed callbacks.
#[derive(Default)]
pub struct PositionEvents {
    inner: Arc<Registry>,
}

#[derive(Default)]
struct Registry {
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_token: AtomicU64,
}

impl Registry {
    fn remove(&self, token: u64) {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subs.retain(|(t, _)| *t != token);
    }
}

impl PositionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every subsequent position change.
    ///
    /// The returned [`Subscription`] cancels the registration when dropped;
    /// call [`Subscription::detach`] to keep the callback for the body's
    /// whole lifetime instead.
    pub fn subscribe(&self, callback: impl Fn(Vec2) + Send + Sync + 'static) -> Subscription {
        let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
        {
            let mut subs = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subs.push((token, Arc::new(callback)));
        }
        Subscription {
            registry: Arc::downgrade(&self.inner),
            token,
            live: true,
        }
    }

    /// Invoke every current subscriber with `position`.
    ///
    /// The list lock is dropped before the first invocation; a subscriber
    /// registered or cancelled *during* delivery takes effect from the next
    /// emit.
    pub fn emit(&self, position: Vec2) {
        let snapshot: Vec<Callback> = {
            let subs = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subs.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in snapshot {
            (*callback)(position);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Cancel token for one registered callback.
///
/// Cancels on [`cancel`](Subscription::cancel) or on drop.  Holds only a weak
/// reference to the registry, so an outstanding token does not keep a torn
/// down body alive.
#[must_use = "dropping a Subscription cancels it; call detach() to keep the callback"]
pub struct Subscription {
    registry: Weak<Registry>,
    token: u64,
    live: bool,
}

impl Subscription {
    /// Remove the callback now.
    pub fn cancel(mut self) {
        self.remove();
    }

    /// Keep the callback registered for the body's whole lifetime and discard
    /// the token.
    pub fn detach(mut self) {
        self.live = false;
    }

    fn remove(&mut self) {
        if self.live {
            self.live = false;
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(self.token);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}
