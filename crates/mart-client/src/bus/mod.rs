pub(crate) mod subscription;
pub(crate) mod update_buses;

pub use subscription::Subscription;
pub use update_buses::UpdateBuses;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use log::{debug, warn};
use mart_core::{MutationChannel, MutationSignal};

type Handler = Box<dyn Fn(MutationSignal) + Send + Sync>;

/// A registered handler. `active` is cleared on unsubscribe so a delivery
/// already in progress skips it.
struct Entry {
    id: u64,
    active: AtomicBool,
    handler: Handler,
}

/// In-process "this resource changed" broadcast.
///
/// Delivery is synchronous and in subscription order. There is no buffer:
/// a publish with nobody subscribed is dropped and never replayed.
#[derive(Clone)]
pub struct UpdateBus {
    inner: Arc<BusInner>,
}

pub(crate) struct BusInner {
    channel: MutationChannel,
    state: Mutex<BusState>,
}

struct BusState {
    next_id: u64,
    handlers: Vec<Arc<Entry>>,
}

impl UpdateBus {
    pub fn new(channel: MutationChannel) -> Self {
        Self {
            inner: Arc::new(BusInner {
                channel,
                state: Mutex::new(BusState {
                    next_id: 0,
                    handlers: Vec::new(),
                }),
            }),
        }
    }

    pub fn channel(&self) -> MutationChannel {
        self.inner.channel
    }

    /// Register `handler`. Dropping the returned guard unsubscribes.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(MutationSignal) + Send + Sync + 'static,
    {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.handlers.push(Arc::new(Entry {
            id,
            active: AtomicBool::new(true),
            handler: Box::new(handler),
        }));

        debug!(
            "Subscribed to {} updates ({} total subscribers)",
            self.inner.channel,
            state.handlers.len()
        );

        Subscription::new(id, Arc::downgrade(&self.inner))
    }

    /// Explicit form of dropping the guard.
    pub fn unsubscribe(&self, subscription: Subscription) {
        drop(subscription);
    }

    /// Deliver one signal to every current subscriber. Returns how many
    /// handlers ran to completion.
    pub fn publish(&self) -> usize {
        let signal = MutationSignal::new(self.inner.channel);

        // Snapshot so handlers may subscribe or unsubscribe while running.
        let entries: Vec<Arc<Entry>> = self.inner.lock().handlers.clone();

        if entries.is_empty() {
            debug!("Publish on {} had no subscribers", self.inner.channel);
            return 0;
        }

        let mut delivered = 0;
        for entry in entries {
            // Unsubscribed by an earlier handler or another thread.
            if !entry.active.load(Ordering::Acquire) {
                continue;
            }

            match catch_unwind(AssertUnwindSafe(|| (entry.handler)(signal))) {
                Ok(()) => delivered += 1,
                Err(_) => warn!(
                    "A {} update handler panicked; continuing delivery",
                    self.inner.channel
                ),
            }
        }

        debug!(
            "Published {} update to {} subscribers",
            self.inner.channel, delivered
        );
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().handlers.len()
    }
}

impl BusInner {
    fn lock(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn remove(&self, id: u64) {
        let mut state = self.lock();
        state.handlers.retain(|entry| {
            if entry.id == id {
                entry.active.store(false, Ordering::Release);
                false
            } else {
                true
            }
        });

        debug!(
            "Unsubscribed from {} updates ({} remaining subscribers)",
            self.channel,
            state.handlers.len()
        );
    }
}

impl std::fmt::Debug for UpdateBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateBus")
            .field("channel", &self.inner.channel)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub(crate) type BusHandle = Weak<BusInner>;
