use mart_client::{Subscription, UpdateBus};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A view's stand-in for the command line: marks itself stale when the bus
/// signals, so the command re-reads authoritative state before printing.
pub(crate) struct RefreshOnSignal {
    stale: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl RefreshOnSignal {
    pub(crate) fn watch(bus: &UpdateBus) -> Self {
        let stale = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stale);
        let subscription = bus.subscribe(move |_| flag.store(true, Ordering::SeqCst));

        Self {
            stale,
            _subscription: subscription,
        }
    }

    /// Whether a signal arrived since the last call.
    pub(crate) fn take(&self) -> bool {
        self.stale.swap(false, Ordering::SeqCst)
    }
}
