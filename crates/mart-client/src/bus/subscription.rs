use crate::bus::BusHandle;

/// Live registration on an [`UpdateBus`](crate::UpdateBus).
///
/// Unsubscribes on drop, so a view that goes away can never be called
/// again regardless of how it is torn down.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    bus: BusHandle,
}

impl Subscription {
    pub(crate) fn new(id: u64, bus: BusHandle) -> Self {
        Self { id, bus }
    }

    /// Whether the bus this subscription belongs to still exists.
    pub fn is_attached(&self) -> bool {
        self.bus.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.id);
        }
    }
}
