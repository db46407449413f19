use crate::UpdateBus;

use mart_core::MutationChannel;

/// The two long-lived buses: cart and watchlist. No cross-talk.
#[derive(Debug, Clone)]
pub struct UpdateBuses {
    cart: UpdateBus,
    watchlist: UpdateBus,
}

impl UpdateBuses {
    pub fn new() -> Self {
        Self {
            cart: UpdateBus::new(MutationChannel::Cart),
            watchlist: UpdateBus::new(MutationChannel::Watchlist),
        }
    }

    pub fn cart(&self) -> &UpdateBus {
        &self.cart
    }

    pub fn watchlist(&self) -> &UpdateBus {
        &self.watchlist
    }

    pub fn get(&self, channel: MutationChannel) -> &UpdateBus {
        match channel {
            MutationChannel::Cart => &self.cart,
            MutationChannel::Watchlist => &self.watchlist,
        }
    }

    pub fn publish(&self, channel: MutationChannel) -> usize {
        self.get(channel).publish()
    }
}

impl Default for UpdateBuses {
    fn default() -> Self {
        Self::new()
    }
}
