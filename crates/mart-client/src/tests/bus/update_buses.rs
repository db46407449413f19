use crate::UpdateBuses;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mart_core::MutationChannel;

#[test]
fn test_channels_do_not_cross_talk() {
    let buses = UpdateBuses::new();
    let cart_hits = Arc::new(AtomicUsize::new(0));
    let watchlist_hits = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&cart_hits);
    let _cart = buses.cart().subscribe(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    let w = Arc::clone(&watchlist_hits);
    let _watchlist = buses.watchlist().subscribe(move |_| {
        w.fetch_add(1, Ordering::SeqCst);
    });

    buses.publish(MutationChannel::Cart);
    buses.publish(MutationChannel::Cart);
    buses.publish(MutationChannel::Watchlist);

    assert_eq!(cart_hits.load(Ordering::SeqCst), 2);
    assert_eq!(watchlist_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_get_routes_by_channel() {
    let buses = UpdateBuses::default();
    assert_eq!(buses.get(MutationChannel::Cart).channel(), MutationChannel::Cart);
    assert_eq!(
        buses.get(MutationChannel::Watchlist).channel(),
        MutationChannel::Watchlist
    );
}
