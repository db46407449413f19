use crate::{MutationChannel, MutationSignal};

use std::str::FromStr;

#[test]
fn test_channel_names() {
    assert_eq!(MutationChannel::Cart.as_str(), "cart");
    assert_eq!(MutationChannel::Watchlist.to_string(), "watchlist");
}

#[test]
fn test_channel_from_str() {
    assert_eq!(
        MutationChannel::from_str("cart").unwrap(),
        MutationChannel::Cart
    );
    assert!(MutationChannel::from_str("orders").is_err());
}

#[test]
fn test_signal_carries_channel_only() {
    let signal = MutationSignal::new(MutationChannel::Watchlist);
    assert_eq!(signal.channel, MutationChannel::Watchlist);
}
