//! mart-client library
//!
//! Session-aware gateway to the shop server, the identity resolver, the
//! cart/watchlist update buses and the [`Storefront`] that ties them together.

pub(crate) mod bus;
pub(crate) mod client;
pub(crate) mod identity;
pub(crate) mod storefront;


pub use bus::{Subscription, UpdateBus, UpdateBuses};
pub use client::{Gateway, GatewayError, GatewayResult};
pub use identity::{IdentityError, IdentityResolver, IdentityResult};
pub use storefront::{
    IDENTITY_LOOKUP_MESSAGE, LOGIN_FIRST_MESSAGE, Storefront, StorefrontError, StorefrontResult,
    USER_NOT_FOUND_MESSAGE,
};

/// Shown when a failed request carried no usable message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Shown when the server could not be reached at all.
pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to server. Please make sure the backend is running.";
