use crate::{
    Gateway, GatewayResult, IdentityResolver, StorefrontError, StorefrontResult, UpdateBuses,
};

use std::future::Future;

use log::{debug, info, warn};
use mart_core::{
    Cart, MessageResponse, MutationChannel, Order, OrderLine, ProductStats, Session, SessionPatch,
    UserId, WatchlistItem,
};
use mart_session::SessionStore;

/// Single owner of the process-wide session, gateway, resolver and buses.
///
/// Every cart or watchlist mutation goes through the same sequence: require
/// a token, resolve the user id, issue the call, and publish on the matching
/// bus only once the server has confirmed it. Views never splice results
/// into their own copies; they re-read after the signal.
#[derive(Debug, Clone)]
pub struct Storefront {
    session: SessionStore,
    gateway: Gateway,
    resolver: IdentityResolver,
    buses: UpdateBuses,
}

impl Storefront {
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        let gateway = Gateway::new(base_url, session.clone());
        let resolver = IdentityResolver::new(session.clone(), gateway.clone());

        Self {
            session,
            gateway,
            resolver,
            buses: UpdateBuses::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn buses(&self) -> &UpdateBuses {
        &self.buses
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Sign in and replace whatever session was stored before.
    pub async fn login(&self, email: &str, password: &str) -> StorefrontResult<Session> {
        let response = self
            .gateway
            .authenticate(email, password)
            .await
            .map_err(|e| StorefrontError::from_gateway(e, "Login failed"))?;

        let display_name = response
            .username
            .clone()
            .unwrap_or_else(|| local_part(email).to_string());

        let mut patch = SessionPatch::new()
            .token(response.token)
            .email(email)
            .display_name(display_name);
        if let Some(role) = response.role {
            patch = patch.role(role);
        }
        if let Some(user_id) = response.user_id {
            patch = patch.user_id(user_id);
        }

        // Fields of a previous account must not leak into the new session.
        if let Err(e) = self.session.clear() {
            warn!("Could not erase previous session: {e}");
        }
        if let Err(e) = self.session.set(patch) {
            warn!("Signed in but could not persist session: {e}");
        }

        let session = self.session.get();
        info!(
            "Signed in as {email} ({})",
            session.role.map(|r| r.as_str()).unwrap_or("unknown role")
        );
        Ok(session)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> StorefrontResult<MessageResponse> {
        let response = self
            .gateway
            .register(username, email, password)
            .await
            .map_err(|e| StorefrontError::from_gateway(e, "Registration failed"))?;

        info!("Registered {email}");
        Ok(response)
    }

    /// Wipe every session field. Local only; the server keeps no session.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            warn!("Session cleared in memory but not on disk: {e}");
        }
        info!("Signed out");
    }

    /// Sign out when `failure` shows the server no longer accepts the token.
    /// Any other failure leaves the session exactly as it was.
    pub fn end_session_if_rejected(&self, failure: &StorefrontError) -> bool {
        if !failure.is_auth_rejection() {
            return false;
        }

        warn!("Server rejected the session token; signing out");
        self.logout();
        true
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) -> StorefrontResult<Cart> {
        self.mutate(
            MutationChannel::Cart,
            "Failed to add to cart",
            move |gateway, user_id| async move {
                gateway.add_to_cart(user_id, product_id, quantity).await
            },
        )
        .await
    }

    /// Set a line's quantity. Zero removes the line; an unknown line with
    /// zero quantity is left alone and nothing is published.
    pub async fn update_cart_quantity(
        &self,
        cart_item_id: i64,
        new_quantity: u32,
    ) -> StorefrontResult<Cart> {
        if new_quantity == 0 {
            let cart = self.cart().await?;
            let Some(item) = cart.find_by_item(cart_item_id) else {
                debug!("Cart item {cart_item_id} not in cart; nothing to remove");
                return Ok(cart);
            };
            let product_id = item.product_id;
            return self.remove_from_cart(product_id).await;
        }

        self.mutate(
            MutationChannel::Cart,
            "Failed to update quantity",
            move |gateway, user_id| async move {
                gateway
                    .update_cart_quantity(cart_item_id, new_quantity, user_id)
                    .await
            },
        )
        .await
    }

    pub async fn remove_from_cart(&self, product_id: i64) -> StorefrontResult<Cart> {
        self.mutate(
            MutationChannel::Cart,
            "Failed to remove item",
            move |gateway, user_id| async move { gateway.remove_from_cart(product_id, user_id).await },
        )
        .await
    }

    pub async fn clear_cart(&self) -> StorefrontResult<Cart> {
        self.mutate(
            MutationChannel::Cart,
            "Failed to clear cart",
            |gateway, user_id| async move { gateway.clear_cart(user_id).await },
        )
        .await
    }

    /// Place an order from `lines`, or from the server-side cart when empty.
    /// The server empties the cart, so cart views are told to refresh.
    pub async fn place_order(&self, lines: &[OrderLine]) -> StorefrontResult<MessageResponse> {
        self.mutate(
            MutationChannel::Cart,
            "Failed to place order",
            move |gateway, user_id| async move { gateway.place_order(user_id, lines).await },
        )
        .await
    }

    // =========================================================================
    // Watchlist mutations
    // =========================================================================

    pub async fn add_to_watchlist(&self, product_id: i64) -> StorefrontResult<String> {
        self.mutate(
            MutationChannel::Watchlist,
            "Failed to add to watchlist",
            move |gateway, user_id| async move {
                gateway.add_to_watchlist(user_id, product_id).await
            },
        )
        .await
    }

    pub async fn remove_from_watchlist(&self, product_id: i64) -> StorefrontResult<String> {
        self.mutate(
            MutationChannel::Watchlist,
            "Failed to remove from watchlist",
            move |gateway, user_id| async move {
                gateway.remove_from_watchlist(user_id, product_id).await
            },
        )
        .await
    }

    // =========================================================================
    // Identity-scoped reads
    // =========================================================================

    pub async fn cart(&self) -> StorefrontResult<Cart> {
        self.read("Failed to load cart", |gateway, user_id| async move {
            gateway.view_cart(user_id).await
        })
        .await
    }

    pub async fn watchlist(&self) -> StorefrontResult<Vec<WatchlistItem>> {
        self.read("Failed to load watchlist", |gateway, user_id| async move {
            gateway.view_watchlist(user_id).await
        })
        .await
    }

    pub async fn orders(&self) -> StorefrontResult<Vec<Order>> {
        self.read("Failed to load orders", |gateway, user_id| async move {
            gateway.list_orders(Some(user_id)).await
        })
        .await
    }

    pub async fn frequent_products(&self, top_n: u32) -> StorefrontResult<Vec<ProductStats>> {
        self.read(
            "Failed to load frequent products",
            move |gateway, user_id| async move { gateway.frequent_products(user_id, top_n).await },
        )
        .await
    }

    pub async fn recent_products(&self, top_n: u32) -> StorefrontResult<Vec<ProductStats>> {
        self.read(
            "Failed to load recent products",
            move |gateway, user_id| async move { gateway.recent_products(user_id, top_n).await },
        )
        .await
    }

    // =========================================================================
    // Protocol
    // =========================================================================

    /// Token check and identity resolution shared by reads and mutations.
    async fn identity(&self) -> StorefrontResult<UserId> {
        if !self.session.is_authenticated() {
            debug!("Rejected locally: no session token");
            return Err(StorefrontError::unauthenticated());
        }

        self.resolver
            .resolve()
            .await
            .map_err(|e| StorefrontError::from_identity(e))
    }

    async fn read<T, F, Fut>(&self, fallback: &'static str, call: F) -> StorefrontResult<T>
    where
        F: FnOnce(Gateway, UserId) -> Fut,
        Fut: Future<Output = GatewayResult<T>>,
    {
        let user_id = self.identity().await?;

        call(self.gateway.clone(), user_id)
            .await
            .map_err(|e| StorefrontError::from_gateway(e, fallback))
    }

    /// Publishes on `channel` exactly once when `call` succeeds and never
    /// when any step fails.
    async fn mutate<T, F, Fut>(
        &self,
        channel: MutationChannel,
        fallback: &'static str,
        call: F,
    ) -> StorefrontResult<T>
    where
        F: FnOnce(Gateway, UserId) -> Fut,
        Fut: Future<Output = GatewayResult<T>>,
    {
        let value = self.read(fallback, call).await?;

        let delivered = self.buses.publish(channel);
        debug!("{channel} mutation confirmed; {delivered} views notified");

        Ok(value)
    }
}

/// `alice@example.com` -> `alice`
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
