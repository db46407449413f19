use crate::client::failure_message;
use crate::{GatewayError, GatewayResult};

use log::{debug, warn};
use mart_core::{
    Cart, LoginRequest, LoginResponse, MessageResponse, Order, OrderLine, OrderStatus, Product,
    ProductDraft, ProductStats, RegisterRequest, RemoteAccount, SessionPatch, UserId,
    WatchlistItem,
};
use mart_session::{SessionResult, SessionStore};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sole egress point to the resource server.
///
/// Reads the bearer token from the [`SessionStore`] on every request, so a
/// login or logout takes effect on the next call without rebuilding the
/// gateway. No retries and no timeouts: each call resolves or fails once.
#[derive(Debug, Clone)]
pub struct Gateway {
    base_url: String,
    session: SessionStore,
    client: ReqwestClient,
}

impl Gateway {
    /// Create a new gateway
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    /// * `session` - Store the bearer token is read from
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Store the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: &str) -> SessionResult<()> {
        self.session.set(SessionPatch::new().token(token))
    }

    /// Stop attaching a bearer token.
    pub fn clear_token(&self) -> SessionResult<()> {
        self.session.clear_token()
    }

    /// Build a request with the bearer token when one is present
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {path}");

        let req = self.client.request(method, &url);
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and normalize: 2xx yields the raw body, anything else a GatewayError.
    async fn execute(&self, req: RequestBuilder) -> GatewayResult<String> {
        let response = req.send().await.map_err(|e| {
            warn!("Request failed before a response arrived: {e}");
            GatewayError::unreachable(e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::unreachable(e))?;

        if status.is_success() {
            return Ok(body);
        }

        let err = GatewayError::from_status(status.as_u16(), failure_message::extract(&body));
        warn!("Request rejected: {err}");
        Err(err)
    }

    async fn execute_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> GatewayResult<T> {
        let body = self.execute(req).await?;
        // Closure, not a path, so the error records this line.
        serde_json::from_str(&body).map_err(|e| GatewayError::decode(e))
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a bearer token. The server's `username`
    /// field carries the email.
    pub async fn authenticate(&self, email: &str, password: &str) -> GatewayResult<LoginResponse> {
        let body = LoginRequest {
            username: email,
            password,
        };
        let req = self.request(Method::POST, "/login").json(&body);
        self.execute_json(req).await
    }

    /// Create a shopper account
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> GatewayResult<MessageResponse> {
        let body = RegisterRequest {
            username,
            email,
            password,
        };
        let req = self.request(Method::POST, "/signup").json(&body);
        self.execute_json(req).await
    }

    // =========================================================================
    // Product Operations
    // =========================================================================

    /// List the catalog (administrators also see out-of-stock products)
    pub async fn list_products(&self) -> GatewayResult<Vec<Product>> {
        let req = self.request(Method::GET, "/products/all");
        self.execute_json(req).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, product_id: i64) -> GatewayResult<Product> {
        let req = self.request(Method::GET, &format!("/products/{}", product_id));
        self.execute_json(req).await
    }

    /// Create a product
    pub async fn create_product(&self, draft: &ProductDraft) -> GatewayResult<Product> {
        let req = self.request(Method::POST, "/products").json(draft);
        self.execute_json(req).await
    }

    /// Update the present fields of a product
    pub async fn update_product(
        &self,
        product_id: i64,
        draft: &ProductDraft,
    ) -> GatewayResult<Product> {
        let req = self
            .request(Method::PATCH, &format!("/products/{}", product_id))
            .json(draft);
        self.execute_json(req).await
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// View a user's cart. A 404 means the cart is empty.
    pub async fn view_cart(&self, user_id: UserId) -> GatewayResult<Cart> {
        let path = with_query("/cart/view", &[("userId", user_id.to_string())]);
        let req = self.request(Method::GET, &path);

        match self.execute_json(req).await {
            Err(e) if e.is_not_found() => Ok(Cart::empty(user_id)),
            other => other,
        }
    }

    /// Add a quantity of a product to the cart
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: i64,
        quantity: u32,
    ) -> GatewayResult<Cart> {
        let path = with_query(
            "/cart/add",
            &[
                ("userId", user_id.to_string()),
                ("productId", product_id.to_string()),
                ("quantity", quantity.to_string()),
            ],
        );
        let req = self.request(Method::POST, &path);
        self.execute_json(req).await
    }

    /// Set the quantity of one cart line
    pub async fn update_cart_quantity(
        &self,
        cart_item_id: i64,
        new_quantity: u32,
        user_id: UserId,
    ) -> GatewayResult<Cart> {
        let path = with_query(
            "/cart/updateQuantity",
            &[
                ("cartItemId", cart_item_id.to_string()),
                ("newQuantity", new_quantity.to_string()),
                ("userId", user_id.to_string()),
            ],
        );
        let req = self.request(Method::PATCH, &path);
        self.execute_json(req).await
    }

    /// Remove a product from the cart
    pub async fn remove_from_cart(&self, product_id: i64, user_id: UserId) -> GatewayResult<Cart> {
        let path = with_query(
            &format!("/cart/remove/{}", product_id),
            &[("userId", user_id.to_string())],
        );
        let req = self.request(Method::DELETE, &path);
        self.execute_json(req).await
    }

    /// Empty the cart
    pub async fn clear_cart(&self, user_id: UserId) -> GatewayResult<Cart> {
        let req = self.request(Method::DELETE, &format!("/cart/clear/{}", user_id));
        self.execute_json(req).await
    }

    // =========================================================================
    // Order Operations
    // =========================================================================

    /// Place an order. With no lines the server orders the current cart.
    pub async fn place_order(
        &self,
        user_id: UserId,
        lines: &[OrderLine],
    ) -> GatewayResult<MessageResponse> {
        #[derive(Serialize)]
        struct PlaceOrderRequest<'a> {
            order: &'a [OrderLine],
        }

        let path = with_query("/orders", &[("userId", user_id.to_string())]);
        let mut req = self.request(Method::POST, &path);
        if !lines.is_empty() {
            req = req.json(&PlaceOrderRequest { order: lines });
        }
        self.execute_json(req).await
    }

    /// List orders. Administrators may omit the user to see every order.
    pub async fn list_orders(&self, user_id: Option<UserId>) -> GatewayResult<Vec<Order>> {
        let params: Vec<(&str, String)> = user_id
            .map(|id| vec![("userId", id.to_string())])
            .unwrap_or_default();
        let req = self.request(Method::GET, &with_query("/orders/all", &params));
        self.execute_json(req).await
    }

    /// Get an order by ID
    pub async fn get_order(&self, order_id: i64) -> GatewayResult<Order> {
        let req = self.request(Method::GET, &format!("/orders/{}", order_id));
        self.execute_json(req).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, order_id: i64) -> GatewayResult<MessageResponse> {
        let req = self.request(Method::PATCH, &format!("/orders/{}/cancel", order_id));
        self.execute_json(req).await
    }

    /// Mark an order completed
    pub async fn complete_order(&self, order_id: i64) -> GatewayResult<MessageResponse> {
        let req = self.request(Method::PATCH, &format!("/orders/{}/complete", order_id));
        self.execute_json(req).await
    }

    // =========================================================================
    // Watchlist Operations
    // =========================================================================

    /// List watched products. A 404 means the watchlist is empty.
    pub async fn view_watchlist(&self, user_id: UserId) -> GatewayResult<Vec<WatchlistItem>> {
        let path = with_query("/watchlist/products/all", &[("userId", user_id.to_string())]);
        let req = self.request(Method::GET, &path);

        match self.execute_json(req).await {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// Watch a product. Returns the server's confirmation text.
    pub async fn add_to_watchlist(&self, user_id: UserId, product_id: i64) -> GatewayResult<String> {
        let path = with_query(
            &format!("/watchlist/product/{}", product_id),
            &[("userId", user_id.to_string())],
        );
        let req = self.request(Method::POST, &path);
        self.execute(req).await
    }

    /// Stop watching a product. Returns the server's confirmation text.
    pub async fn remove_from_watchlist(
        &self,
        user_id: UserId,
        product_id: i64,
    ) -> GatewayResult<String> {
        let path = with_query(
            &format!("/watchlist/product/{}", product_id),
            &[("userId", user_id.to_string())],
        );
        let req = self.request(Method::DELETE, &path);
        self.execute(req).await
    }

    // =========================================================================
    // Stats Operations
    // =========================================================================

    /// A user's most frequently purchased products
    pub async fn frequent_products(
        &self,
        user_id: UserId,
        top_n: u32,
    ) -> GatewayResult<Vec<ProductStats>> {
        let path = with_query(
            &format!("/products/frequent/{}", top_n),
            &[("userId", user_id.to_string())],
        );
        let req = self.request(Method::GET, &path);
        self.execute_json(req).await
    }

    /// A user's most recently purchased products
    pub async fn recent_products(
        &self,
        user_id: UserId,
        top_n: u32,
    ) -> GatewayResult<Vec<ProductStats>> {
        let path = with_query(
            &format!("/products/recent/{}", top_n),
            &[("userId", user_id.to_string())],
        );
        let req = self.request(Method::GET, &path);
        self.execute_json(req).await
    }

    /// Store-wide most profitable products
    pub async fn most_profitable_products(&self, top_n: u32) -> GatewayResult<Vec<ProductStats>> {
        let req = self.request(Method::GET, &format!("/products/profit/{}", top_n));
        self.execute_json(req).await
    }

    /// Store-wide best sellers
    pub async fn most_popular_products(&self, top_n: u32) -> GatewayResult<Vec<ProductStats>> {
        let req = self.request(Method::GET, &format!("/products/popular/{}", top_n));
        self.execute_json(req).await
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// List every account on the server
    pub async fn list_accounts(&self) -> GatewayResult<Vec<RemoteAccount>> {
        let req = self.request(Method::GET, "/admin/users");
        self.execute_json(req).await
    }

    /// Delete an account. Returns the server's confirmation text.
    pub async fn delete_account(&self, user_id: UserId) -> GatewayResult<String> {
        let req = self.request(Method::DELETE, &format!("/admin/deleteUser/{}", user_id));
        self.execute(req).await
    }

    /// Every order on the server
    pub async fn admin_orders(&self) -> GatewayResult<Vec<Order>> {
        let req = self.request(Method::GET, "/admin/orders");
        self.execute_json(req).await
    }

    /// Force an order into `status`. Returns the server's confirmation text.
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> GatewayResult<String> {
        let path = with_query(
            &format!("/admin/updateOrderStatus/{}", order_id),
            &[("status", status.as_str().to_string())],
        );
        let req = self.request(Method::PUT, &path);
        self.execute(req).await
    }
}

/// Append query parameters. Values are numbers or fixed enum names, so no
/// escaping is needed.
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{}?{}", path, query.join("&"))
}
