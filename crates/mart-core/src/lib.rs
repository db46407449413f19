pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use models::cart::{Cart, CartItem};
pub use models::mutation::{MutationChannel, MutationSignal};
pub use models::order::{DatePlaced, Order, OrderItem, OrderLine};
pub use models::order_status::OrderStatus;
pub use models::product::{Product, ProductDraft};
pub use models::product_stats::ProductStats;
pub use models::remote_account::RemoteAccount;
pub use models::role::Role;
pub use models::session::{Session, SessionPatch};
pub use models::watchlist_item::WatchlistItem;

/// Numeric account identity assigned by the resource server.
pub type UserId = i64;
