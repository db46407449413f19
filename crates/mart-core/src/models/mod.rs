pub mod auth;
pub mod cart;
pub mod mutation;
pub mod order;
pub mod order_status;
pub mod product;
pub mod product_stats;
pub mod remote_account;
pub mod role;
pub mod session;
pub mod watchlist_item;
