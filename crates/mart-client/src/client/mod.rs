pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod failure_message;

pub use client::Gateway;
pub use error::{GatewayError, Result as GatewayResult};
