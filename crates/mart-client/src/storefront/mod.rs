pub(crate) mod error;
pub(crate) mod storefront;

pub use error::{
    IDENTITY_LOOKUP_MESSAGE, LOGIN_FIRST_MESSAGE, Result as StorefrontResult, StorefrontError,
    USER_NOT_FOUND_MESSAGE,
};
pub use storefront::Storefront;
