use crate::{CANNOT_CONNECT_MESSAGE, GatewayError, IdentityError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const LOGIN_FIRST_MESSAGE: &str = "Please login first";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found. Please login again";
pub const IDENTITY_LOOKUP_MESSAGE: &str = "Cannot get user information. Please login again";

/// Outcome of a storefront action that did not succeed.
///
/// Every variant maps to one notification via [`StorefrontError::user_message`].
/// None of them is fatal to the session; callers decide whether an
/// [`is_auth_rejection`](StorefrontError::is_auth_rejection) failure forces a logout.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Not authenticated {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("User identity unavailable: {source} {location}")]
    IdentityUnavailable {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("User identity lookup failed: {source} {location}")]
    IdentityLookupFailed {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("{fallback} (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    RemoteRejected {
        status: u16,
        message: Option<String>,
        fallback: &'static str,
        location: ErrorLocation,
    },

    #[error("{fallback}: server unreachable: {source} {location}")]
    TransportUnreachable {
        #[source]
        source: GatewayError,
        fallback: &'static str,
        location: ErrorLocation,
    },

    #[error("{fallback}: server fault: {source} {location}")]
    ServerFault {
        status: u16,
        #[source]
        source: GatewayError,
        fallback: &'static str,
        location: ErrorLocation,
    },
}

impl StorefrontError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_identity(err: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_transient() {
            Self::IdentityLookupFailed {
                source: err,
                location,
            }
        } else {
            Self::IdentityUnavailable {
                source: err,
                location,
            }
        }
    }

    /// Classify a gateway failure. `fallback` is the operation's generic
    /// text, shown when the server supplied no message of its own.
    #[track_caller]
    pub fn from_gateway(err: GatewayError, fallback: &'static str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            GatewayError::Rejected {
                status, message, ..
            } => Self::RemoteRejected {
                status,
                message,
                fallback,
                location,
            },
            GatewayError::Unreachable { .. } => Self::TransportUnreachable {
                source: err,
                fallback,
                location,
            },
            // A 2xx body we could not read is as unusable as a 5xx.
            GatewayError::ServerFault { .. } | GatewayError::Decode { .. } => Self::ServerFault {
                status: err.status(),
                source: err,
                fallback,
                location,
            },
        }
    }

    /// Text for the user-facing notification.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Unauthenticated { .. } => LOGIN_FIRST_MESSAGE,
            Self::IdentityUnavailable { .. } => USER_NOT_FOUND_MESSAGE,
            Self::IdentityLookupFailed { .. } => IDENTITY_LOOKUP_MESSAGE,
            Self::RemoteRejected {
                message, fallback, ..
            } => message.as_deref().unwrap_or(*fallback),
            Self::TransportUnreachable { .. } => CANNOT_CONNECT_MESSAGE,
            Self::ServerFault { fallback, .. } => *fallback,
        }
    }

    /// HTTP status when the server answered, `0` when it never did.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } | Self::ServerFault { status, .. } => Some(*status),
            Self::TransportUnreachable { .. } => Some(0),
            _ => None,
        }
    }

    /// The server refused the token itself on the requested operation.
    ///
    /// Only a rejected operation counts. A failed identity lookup is
    /// transient, and a 403 means the role is missing, not that the token
    /// is bad; neither warrants dropping the session.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::RemoteRejected { status: 401, .. })
    }

    /// Whether re-invoking the same action could succeed without signing in again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::IdentityLookupFailed { .. }
                | Self::TransportUnreachable { .. }
                | Self::ServerFault { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
