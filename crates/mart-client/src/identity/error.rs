use crate::GatewayError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    /// No way to determine the user; the actor must sign in again.
    #[error("User identity unavailable: {reason} {location}")]
    Unavailable {
        reason: String,
        location: ErrorLocation,
    },

    /// The account lookup itself failed; retrying the action may succeed.
    #[error("User identity lookup failed: {source} {location}")]
    LookupFailed {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn lookup_failed(source: GatewayError) -> Self {
        Self::LookupFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::LookupFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
