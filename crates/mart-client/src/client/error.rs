use crate::DEFAULT_FAILURE_MESSAGE;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Normalized failure of a single remote call.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Cannot reach server: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request rejected (status {status}): {} {location}", .message.as_deref().unwrap_or(DEFAULT_FAILURE_MESSAGE))]
    Rejected {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("Server fault (status {status}): {} {location}", .message.as_deref().unwrap_or(DEFAULT_FAILURE_MESSAGE))]
    ServerFault {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unexpected response body: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Transport failure: no HTTP status was ever received.
    #[track_caller]
    pub fn unreachable(err: reqwest::Error) -> Self {
        GatewayError::Unreachable {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Classify a non-2xx status with the message extracted from its body.
    #[track_caller]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if status >= 500 {
            GatewayError::ServerFault {
                status,
                message,
                location,
            }
        } else {
            GatewayError::Rejected {
                status,
                message,
                location,
            }
        }
    }

    /// A 2xx body that did not match the expected shape.
    #[track_caller]
    pub fn decode(err: serde_json::Error) -> Self {
        GatewayError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// HTTP status, with `0` standing for "never reached the server".
    pub fn status(&self) -> u16 {
        match self {
            Self::Unreachable { .. } => 0,
            Self::Rejected { status, .. } | Self::ServerFault { status, .. } => *status,
            Self::Decode { .. } => 200,
        }
    }

    /// Server-supplied message, if the body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } | Self::ServerFault { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Server message, or the generic default.
    pub fn message(&self) -> &str {
        self.server_message().unwrap_or(DEFAULT_FAILURE_MESSAGE)
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected { status: 404, .. })
    }

    /// 401: the server no longer accepts the token (expired or forged).
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }

    /// 403: the token is valid but lacks the role for this endpoint.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Rejected { status: 403, .. })
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
