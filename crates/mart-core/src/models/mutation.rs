use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Which server-side resource a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationChannel {
    Cart,
    Watchlist,
}

impl MutationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for MutationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutationChannel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "cart" => Ok(Self::Cart),
            "watchlist" => Ok(Self::Watchlist),
            _ => Err(CoreError::InvalidChannel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// "At least one mutation of this kind completed since you last looked."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationSignal {
    pub channel: MutationChannel,
}

impl MutationSignal {
    pub fn new(channel: MutationChannel) -> Self {
        Self { channel }
    }
}
