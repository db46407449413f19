pub(crate) mod file_backend;
pub(crate) mod memory_backend;

use crate::{LoadResult, SessionResult};

use std::path::PathBuf;

use mart_core::Session;

/// Durable medium behind the session store.
pub trait SessionBackend: Send + Sync {
    /// Read the persisted session, if any.
    fn load(&self) -> SessionResult<LoadResult>;

    /// Replace the persisted session with `session`.
    fn save(&self, session: &Session) -> SessionResult<()>;

    /// Remove every persisted field.
    fn erase(&self) -> SessionResult<()>;

    /// Move an unreadable document out of the way so the next save starts clean.
    fn quarantine(&self) -> SessionResult<Option<PathBuf>> {
        Ok(None)
    }
}
