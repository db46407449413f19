//! Durable storage of the authenticated session.
//!
//! [`SessionStore`] is the single owner of session state for the process.
//! It is opened once from a [`SessionBackend`], merged into with
//! [`SessionStore::set`] and wiped with [`SessionStore::clear`].

pub(crate) mod backend;
pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use backend::{SessionBackend, file_backend::FileBackend, memory_backend::MemoryBackend};
pub use error::{Result as SessionResult, SessionError};
pub use load_result::LoadResult;
pub use store::SessionStore;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
