use crate::{LoadResult, SessionBackend, SessionResult};

use std::sync::{Arc, Mutex, MutexGuard};

use mart_core::Session;

/// Non-durable backend. Clones share the same slot, so a test can keep a
/// handle and inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated as if `session` had been saved earlier.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
        }
    }

    /// What is currently persisted.
    pub fn stored(&self) -> Option<Session> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> SessionResult<LoadResult> {
        Ok(match self.lock().clone() {
            Some(session) => LoadResult::loaded(session),
            None => LoadResult::missing(),
        })
    }

    fn save(&self, session: &Session) -> SessionResult<()> {
        *self.lock() = Some(session.clone());
        Ok(())
    }

    fn erase(&self) -> SessionResult<()> {
        *self.lock() = None;
        Ok(())
    }
}
