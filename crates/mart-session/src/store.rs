use crate::{MemoryBackend, SessionBackend, SessionResult};

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};
use mart_core::{Session, SessionPatch, UserId};

/// Process-wide handle to the authenticated session.
///
/// Cloning is cheap and every clone observes the same state. Reads never
/// fail; writes update memory first and then persist, so a persistence
/// error is reported without leaving memory and the caller out of step.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    session: RwLock<Session>,
    backend: Box<dyn SessionBackend>,
}

impl SessionStore {
    /// Restore the session from `backend`.
    ///
    /// A missing document yields an empty session. A corrupted document is
    /// quarantined and also yields an empty session.
    pub fn open(backend: impl SessionBackend + 'static) -> SessionResult<Self> {
        let loaded = backend.load()?;

        let session = match (loaded.session, loaded.corruption_error) {
            (Some(session), _) => session,
            (None, Some(reason)) => {
                warn!("Discarding unreadable session: {reason}");
                backend.quarantine()?;
                Session::default()
            }
            (None, None) => Session::default(),
        };

        info!(
            "Session store opened (authenticated: {})",
            session.is_authenticated()
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                session: RwLock::new(session),
                backend: Box::new(backend),
            }),
        })
    }

    /// Empty store that persists nowhere.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                session: RwLock::new(Session::default()),
                backend: Box::new(MemoryBackend::new()),
            }),
        }
    }

    /// Snapshot of the current session.
    pub fn get(&self) -> Session {
        self.read().clone()
    }

    /// Merge the present fields of `patch` into the session and persist it.
    pub fn set(&self, patch: SessionPatch) -> SessionResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut session = self.write();
        session.merge(patch);
        self.inner.backend.save(&session)
    }

    /// Wipe every field, in memory and in durable storage.
    pub fn clear(&self) -> SessionResult<()> {
        let mut session = self.write();
        *session = Session::default();
        self.inner.backend.erase()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn email(&self) -> Option<String> {
        self.read().email.clone()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.read().user_id
    }

    /// Remove the bearer token only, keeping the rest of the session.
    pub fn clear_token(&self) -> SessionResult<()> {
        let mut session = self.write();
        if session.token.take().is_none() {
            return Ok(());
        }
        if session.is_empty() {
            self.inner.backend.erase()
        } else {
            self.inner.backend.save(&session)
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner
            .session
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner
            .session
            .write()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.read();
        f.debug_struct("SessionStore")
            .field("authenticated", &session.is_authenticated())
            .field("role", &session.role)
            .field("user_id", &session.user_id)
            .finish_non_exhaustive()
    }
}
