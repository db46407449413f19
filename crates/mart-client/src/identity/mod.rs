pub(crate) mod error;

pub use error::{IdentityError, Result as IdentityResult};

use crate::Gateway;

use log::{debug, info, warn};
use mart_core::{RemoteAccount, SessionPatch, UserId};
use mart_session::SessionStore;

/// Recovers the numeric user id when the session does not carry one.
///
/// The fast path reads the session and never touches the network. The slow
/// path lists remote accounts, matches on the exact email and back-fills the
/// session, so the next call takes the fast path. Concurrent callers may
/// each perform the lookup; the write-back merges a single field and is
/// idempotent.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    session: SessionStore,
    gateway: Gateway,
}

impl IdentityResolver {
    pub fn new(session: SessionStore, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    pub async fn resolve(&self) -> IdentityResult<UserId> {
        let session = self.session.get();

        if let Some(user_id) = session.user_id {
            return Ok(user_id);
        }

        let Some(email) = session.email else {
            debug!("No user id and no email in session");
            return Err(IdentityError::unavailable("session has no email"));
        };

        let accounts = self
            .gateway
            .list_accounts()
            .await
            .map_err(|e| IdentityError::lookup_failed(e))?;

        let account = find_by_email(&accounts, &email)
            .ok_or_else(|| IdentityError::unavailable(format!("no account for {email}")))?;

        let mut patch = SessionPatch::new().user_id(account.user_id);
        if session.display_name.is_none()
            && let Some(ref username) = account.username
        {
            patch = patch.display_name(username.clone());
        }

        // The id is already known; a failed write only costs a later lookup.
        if let Err(e) = self.session.set(patch) {
            warn!("Resolved user id {} but could not persist it: {e}", account.user_id);
        }

        info!("Resolved user id {} for {email}", account.user_id);
        Ok(account.user_id)
    }
}

/// Exact, case-sensitive match. Duplicate emails resolve to the first
/// account in server order.
fn find_by_email<'a>(accounts: &'a [RemoteAccount], email: &str) -> Option<&'a RemoteAccount> {
    let mut matches = accounts.iter().filter(|a| a.email == email);
    let first = matches.next()?;

    let extra = matches.count();
    if extra > 0 {
        warn!(
            "{} accounts share email {email}; using user id {}",
            extra + 1,
            first.user_id
        );
    }

    Some(first)
}
