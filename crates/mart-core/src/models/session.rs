use crate::{Role, UserId};

use serde::{Deserialize, Serialize};

/// Authenticated session snapshot.
///
/// Persisted as a single JSON document under the fixed keys `token`,
/// `role`, `email`, `userId` and `username`. A present `token` is what
/// makes the actor authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(rename = "username", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.is_admin())
    }

    pub fn is_empty(&self) -> bool {
        *self == Session::default()
    }

    /// Merge the present fields of `patch`, leaving every other field as it was.
    pub fn merge(&mut self, patch: SessionPatch) {
        let SessionPatch {
            token,
            role,
            email,
            user_id,
            display_name,
        } = patch;

        if token.is_some() {
            self.token = token;
        }
        if role.is_some() {
            self.role = role;
        }
        if email.is_some() {
            self.email = email;
        }
        if user_id.is_some() {
            self.user_id = user_id;
        }
        if display_name.is_some() {
            self.display_name = display_name;
        }
    }
}

/// Partial session update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub user_id: Option<UserId>,
    pub display_name: Option<String>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == SessionPatch::default()
    }
}

impl From<Session> for SessionPatch {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            role: session.role,
            email: session.email,
            user_id: session.user_id,
            display_name: session.display_name,
        }
    }
}
