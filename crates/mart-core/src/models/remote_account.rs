use crate::{Role, UserId};

use serde::{Deserialize, Serialize};

/// Account row returned by the admin user listing. Only used as a lookup
/// table when recovering a missing user id, so a role the client does not
/// know never makes the listing unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAccount {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "crate::models::role::deserialize_lenient")]
    pub role: Option<Role>,
}
