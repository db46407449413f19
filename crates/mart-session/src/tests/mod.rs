
use mart_core::{Role, Session};

pub(crate) fn shopper_session() -> Session {
    Session {
        token: Some("t1".into()),
        role: Some(Role::Shopper),
        email: Some("a@x.com".into()),
        user_id: Some(7),
        display_name: Some("alice".into()),
    }
}
