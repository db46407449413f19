use crate::{Role, Session, SessionPatch};

fn logged_in() -> Session {
    Session {
        token: Some("t1".into()),
        role: Some(Role::Shopper),
        email: Some("a@x.com".into()),
        user_id: Some(7),
        display_name: Some("alice".into()),
    }
}

#[test]
fn given_token_when_is_authenticated_then_true() {
    assert!(logged_in().is_authenticated());
    assert!(!Session::default().is_authenticated());
}

#[test]
fn given_admin_role_when_is_admin_then_true() {
    let mut session = logged_in();
    assert!(!session.is_admin());

    session.role = Some(Role::Admin);
    assert!(session.is_admin());

    session.role = None;
    assert!(!session.is_admin());
}

#[test]
fn given_partial_patch_when_merge_then_untouched_fields_survive() {
    let mut session = Session {
        token: Some("t1".into()),
        role: Some(Role::Shopper),
        email: Some("a@x.com".into()),
        user_id: None,
        display_name: None,
    };

    session.merge(SessionPatch::new().user_id(7));

    assert_eq!(session.user_id, Some(7));
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.role, Some(Role::Shopper));
    assert_eq!(session.email.as_deref(), Some("a@x.com"));
    assert!(session.display_name.is_none());
}

#[test]
fn given_empty_patch_when_merge_then_unchanged() {
    let mut session = logged_in();
    session.merge(SessionPatch::new());
    assert_eq!(session, logged_in());
}

#[test]
fn given_session_when_serialize_then_uses_fixed_keys() {
    let json = serde_json::to_value(logged_in()).unwrap();

    assert_eq!(json["token"], "t1");
    assert_eq!(json["role"], "USER");
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["userId"], 7);
    assert_eq!(json["username"], "alice");
}

#[test]
fn given_absent_fields_when_serialize_then_keys_omitted() {
    let session = Session {
        token: Some("t1".into()),
        ..Default::default()
    };

    let json = serde_json::to_string(&session).unwrap();

    assert_eq!(json, r#"{"token":"t1"}"#);
}

#[test]
fn given_empty_document_when_deserialize_then_empty_session() {
    let session: Session = serde_json::from_str("{}").unwrap();
    assert!(session.is_empty());
}

#[test]
fn given_session_when_into_patch_then_merge_reproduces_it() {
    let mut blank = Session::default();
    blank.merge(SessionPatch::from(logged_in()));
    assert_eq!(blank, logged_in());
}
