use crate::Gateway;

use mart_core::SessionPatch;
use mart_session::SessionStore;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let gateway = Gateway::new("http://localhost:8080/", SessionStore::in_memory());
    assert_eq!(gateway.base_url(), "http://localhost:8080");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let gateway = Gateway::new("http://localhost:8080", SessionStore::in_memory());
    assert_eq!(gateway.base_url(), "http://localhost:8080");
}

#[test]
fn test_shares_session_with_caller() {
    let session = SessionStore::in_memory();
    let gateway = Gateway::new("http://localhost:8080", session.clone());

    session.set(SessionPatch::new().token("abc")).unwrap();
    assert_eq!(gateway.session().token().as_deref(), Some("abc"));

    gateway.clear_token().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_with_query() {
    use crate::client::client::with_query;

    assert_eq!(with_query("/cart/view", &[]), "/cart/view");
    assert_eq!(
        with_query(
            "/cart/add",
            &[("userId", "7".to_string()), ("productId", "3".to_string())]
        ),
        "/cart/add?userId=7&productId=3"
    );
}
