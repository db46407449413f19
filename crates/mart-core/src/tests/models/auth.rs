use crate::{LoginResponse, Role};

use serde_json::json;

#[test]
fn test_login_response_full() {
    let response: LoginResponse = serde_json::from_value(json!({
        "message": "Login successful",
        "token": "t1",
        "role": "ADMIN",
        "userId": 1,
        "username": "root"
    }))
    .unwrap();

    assert_eq!(response.role, Some(Role::Admin));
    assert_eq!(response.user_id, Some(1));
}

#[test]
fn test_login_response_without_usable_role() {
    for role in [json!(null), json!("GUEST")] {
        let response: LoginResponse =
            serde_json::from_value(json!({ "token": "t1", "role": role })).unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.role, None);
    }

    let response: LoginResponse = serde_json::from_value(json!({ "token": "t1" })).unwrap();
    assert_eq!(response.role, None);
}

#[test]
fn test_login_response_requires_token() {
    assert!(serde_json::from_value::<LoginResponse>(json!({ "role": "USER" })).is_err());
}
