use crate::{DEFAULT_FAILURE_MESSAGE, GatewayError};

#[test]
fn test_4xx_is_rejected() {
    let err = GatewayError::from_status(409, Some("Username already exists".into()));
    assert!(matches!(err, GatewayError::Rejected { status: 409, .. }));
    assert_eq!(err.status(), 409);
    assert_eq!(err.message(), "Username already exists");
}

#[test]
fn test_5xx_is_server_fault() {
    let err = GatewayError::from_status(503, None);
    assert!(matches!(err, GatewayError::ServerFault { status: 503, .. }));
    assert!(!err.is_unreachable());
}

#[test]
fn test_missing_message_uses_default() {
    let err = GatewayError::from_status(400, None);
    assert_eq!(err.server_message(), None);
    assert_eq!(err.message(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn test_auth_rejection_statuses() {
    assert!(GatewayError::from_status(401, None).is_auth_rejection());
    assert!(!GatewayError::from_status(403, None).is_auth_rejection());
    assert!(!GatewayError::from_status(404, None).is_auth_rejection());
    assert!(!GatewayError::from_status(500, None).is_auth_rejection());
}

#[test]
fn test_forbidden_is_not_an_invalid_token() {
    let err = GatewayError::from_status(403, None);
    assert!(err.is_forbidden());
    assert!(!err.is_auth_rejection());
    assert!(!GatewayError::from_status(401, None).is_forbidden());
}

#[test]
fn test_not_found() {
    assert!(GatewayError::from_status(404, None).is_not_found());
    assert!(!GatewayError::from_status(400, None).is_not_found());
}

#[test]
fn test_decode_error() {
    let source = serde_json::from_str::<Vec<i64>>("{").unwrap_err();
    let err = GatewayError::decode(source);
    let GatewayError::Decode { location, .. } = &err else {
        panic!("expected decode error, got {err:?}");
    };
    assert!(location.file.ends_with("error.rs"));
    assert_eq!(err.message(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn test_display_includes_status_and_message() {
    let err = GatewayError::from_status(400, Some("Insufficient stock".into()));
    let text = err.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("Insufficient stock"));
}
