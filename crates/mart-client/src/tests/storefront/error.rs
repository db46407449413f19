use crate::{
    GatewayError, IDENTITY_LOOKUP_MESSAGE, IdentityError, LOGIN_FIRST_MESSAGE, StorefrontError,
    USER_NOT_FOUND_MESSAGE,
};

#[test]
fn test_unauthenticated_message() {
    assert_eq!(
        StorefrontError::unauthenticated().user_message(),
        LOGIN_FIRST_MESSAGE
    );
}

#[test]
fn test_identity_unavailable_message() {
    let err = StorefrontError::from_identity(IdentityError::unavailable("no email"));
    assert!(matches!(err, StorefrontError::IdentityUnavailable { .. }));
    assert_eq!(err.user_message(), USER_NOT_FOUND_MESSAGE);
    assert!(!err.is_retryable());
}

#[test]
fn test_identity_lookup_failed_message() {
    let source = GatewayError::from_status(500, None);
    let err = StorefrontError::from_identity(IdentityError::lookup_failed(source));
    assert!(matches!(err, StorefrontError::IdentityLookupFailed { .. }));
    assert_eq!(err.user_message(), IDENTITY_LOOKUP_MESSAGE);
    assert!(err.is_retryable());
}

#[test]
fn test_rejection_shows_server_message_verbatim() {
    let source = GatewayError::from_status(400, Some("Not enough stock".into()));
    let err = StorefrontError::from_gateway(source, "Failed to add to cart");
    assert_eq!(err.user_message(), "Not enough stock");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn test_rejection_without_message_uses_operation_fallback() {
    let source = GatewayError::from_status(404, None);
    let err = StorefrontError::from_gateway(source, "Failed to remove item");
    assert_eq!(err.user_message(), "Failed to remove item");
}

#[test]
fn test_server_fault_uses_operation_fallback() {
    let source = GatewayError::from_status(500, Some("NullPointerException".into()));
    let err = StorefrontError::from_gateway(source, "Failed to clear cart");
    assert!(matches!(err, StorefrontError::ServerFault { status: 500, .. }));
    assert_eq!(err.user_message(), "Failed to clear cart");
}

#[test]
fn test_auth_rejection_detection() {
    let unauthorized = StorefrontError::from_gateway(GatewayError::from_status(401, None), "x");
    assert!(unauthorized.is_auth_rejection());

    let forbidden = StorefrontError::from_gateway(GatewayError::from_status(403, None), "x");
    assert!(!forbidden.is_auth_rejection());

    let bad_request = StorefrontError::from_gateway(GatewayError::from_status(400, None), "x");
    assert!(!bad_request.is_auth_rejection());
}

#[test]
fn test_identity_lookup_failure_never_forces_logout() {
    for status in [401, 403] {
        let lookup = StorefrontError::from_identity(IdentityError::lookup_failed(
            GatewayError::from_status(status, None),
        ));
        assert!(matches!(lookup, StorefrontError::IdentityLookupFailed { .. }));
        assert!(!lookup.is_auth_rejection());
        assert!(lookup.is_retryable());
    }
}
