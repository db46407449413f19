use crate::client::failure_message::extract;

#[test]
fn test_error_field_wins() {
    let body = r#"{"error":"Product out of stock","message":"ignored"}"#;
    assert_eq!(extract(body).as_deref(), Some("Product out of stock"));
}

#[test]
fn test_error_object_message() {
    let body = r#"{"error":{"code":"VALIDATION","message":"Quantity must be positive"}}"#;
    assert_eq!(extract(body).as_deref(), Some("Quantity must be positive"));
}

#[test]
fn test_falls_back_to_message_field() {
    let body = r#"{"timestamp":"2024-01-01","message":"User already exists"}"#;
    assert_eq!(extract(body).as_deref(), Some("User already exists"));
}

#[test]
fn test_empty_error_falls_through_to_message() {
    let body = r#"{"error":"  ","message":"Bad credentials"}"#;
    assert_eq!(extract(body).as_deref(), Some("Bad credentials"));
}

#[test]
fn test_raw_text_body() {
    assert_eq!(
        extract("Cart item not found\n").as_deref(),
        Some("Cart item not found")
    );
}

#[test]
fn test_json_without_known_fields_has_no_message() {
    assert_eq!(extract(r#"{"status":500,"path":"/cart/add"}"#), None);
}

#[test]
fn test_empty_body_has_no_message() {
    assert_eq!(extract(""), None);
    assert_eq!(extract("   "), None);
}
