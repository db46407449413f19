use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Shopper.as_str(), "USER");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("USER").unwrap(), Role::Shopper);
    assert_eq!(Role::from_str("SHOPPER").unwrap(), Role::Shopper);
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("ROOT").is_err());
}

#[test]
fn test_role_deserialize_accepts_server_and_alias_names() {
    let user: Role = serde_json::from_str("\"USER\"").unwrap();
    let shopper: Role = serde_json::from_str("\"SHOPPER\"").unwrap();
    let admin: Role = serde_json::from_str("\"ADMIN\"").unwrap();

    assert_eq!(user, Role::Shopper);
    assert_eq!(shopper, Role::Shopper);
    assert_eq!(admin, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"GUEST\"").is_err());
}

#[test]
fn test_role_serializes_to_server_name() {
    assert_eq!(serde_json::to_string(&Role::Shopper).unwrap(), "\"USER\"");
}
