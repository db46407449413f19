use crate::{RemoteAccount, Role};

use serde_json::json;

#[test]
fn test_account_list_with_odd_roles_still_decodes() {
    let accounts: Vec<RemoteAccount> = serde_json::from_value(json!([
        { "userId": 7, "email": "a@x.com", "role": "USER" },
        { "userId": 9, "email": "z@x.com", "role": null },
        { "userId": 10, "email": "s@x.com", "role": "SUPPORT" },
        { "userId": 11, "email": "n@x.com", "role": 3 },
        { "userId": 12, "email": "m@x.com" }
    ]))
    .unwrap();

    assert_eq!(accounts.len(), 5);
    assert_eq!(accounts[0].role, Some(Role::Shopper));
    assert!(accounts[1..].iter().all(|a| a.role.is_none()));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let account: RemoteAccount = serde_json::from_value(json!({
        "userId": 1,
        "username": "root",
        "email": "admin@x.com",
        "password": "$2a$10$hash",
        "role": "ADMIN"
    }))
    .unwrap();

    assert_eq!(account.username.as_deref(), Some("root"));
    assert_eq!(account.role, Some(Role::Admin));
}

#[test]
fn test_serializes_for_admin_listing() {
    let account = RemoteAccount {
        user_id: 7,
        username: None,
        email: "a@x.com".to_string(),
        role: Some(Role::Shopper),
    };

    let value = serde_json::to_value(vec![account]).unwrap();
    assert_eq!(
        value,
        json!([{ "userId": 7, "email": "a@x.com", "role": "USER" }])
    );
}
