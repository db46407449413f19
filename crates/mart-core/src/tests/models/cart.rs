use crate::{Cart, CartItem};

fn sample_cart() -> Cart {
    serde_json::from_str(
        r#"{
            "userId": 7,
            "totalItems": 3,
            "totalPrice": 25.5,
            "items": [
                {"itemId": 11, "productId": 1, "productName": "Pen", "quantity": 2, "price": 2.75},
                {"itemId": 12, "productId": 2, "productName": "Pad", "quantity": 1, "price": 20.0}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_cart_deserializes_server_shape() {
    let cart = sample_cart();
    assert_eq!(cart.user_id, 7);
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].product_name, "Pen");
}

#[test]
fn test_cart_lookup_by_item_and_product() {
    let cart = sample_cart();
    assert_eq!(cart.find_by_item(12).map(|i| i.product_id), Some(2));
    assert_eq!(cart.find_by_product(1).and_then(|i| i.item_id), Some(11));
    assert!(cart.find_by_item(99).is_none());
}

#[test]
fn test_cart_item_line_total() {
    let item = CartItem {
        item_id: None,
        product_id: 1,
        product_name: "Pen".into(),
        quantity: 4,
        price: 2.5,
    };
    assert_eq!(item.line_total(), 10.0);
}

#[test]
fn test_empty_cart() {
    let cart = Cart::empty(3);
    assert!(cart.is_empty());
    assert_eq!(cart.total_items, 0);
}

#[test]
fn test_cart_missing_items_defaults_to_empty() {
    let cart: Cart = serde_json::from_str(r#"{"userId": 5}"#).unwrap();
    assert!(cart.is_empty());
}
