use crate::{DatePlaced, Order, OrderLine, OrderStatus};

use std::str::FromStr;

#[test]
fn test_order_status_round_trips_server_names() {
    for status in [
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ] {
        assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_order_status_from_str_is_lenient_on_case_and_spelling() {
    assert_eq!(
        OrderStatus::from_str("cancelled").unwrap(),
        OrderStatus::Canceled
    );
    assert_eq!(
        OrderStatus::from_str("COMPLETED").unwrap(),
        OrderStatus::Completed
    );
    assert!(OrderStatus::from_str("shipped").is_err());
}

#[test]
fn test_order_accepts_epoch_millis_date() {
    let order: Order = serde_json::from_str(
        r#"{"orderId": 1, "datePlaced": 1704067200000, "orderStatus": "Processing", "totalPrice": 3.0, "items": []}"#,
    )
    .unwrap();
    assert_eq!(order.date_placed, DatePlaced::EpochMillis(1704067200000));
}

#[test]
fn test_order_accepts_text_date() {
    let order: Order = serde_json::from_str(
        r#"{"orderId": 1, "datePlaced": "2024-01-01T00:00:00", "orderStatus": "Canceled", "totalPrice": 3.0}"#,
    )
    .unwrap();
    assert_eq!(order.date_placed.to_string(), "2024-01-01T00:00:00");
    assert_eq!(order.order_status, OrderStatus::Canceled);
    assert!(order.items.is_empty());
}

#[test]
fn test_order_line_serializes_camel_case() {
    let line = OrderLine {
        product_id: 4,
        quantity: 2,
    };
    assert_eq!(
        serde_json::to_string(&line).unwrap(),
        r#"{"productId":4,"quantity":2}"#
    );
}
