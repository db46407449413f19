use crate::UserId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub item_id: Option<i64>,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: UserId,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            total_items: 0,
            total_price: 0.0,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_item(&self, cart_item_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.item_id == Some(cart_item_id))
    }

    pub fn find_by_product(&self, product_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}
