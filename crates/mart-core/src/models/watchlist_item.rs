use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub price: f64,
}
