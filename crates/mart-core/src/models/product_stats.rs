use serde::{Deserialize, Serialize};

/// Aggregated sales figures for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub product_name: String,
    pub total_sold: i64,
    pub total_revenue: f64,
}
