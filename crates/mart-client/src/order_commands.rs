use mart_core::{OrderLine, OrderStatus};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Place an order from the cart, or from explicit --item lines
    Place {
        /// Order line as PRODUCT_ID:QUANTITY (repeatable)
        #[arg(long = "item", value_parser = parse_order_line)]
        items: Vec<OrderLine>,
    },

    /// List your orders (admins: --all for every order)
    List {
        #[arg(long)]
        all: bool,
    },

    /// Get an order by ID
    Get {
        /// Order ID
        id: i64,
    },

    /// Cancel a processing order
    Cancel {
        /// Order ID
        id: i64,
    },

    /// Mark an order completed (admin)
    Complete {
        /// Order ID
        id: i64,
    },
}

/// Parse `PRODUCT_ID:QUANTITY`
pub(crate) fn parse_order_line(s: &str) -> Result<OrderLine, String> {
    let (product, quantity) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT_ID:QUANTITY, got '{s}'"))?;

    let product_id = product
        .trim()
        .parse()
        .map_err(|e| format!("invalid product id '{product}': {e}"))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|e| format!("invalid quantity '{quantity}': {e}"))?;

    if quantity == 0 {
        return Err("quantity must be at least 1".to_string());
    }

    Ok(OrderLine {
        product_id,
        quantity,
    })
}

/// Accepted by `admin update-order-status`
pub(crate) fn parse_order_status(s: &str) -> Result<OrderStatus, String> {
    s.parse().map_err(|e: mart_core::CoreError| e.to_string())
}
