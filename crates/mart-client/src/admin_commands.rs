use crate::order_commands::parse_order_status;

use mart_core::OrderStatus;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List every account
    Users,

    /// Delete an account
    DeleteUser {
        /// User ID
        id: i64,
    },

    /// List every order
    Orders,

    /// Force an order into a status
    UpdateOrderStatus {
        /// Order ID
        id: i64,

        /// Processing, Completed or Canceled
        #[arg(long, value_parser = parse_order_status)]
        status: OrderStatus,
    },
}
