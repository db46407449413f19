use crate::{
    admin_commands::AdminCommands, cart_commands::CartCommands, order_commands::OrderCommands,
    product_commands::ProductCommands, stats_commands::StatsCommands,
    watchlist_commands::WatchlistCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create a shopper account
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the stored session (without the token)
    Whoami,

    /// Catalog operations
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Shopping cart operations
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },

    /// Order operations
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Watchlist operations
    Watchlist {
        #[command(subcommand)]
        action: WatchlistCommands,
    },

    /// Purchase statistics
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },

    /// Administrator operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
