use clap::Subcommand;

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show the cart
    View,

    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i64,

        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Set the quantity of a cart line (0 removes it)
    Update {
        /// Cart item ID
        item_id: i64,

        #[arg(long)]
        quantity: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: i64,
    },

    /// Empty the cart
    Clear,
}
