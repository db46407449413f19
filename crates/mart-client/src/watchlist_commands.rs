use clap::Subcommand;

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// Show watched products
    List,

    /// Watch a product
    Add {
        /// Product ID
        product_id: i64,
    },

    /// Stop watching a product
    Remove {
        /// Product ID
        product_id: i64,
    },
}
