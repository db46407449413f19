use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List the catalog
    List,

    /// Get a product by ID
    Get {
        /// Product ID
        id: i64,
    },

    /// Create a product (admin)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Price paid to the supplier
        #[arg(long)]
        wholesale_price: f64,

        /// Price shown to shoppers
        #[arg(long)]
        retail_price: f64,

        /// Units in stock
        #[arg(long)]
        quantity: i64,
    },

    /// Update a product (admin); omitted fields stay unchanged
    Update {
        /// Product ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        wholesale_price: Option<f64>,

        #[arg(long)]
        retail_price: Option<f64>,

        #[arg(long)]
        quantity: Option<i64>,
    },
}
