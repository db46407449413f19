use clap::Subcommand;

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Your most frequently purchased products
    Frequent {
        #[arg(long, default_value_t = 3)]
        top: u32,
    },

    /// Your most recently purchased products
    Recent {
        #[arg(long, default_value_t = 3)]
        top: u32,
    },

    /// Most profitable products (admin)
    Profit {
        #[arg(long, default_value_t = 3)]
        top: u32,
    },

    /// Best-selling products (admin)
    Popular {
        #[arg(long, default_value_t = 3)]
        top: u32,
    },
}
