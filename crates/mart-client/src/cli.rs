use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mart")]
#[command(about = "Super Duper Mart shopping client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides [gateway] base_url from config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
