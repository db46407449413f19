//! mart - Super Duper Mart CLI
//!
//! Command-line shopping client. Results are printed to stdout as JSON,
//! diagnostics go to the log.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is stored under .mart/session.json)
//! mart login --email alice@example.com --password secret
//!
//! # Add two units of product 12 and print the refreshed cart
//! mart cart add 12 --quantity 2 --pretty
//!
//! # Order everything in the cart
//! mart order place
//! ```

mod admin_commands;
mod cart_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod order_commands;
mod product_commands;
mod refresh;
mod stats_commands;
mod watchlist_commands;

use crate::{
    admin_commands::AdminCommands,
    cart_commands::CartCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    order_commands::OrderCommands,
    product_commands::ProductCommands,
    refresh::RefreshOnSignal,
    stats_commands::StatsCommands,
    watchlist_commands::WatchlistCommands,
};

use mart_client::{GatewayResult, Storefront, StorefrontError, StorefrontResult};
use mart_config::Config;
use mart_core::ProductDraft;
use mart_session::{FileBackend, SessionStore};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde::Serialize;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let storefront = match bootstrap(cli.server.as_deref()) {
        Ok(storefront) => storefront,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // A rejected login says nothing about the stored session.
    let signing_in = matches!(cli.command, Commands::Login { .. });
    let result = dispatch(&storefront, cli.command).await;

    match result.and_then(|value| render(&value, cli.pretty)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let CliError::Storefront(ref failure) = e
                && !signing_in
            {
                storefront.end_session_if_rejected(failure);
            }
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Config, logger, persisted session and the storefront, in that order.
fn bootstrap(server: Option<&str>) -> CliResult<Storefront> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    )?;
    config.log_summary();

    let session = SessionStore::open(FileBackend::new(config.session_path()?))?;
    let base_url = server.unwrap_or(config.gateway.base_url.as_str());

    Ok(Storefront::new(base_url, session))
}

fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn to_json<T: Serialize>(value: T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Classify a plain gateway call that needs no user id.
fn direct<T>(result: GatewayResult<T>, fallback: &'static str) -> StorefrontResult<T> {
    result.map_err(|e| StorefrontError::from_gateway(e, fallback))
}

async fn dispatch(storefront: &Storefront, command: Commands) -> CliResult<Value> {
    let gateway = storefront.gateway();

    match command {
        Commands::Login { email, password } => {
            let session = storefront.login(&email, &password).await?;
            Ok(json!({
                "message": "Login successful!",
                "email": session.email,
                "role": session.role,
                "userId": session.user_id,
                "username": session.display_name,
            }))
        }
        Commands::Register {
            username,
            email,
            password,
        } => to_json(storefront.register(&username, &email, &password).await?),
        Commands::Logout => {
            storefront.logout();
            Ok(json!({ "message": "Logged out" }))
        }
        Commands::Whoami => {
            let session = storefront.session().get();
            Ok(json!({
                "authenticated": session.is_authenticated(),
                "email": session.email,
                "role": session.role,
                "userId": session.user_id,
                "username": session.display_name,
            }))
        }

        Commands::Product { action } => match action {
            ProductCommands::List => {
                to_json(direct(gateway.list_products().await, "Failed to load products")?)
            }
            ProductCommands::Get { id } => {
                to_json(direct(gateway.get_product(id).await, "Failed to load product")?)
            }
            ProductCommands::Create {
                name,
                description,
                wholesale_price,
                retail_price,
                quantity,
            } => {
                let draft = ProductDraft {
                    name: Some(name),
                    description,
                    wholesale_price: Some(wholesale_price),
                    retail_price: Some(retail_price),
                    quantity: Some(quantity),
                };
                to_json(direct(
                    gateway.create_product(&draft).await,
                    "Failed to create product",
                )?)
            }
            ProductCommands::Update {
                id,
                name,
                description,
                wholesale_price,
                retail_price,
                quantity,
            } => {
                let draft = ProductDraft {
                    name,
                    description,
                    wholesale_price,
                    retail_price,
                    quantity,
                };
                to_json(direct(
                    gateway.update_product(id, &draft).await,
                    "Failed to update product",
                )?)
            }
        },

        Commands::Cart { action } => {
            let view = RefreshOnSignal::watch(storefront.buses().cart());

            let cart = match action {
                CartCommands::View => return to_json(storefront.cart().await?),
                CartCommands::Add {
                    product_id,
                    quantity,
                } => storefront.add_to_cart(product_id, quantity).await?,
                CartCommands::Update { item_id, quantity } => {
                    storefront.update_cart_quantity(item_id, quantity).await?
                }
                CartCommands::Remove { product_id } => {
                    storefront.remove_from_cart(product_id).await?
                }
                CartCommands::Clear => storefront.clear_cart().await?,
            };

            if view.take() {
                to_json(storefront.cart().await?)
            } else {
                to_json(cart)
            }
        }

        Commands::Order { action } => match action {
            OrderCommands::Place { items } => {
                let view = RefreshOnSignal::watch(storefront.buses().cart());
                let placed = storefront.place_order(&items).await?;

                let cart = if view.take() {
                    Some(storefront.cart().await?)
                } else {
                    None
                };
                Ok(json!({ "message": placed.message, "cart": cart }))
            }
            OrderCommands::List { all } => {
                if all {
                    to_json(direct(gateway.list_orders(None).await, "Failed to load orders")?)
                } else {
                    to_json(storefront.orders().await?)
                }
            }
            OrderCommands::Get { id } => {
                to_json(direct(gateway.get_order(id).await, "Failed to load order")?)
            }
            OrderCommands::Cancel { id } => {
                to_json(direct(gateway.cancel_order(id).await, "Failed to cancel order")?)
            }
            OrderCommands::Complete { id } => to_json(direct(
                gateway.complete_order(id).await,
                "Failed to complete order",
            )?),
        },

        Commands::Watchlist { action } => {
            let view = RefreshOnSignal::watch(storefront.buses().watchlist());

            let message = match action {
                WatchlistCommands::List => return to_json(storefront.watchlist().await?),
                WatchlistCommands::Add { product_id } => {
                    storefront.add_to_watchlist(product_id).await?
                }
                WatchlistCommands::Remove { product_id } => {
                    storefront.remove_from_watchlist(product_id).await?
                }
            };

            let watchlist = if view.take() {
                Some(storefront.watchlist().await?)
            } else {
                None
            };
            Ok(json!({ "message": message, "watchlist": watchlist }))
        }

        Commands::Stats { action } => match action {
            StatsCommands::Frequent { top } => to_json(storefront.frequent_products(top).await?),
            StatsCommands::Recent { top } => to_json(storefront.recent_products(top).await?),
            StatsCommands::Profit { top } => to_json(direct(
                gateway.most_profitable_products(top).await,
                "Failed to load profitable products",
            )?),
            StatsCommands::Popular { top } => to_json(direct(
                gateway.most_popular_products(top).await,
                "Failed to load popular products",
            )?),
        },

        Commands::Admin { action } => match action {
            AdminCommands::Users => {
                to_json(direct(gateway.list_accounts().await, "Failed to load users")?)
            }
            AdminCommands::DeleteUser { id } => {
                let message = direct(gateway.delete_account(id).await, "Failed to delete user")?;
                Ok(json!({ "message": message }))
            }
            AdminCommands::Orders => {
                to_json(direct(gateway.admin_orders().await, "Failed to load orders")?)
            }
            AdminCommands::UpdateOrderStatus { id, status } => {
                let message = direct(
                    gateway.update_order_status(id, status).await,
                    "Failed to update order status",
                )?;
                Ok(json!({ "message": message }))
            }
        },
    }
}
