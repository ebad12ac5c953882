use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use storefront::catalog::{find_mock_product, mock_products, Item};
use storefront::config::Config;
use storefront::logging::init_tracing;
use storefront::ui::pagination::{LoadStatus, PaginationController, PaginationState};
use storefront::Storefront;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse the storefront catalog")]
struct Cli {
    /// Config file (default: ~/.config/storefront/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One page of products
    Products {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// One page of users
    Users {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Product categories
    Categories {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// A single category
    Category { id: String },
    /// A single product
    Product { id: u64 },
    /// Featured products
    Featured,
    /// Special deals
    Deals,
    /// A user profile
    User { id: u64 },
    /// Order history
    Orders,
    /// A single order
    Order { id: String },
    /// Showcase products, or one by id
    Showcase { id: Option<String> },
    /// Show the cart, optionally changing it first
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
}

#[derive(Debug, Subcommand)]
enum CartAction {
    /// Remove a product's line
    Remove { id: String },
    /// Set a line's quantity (at least 1)
    Set { id: String, quantity: u32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let storefront = Storefront::new(config).context("building API client")?;
    run(&storefront, cli.command).await
}

async fn run(storefront: &Storefront, command: Command) -> Result<()> {
    match command {
        Command::Products { page, page_size } => {
            let controller = configure(storefront.products_controller(), page, page_size)?;
            show_page(controller).await
        }
        Command::Users { page, page_size } => {
            let controller = configure(storefront.users_controller(), page, page_size)?;
            show_page(controller).await
        }
        Command::Categories { limit } => {
            let catalog = storefront.catalog();
            let categories = match limit {
                Some(limit) => catalog.top_categories(limit).await?,
                None => catalog.categories().await?,
            };
            print_json(&categories)
        }
        Command::Category { id } => print_json(&storefront.catalog().category(&id).await?),
        Command::Product { id } => print_json(&storefront.catalog().product(id).await?),
        Command::Featured => print_json(&storefront.catalog().featured_products().await?),
        Command::Deals => print_json(&storefront.catalog().special_deals().await?),
        Command::User { id } => print_json(&storefront.users().profile(id).await?),
        Command::Orders => print_json(&storefront.orders().orders()),
        Command::Order { id } => match storefront.orders().order(&id) {
            Some(order) => print_json(&order),
            None => bail!("order '{}' not found", id),
        },
        Command::Showcase { id: None } => print_json(&mock_products()),
        Command::Showcase { id: Some(id) } => match find_mock_product(&id) {
            Some(product) => print_json(&product),
            None => bail!("product '{}' not found", id),
        },
        Command::Cart { action } => {
            let cart = storefront.cart();
            match action {
                Some(CartAction::Remove { id }) => {
                    if !cart.remove(&id) {
                        bail!("product '{}' is not in the cart", id);
                    }
                }
                Some(CartAction::Set { id, quantity }) => {
                    if !cart.update_quantity(&id, quantity) {
                        bail!("cannot set quantity {} for product '{}'", quantity, id);
                    }
                }
                None => {}
            }
            print_json(&json!({
                "items": cart.items(),
                "total": cart.total(),
            }))
        }
    }
}

fn configure<T>(
    controller: PaginationController<T>,
    page: u32,
    page_size: Option<u32>,
) -> Result<PaginationController<T>>
where
    T: Item + PartialEq,
{
    let controller = match page_size {
        Some(0) => bail!("--page-size must be at least 1"),
        Some(size) => controller.with_page_size(size),
        None => controller,
    };
    Ok(controller.with_initial_page(page))
}

async fn show_page<T>(controller: PaginationController<T>) -> Result<()>
where
    T: Item + PartialEq + Serialize,
{
    controller.start().await;
    let state = controller.state();
    if state.status == LoadStatus::Failed {
        bail!(
            "{}",
            state.error.unwrap_or_else(|| "page load failed".to_string())
        );
    }
    print_json(&page_summary(&state))
}

fn page_summary<T: Serialize>(state: &PaginationState<T>) -> serde_json::Value {
    json!({
        "page": state.current_page,
        "page_size": state.page_size,
        "total_pages": state.total_pages,
        "total_count": state.total_count,
        "has_next_page": state.has_next_page,
        "has_previous_page": state.has_previous_page(),
        "items": state.items,
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{}", out);
    Ok(())
}
