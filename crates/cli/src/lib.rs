pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use storefront_core::config::{AppConfig, LoadOptions, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Storefront cart and order routing CLI",
    long_about = "Browse the catalog, inspect the agent roster, and route cart orders or product inquiries to a WhatsApp agent.",
    after_help = "Examples:\n  storefront catalog --category fruits --sort price\n  storefront checkout --item 1 --item 1 --item 3\n  storefront inquire 80 --agent 2\n  storefront roster --set 2=online"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog products with optional filters, sorting, and statistics")]
    Catalog {
        #[arg(long, help = "Only products in this category (fruits|vegetables|herbs|exotic)")]
        category: Option<String>,
        #[arg(long, help = "Case-insensitive match on product name or category")]
        search: Option<String>,
        #[arg(long, help = "Sort key (name|price|stock|category)")]
        sort: Option<String>,
        #[arg(long, help = "Sort descending")]
        desc: bool,
        #[arg(long, help = "Inclusive lower price bound")]
        min_price: Option<String>,
        #[arg(long, help = "Inclusive upper price bound")]
        max_price: Option<String>,
        #[arg(long, help = "Only products at or below the low-stock threshold")]
        low_stock: bool,
        #[arg(long, value_name = "COUNT", help = "Show well-stocked affordable products")]
        featured: Option<usize>,
        #[arg(long, help = "Show per-category statistics")]
        stats: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    #[command(about = "Show the agent roster grouped by availability")]
    Roster {
        #[arg(long = "set", value_name = "INDEX=STATUS", help = "Set a channel status before listing")]
        updates: Vec<String>,
    },
    #[command(about = "Build a cart and route the order to an agent")]
    Checkout {
        #[arg(long = "item", value_name = "PRODUCT_ID", required = true)]
        items: Vec<u32>,
        #[arg(long, allow_negative_numbers = true, help = "Send to this roster index instead of rotating")]
        agent: Option<i64>,
    },
    #[command(about = "Ask an agent about a single product")]
    Inquire {
        product_id: u32,
        #[arg(long, allow_negative_numbers = true)]
        agent: Option<i64>,
    },
    #[command(about = "Send a manual order form to an agent")]
    Order {
        #[arg(long)]
        customer_name: String,
        #[arg(long)]
        customer_phone: String,
        #[arg(long)]
        product_name: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        agent: Option<i64>,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Catalog {
            category,
            search,
            sort,
            desc,
            min_price,
            max_price,
            low_stock,
            featured,
            stats,
            limit,
        } => commands::catalog::run(commands::catalog::CatalogArgs {
            category,
            search,
            sort,
            descending: desc,
            min_price,
            max_price,
            low_stock,
            featured,
            stats,
            limit,
        }),
        Command::Roster { updates } => commands::roster::run(&updates),
        Command::Checkout { items, agent } => commands::checkout::run(&items, agent),
        Command::Inquire { product_id, agent } => commands::inquire::run(product_id, agent),
        Command::Order { customer_name, customer_phone, product_name, quantity, notes, agent } => {
            commands::order::run(commands::order::OrderArgs {
                product_name,
                quantity,
                customer_name,
                customer_phone,
                notes,
                agent,
            })
        }
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so stdout stays a single JSON document. A config that
/// fails to load falls back to defaults here; the command reports the error.
fn init_logging() {
    use tracing::Level;

    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
