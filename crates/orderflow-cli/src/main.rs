mod orders;
mod products;
mod seed;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "orderflow-cli")]
#[command(about = "Orderflow admin command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List orders from the store
    Orders(orders::OrdersArgs),
    /// Manage the products collection
    Products {
        #[command(subcommand)]
        command: products::ProductsCommand,
    },
    /// Load sample documents for local development
    Seed(seed::SeedArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let pool = orderflow_store::connect_pool_from_env().await?;
    orderflow_store::run_migrations(&pool).await?;

    match cli.command {
        Commands::Orders(args) => orders::run(&pool, &args).await,
        Commands::Products { command } => products::run(&pool, command).await,
        Commands::Seed(args) => seed::run(&pool, &args).await,
    }
}
