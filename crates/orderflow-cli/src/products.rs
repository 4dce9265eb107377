//! `products` subcommand: list and CRUD over the products collection.

use anyhow::bail;
use clap::Subcommand;
use orderflow_fetch::{fetch_all_products, normalize_product};
use orderflow_store::{NewProduct, ProductPatch, ProductsTable};
use sqlx::PgPool;

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List all products
    List,
    /// Create a product
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        vendor: Option<String>,
        /// Comma-joined tag string, e.g. "minimal, line"
        #[arg(long)]
        tags: Option<String>,
    },
    /// Print one product as JSON
    Get { id: String },
    /// Update fields of a product
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        vendor: Option<String>,
    },
    /// Delete a product
    Delete { id: String },
}

pub async fn run(pool: &PgPool, command: ProductsCommand) -> anyhow::Result<()> {
    match command {
        ProductsCommand::List => {
            let table = ProductsTable::new(pool.clone());
            let fetched = fetch_all_products(&table).await?;
            println!("{:<38} {:>10} {:<10} {}", "ID", "PRICE", "STATUS", "TITLE");
            for product in &fetched.products {
                println!(
                    "{:<38} {:>10.2} {:<10} {}",
                    product.id, product.price, product.status, product.title
                );
            }
            println!("\n{} products", fetched.total_count);
        }
        ProductsCommand::Create {
            title,
            price,
            vendor,
            tags,
        } => {
            let record = orderflow_store::create_product(
                pool,
                &NewProduct {
                    title,
                    price,
                    vendor,
                    product_type: None,
                    description_html: None,
                    tags,
                },
            )
            .await?;
            let product = normalize_product(record);
            println!("created product {}", product.id);
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        ProductsCommand::Get { id } => {
            let record = orderflow_store::get_product(pool, &id).await?;
            println!("{}", serde_json::to_string_pretty(&normalize_product(record))?);
        }
        ProductsCommand::Update {
            id,
            title,
            price,
            vendor,
        } => {
            let patch = ProductPatch {
                title,
                price,
                vendor,
            };
            if patch.is_empty() {
                bail!("nothing to update; pass at least one of --title, --price, --vendor");
            }
            let record = orderflow_store::update_product(pool, &id, &patch).await?;
            println!("{}", serde_json::to_string_pretty(&normalize_product(record))?);
        }
        ProductsCommand::Delete { id } => {
            orderflow_store::delete_product(pool, &id).await?;
            println!("deleted product {id}");
        }
    }
    Ok(())
}
