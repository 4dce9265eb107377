//! `orders` subcommand: fetch and print the order table.

use anyhow::bail;
use clap::Args;
use orderflow_core::OrderStatus;
use orderflow_fetch::fetch_all_orders;
use orderflow_store::OrdersTable;
use sqlx::PgPool;

#[derive(Debug, Args)]
pub struct OrdersArgs {
    /// Filter by status: paid, pending, or failed
    #[arg(long)]
    pub status: Option<String>,
    /// Maximum number of rows to print
    #[arg(long, default_value_t = 25)]
    pub limit: usize,
}

pub async fn run(pool: &PgPool, args: &OrdersArgs) -> anyhow::Result<()> {
    let status = match args.status.as_deref() {
        None => None,
        Some("paid") => Some(OrderStatus::Paid),
        Some("pending") => Some(OrderStatus::Pending),
        Some("failed") => Some(OrderStatus::Failed),
        Some(other) => bail!("unknown status \"{other}\"; expected paid, pending, or failed"),
    };

    let table = OrdersTable::new(pool.clone());
    let fetched = fetch_all_orders(&table).await?;

    let mut shown = 0usize;
    println!(
        "{:<14} {:>8} {:<8} {:>14} {:<28} {}",
        "ID", "ORDER#", "STATUS", "TOTAL", "EMAIL", "CREATED"
    );
    for order in fetched
        .orders
        .iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .take(args.limit)
    {
        let total = format!("{} {}", order.total_price, order.currency);
        println!(
            "{:<14} {:>8} {:<8} {:>14} {:<28} {}",
            order.id, order.order_number, order.status, total, order.email, order.created_at,
        );
        shown += 1;
    }

    println!("\n{shown} shown of {} total orders", fetched.total_count);
    Ok(())
}
