//! `seed` subcommand: load sample documents for local development.
//!
//! Generated records deliberately cover the shapes the normalizer has to
//! handle: `Item`-wrapped and flat payloads, missing optional fields, and
//! the platform's comma-joined tag strings.

use clap::Args;
use orderflow_store::{put_order, put_product};
use serde_json::json;
use sqlx::PgPool;

const TITLES: &[&str] = &[
    "Minimal Line Tattoo",
    "Koi Fish Sleeve",
    "Geometric Fox",
    "Lotus Mandala",
    "Script Quote Strip",
    "Tiny Moon Phases",
];

const STATUSES: &[&str] = &["paid", "pending", "failed", "refunded"];

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of order documents to write
    #[arg(long, default_value_t = 50)]
    pub orders: usize,
    /// Number of product documents to write
    #[arg(long, default_value_t = 12)]
    pub products: usize,
}

pub async fn run(pool: &PgPool, args: &SeedArgs) -> anyhow::Result<()> {
    for n in 0..args.orders {
        let id = format!("ord-{n:05}");
        put_order(pool, &id, &sample_order(n)).await?;
    }
    tracing::info!(count = args.orders, "seeded orders");

    for n in 0..args.products {
        let id = format!("prod-{n:05}");
        put_product(pool, &id, &sample_product(n)).await?;
    }
    tracing::info!(count = args.products, "seeded products");

    println!(
        "seeded {} orders and {} products",
        args.orders, args.products
    );
    Ok(())
}

fn sample_order(n: usize) -> serde_json::Value {
    let day = n % 27 + 1;
    let payload = json!({
        "order_number": 1000 + n,
        "email": format!("buyer{n}@example.com"),
        "total_price": format!("{}.00", 100 + (n % 9) * 50),
        "subtotal_price": format!("{}.00", 90 + (n % 9) * 45),
        "total_tax": "18.00",
        "currency": "INR",
        "financial_status": STATUSES[n % STATUSES.len()],
        "processed_at": format!("2026-06-{day:02}T10:00:00Z"),
        "created_at": format!("2026-06-{day:02}T09:58:00Z"),
        "billing_address": {
            "first_name": "Asha",
            "last_name": format!("Rao {n}"),
            "city": "Pune",
            "country": "India",
            "zip": "411001",
        },
        "customer": {
            "id": 9000 + n,
            "email": format!("buyer{n}@example.com"),
            "orders_count": n % 5,
        },
        "line_items": [
            {
                "id": n,
                "title": TITLES[n % TITLES.len()],
                "quantity": n % 3 + 1,
                "price": "99.00",
                "requires_shipping": true,
            }
        ],
        "tags": "seed, sample",
        "source_name": "web",
    });

    // Every third record is written flat; the rest are Item-wrapped, and a
    // few carry a nearly-empty payload to exercise defaulting.
    match n % 6 {
        0 | 3 => payload,
        5 => json!({ "Item": { "order_number": 1000 + n } }),
        _ => json!({ "Item": payload }),
    }
}

fn sample_product(n: usize) -> serde_json::Value {
    let title = TITLES[n % TITLES.len()];
    let payload = json!({
        "title": format!("{title} #{n}"),
        "body_html": format!("<p>{title} &amp; aftercare sheet</p>"),
        "vendor": "inkhub",
        "product_type": "temporary-tattoo",
        "status": if n % 5 == 0 { "draft" } else { "active" },
        "tags": "seed, tattoo",
        "created_at": format!("2026-05-{:02}T08:00:00Z", n % 27 + 1),
        "updated_at": format!("2026-05-{:02}T08:00:00Z", n % 27 + 1),
        "image": { "src": format!("https://cdn.example.com/p/{n}.jpg") },
        "images": [{ "src": format!("https://cdn.example.com/p/{n}.jpg") }],
        "variants": [
            { "id": n * 10, "price": format!("{}.00", 199 + (n % 4) * 50) }
        ],
    });

    if n % 2 == 0 {
        json!({ "Item": payload })
    } else {
        payload
    }
}
