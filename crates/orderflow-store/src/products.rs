//! Paged scans and CRUD over the `products` document table.
//!
//! Scans mirror `orders`; see that module for cursor semantics. Unlike
//! orders, products can also be written here: the admin dashboard creates
//! simple single-variant products and issues replacement writes for them.

use chrono::Utc;
use orderflow_core::{PagedScan, ScanPage, ScanToken};
use orderflow_fetch::RawProductRecord;
use serde_json::json;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{StoreError, SCAN_PAGE_SIZE};

/// Fields accepted when creating a product. `title` and `price` are
/// required; the handler layer validates before calling in.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub description_html: Option<String>,
    /// Comma-joined tag string, stored exactly as the platform exports it.
    pub tags: Option<String>,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub vendor: Option<String>,
}

impl ProductPatch {
    /// `true` when no updatable field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none() && self.vendor.is_none()
    }
}

/// Reads one page of raw product documents, starting after `token`.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the query or a document decode fails.
pub async fn scan_products(
    pool: &PgPool,
    token: Option<&ScanToken>,
) -> Result<ScanPage<RawProductRecord>, StoreError> {
    let rows: Vec<(String, Json<RawProductRecord>)> = sqlx::query_as(
        "SELECT id, record FROM products \
         WHERE ($1::text IS NULL OR id > $1) \
         ORDER BY id \
         LIMIT $2",
    )
    .bind(token.map(ScanToken::as_str))
    .bind(SCAN_PAGE_SIZE)
    .fetch_all(pool)
    .await?;

    let next_token = if rows.len() as i64 == SCAN_PAGE_SIZE {
        rows.last().map(|(id, _)| ScanToken::new(id.clone()))
    } else {
        None
    };

    let items: Vec<RawProductRecord> = rows
        .into_iter()
        .map(|(id, Json(mut record))| {
            record.id = Some(id);
            record
        })
        .collect();

    Ok(ScanPage {
        count: items.len(),
        items,
        next_token,
    })
}

/// Inserts or replaces a product document under an explicit key, as the
/// platform's export does.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the write fails.
pub async fn put_product(
    pool: &PgPool,
    id: &str,
    record: &serde_json::Value,
) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO products (id, record) VALUES ($1, $2) \
         ON CONFLICT (id) DO UPDATE SET record = EXCLUDED.record, updated_at = NOW()",
    )
    .bind(id)
    .bind(record)
    .execute(pool)
    .await?;
    Ok(())
}

/// Creates a product document with a fresh UUIDv4 key and returns the
/// stored record.
///
/// The document is written in the export's shape (single-variant `variants`
/// list carrying the price) so scans and normalization treat admin-created
/// products exactly like platform-exported ones.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the insert fails.
pub async fn create_product(
    pool: &PgPool,
    new: &NewProduct,
) -> Result<RawProductRecord, StoreError> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let record = json!({
        "title": new.title,
        "variants": [{ "price": format!("{:.2}", new.price) }],
        "vendor": new.vendor,
        "product_type": new.product_type,
        "body_html": new.description_html,
        "tags": new.tags,
        "status": "active",
        "created_at": now,
        "updated_at": now,
    });

    let (Json(mut stored),): (Json<RawProductRecord>,) =
        sqlx::query_as("INSERT INTO products (id, record) VALUES ($1, $2) RETURNING record")
            .bind(&id)
            .bind(&record)
            .fetch_one(pool)
            .await?;

    stored.id = Some(id);
    Ok(stored)
}

/// Fetches a single product document by key.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if no row has the key, or
/// [`StoreError::Sqlx`] on query failure.
pub async fn get_product(pool: &PgPool, id: &str) -> Result<RawProductRecord, StoreError> {
    let row: Option<(Json<RawProductRecord>,)> =
        sqlx::query_as("SELECT record FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match row {
        Some((Json(mut record),)) => {
            record.id = Some(id.to_owned());
            Ok(record)
        }
        None => Err(StoreError::NotFound),
    }
}

/// Applies a partial update to a product document, always refreshing its
/// `updated_at` stamp, and returns the updated record.
///
/// A price update rewrites the variant list to a single admin-priced
/// variant — admin-managed products are single-variant by construction.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if no row has the key, or
/// [`StoreError::Sqlx`] on query failure.
pub async fn update_product(
    pool: &PgPool,
    id: &str,
    patch: &ProductPatch,
) -> Result<RawProductRecord, StoreError> {
    let mut fields = serde_json::Map::new();
    if let Some(title) = &patch.title {
        fields.insert("title".to_owned(), json!(title));
    }
    if let Some(price) = patch.price {
        fields.insert("variants".to_owned(), json!([{ "price": format!("{price:.2}") }]));
    }
    if let Some(vendor) = &patch.vendor {
        fields.insert("vendor".to_owned(), json!(vendor));
    }
    fields.insert("updated_at".to_owned(), json!(Utc::now().to_rfc3339()));

    let row: Option<(Json<RawProductRecord>,)> = sqlx::query_as(
        "UPDATE products SET record = record || $2, updated_at = NOW() \
         WHERE id = $1 \
         RETURNING record",
    )
    .bind(id)
    .bind(serde_json::Value::Object(fields))
    .fetch_optional(pool)
    .await?;

    match row {
        Some((Json(mut record),)) => {
            record.id = Some(id.to_owned());
            Ok(record)
        }
        None => Err(StoreError::NotFound),
    }
}

/// Deletes a product document. Deleting a key that does not exist is not an
/// error — the delete is unconditional.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the delete fails.
pub async fn delete_product(pool: &PgPool, id: &str) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Handle over the `products` table satisfying the paged-scan contract.
#[derive(Debug, Clone)]
pub struct ProductsTable {
    pool: PgPool,
}

impl ProductsTable {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PagedScan for ProductsTable {
    type Record = RawProductRecord;
    type Error = StoreError;

    async fn scan(
        &self,
        token: Option<&ScanToken>,
    ) -> Result<ScanPage<RawProductRecord>, StoreError> {
        scan_products(&self.pool, token).await
    }
}
