//! Paged scans over the `orders` document table.
//!
//! Orders are written by the commerce platform's export and only read here.
//! The scan walks the table in key order with a keyset cursor: the opaque
//! continuation token is the last key of the previous page. A full page
//! always yields a token, so a table whose size is an exact multiple of the
//! page size ends with one empty, token-less page — callers following
//! tokens handle that shape naturally.

use orderflow_core::{PagedScan, ScanPage, ScanToken};
use orderflow_fetch::RawOrderRecord;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::{StoreError, SCAN_PAGE_SIZE};

/// Reads one page of raw order documents, starting after `token`.
///
/// The key column is authoritative: each returned record carries its row id
/// regardless of what the stored document claims.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the query or a document decode fails.
pub async fn scan_orders(
    pool: &PgPool,
    token: Option<&ScanToken>,
) -> Result<ScanPage<RawOrderRecord>, StoreError> {
    let rows: Vec<(String, Json<RawOrderRecord>)> = sqlx::query_as(
        "SELECT id, record FROM orders \
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

    let items: Vec<RawOrderRecord> = rows
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

/// Inserts or replaces an order document, as the platform's export does.
///
/// # Errors
///
/// Returns [`StoreError::Sqlx`] if the write fails.
pub async fn put_order(
    pool: &PgPool,
    id: &str,
    record: &serde_json::Value,
) -> Result<(), StoreError> {
    sqlx::query(
        "INSERT INTO orders (id, record) VALUES ($1, $2) \
         ON CONFLICT (id) DO UPDATE SET record = EXCLUDED.record, updated_at = NOW()",
    )
    .bind(id)
    .bind(record)
    .execute(pool)
    .await?;
    Ok(())
}

/// Handle over the `orders` table satisfying the paged-scan contract.
#[derive(Debug, Clone)]
pub struct OrdersTable {
    pool: PgPool,
}

impl OrdersTable {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PagedScan for OrdersTable {
    type Record = RawOrderRecord;
    type Error = StoreError;

    async fn scan(
        &self,
        token: Option<&ScanToken>,
    ) -> Result<ScanPage<RawOrderRecord>, StoreError> {
        scan_orders(&self.pool, token).await
    }
}
