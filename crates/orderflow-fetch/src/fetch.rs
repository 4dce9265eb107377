//! Paginated fetch loops over the [`PagedScan`] contract.
//!
//! Two access patterns, mirrored for orders and products:
//!
//! - **fetch-all**: an explicit accumulation loop over repeated single-page
//!   scans, for callers that want the whole table (the dashboard's default
//!   view). All-or-nothing: any page failure discards already-fetched pages
//!   and propagates the error, so callers never observe a partial table.
//! - **batch**: exactly one scan call plus the continuation token, for
//!   callers driving incremental loading (infinite scroll). The fetcher
//!   holds no state between batches; callers append pages and track "has
//!   more" themselves, and must guard against overlapping in-flight calls.
//!
//! Pages arrive serially — each continuation token depends on the previous
//! response, so there is nothing to parallelize. The page size is fixed by
//! the store and cannot be overridden here.

use orderflow_core::{Order, PagedScan, Product, ScanToken};

use crate::error::FetchError;
use crate::normalize::{normalize_order, normalize_product};
use crate::types::{RawOrderRecord, RawProductRecord};

/// Maximum number of pages a fetch-all loop will follow before erroring.
/// Prevents infinite loops on a cycling continuation token.
pub const MAX_PAGES: usize = 1000;

/// Result of an exhaustive order fetch.
#[derive(Debug, Clone)]
pub struct FetchedOrders {
    pub orders: Vec<Order>,
    /// Total number of orders fetched; equals `orders.len()`.
    pub total_count: usize,
}

/// One page of orders plus the token to continue from.
#[derive(Debug, Clone)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    /// Continuation token for the next batch; `None` on the last page.
    pub next_token: Option<ScanToken>,
    /// Number of records in this batch, as reported by the scan.
    pub total_count: usize,
}

/// Result of an exhaustive product fetch.
#[derive(Debug, Clone)]
pub struct FetchedProducts {
    pub products: Vec<Product>,
    pub total_count: usize,
}

/// One page of products plus the token to continue from.
#[derive(Debug, Clone)]
pub struct ProductBatch {
    pub products: Vec<Product>,
    pub next_token: Option<ScanToken>,
    pub total_count: usize,
}

/// Fetches every order by iterating the scan until no continuation token
/// is returned, normalizing each page as it arrives.
///
/// # Errors
///
/// Propagates the first scan error unchanged ([`FetchError::Backend`]); no
/// partial result is returned. Returns [`FetchError::PageLimit`] if more
/// than [`MAX_PAGES`] pages are seen.
pub async fn fetch_all_orders<S>(store: &S) -> Result<FetchedOrders, FetchError<S::Error>>
where
    S: PagedScan<Record = RawOrderRecord> + Sync,
{
    let mut orders: Vec<Order> = Vec::new();
    let mut token: Option<ScanToken> = None;
    let mut page_count = 0usize;

    loop {
        page_count += 1;
        if page_count > MAX_PAGES {
            return Err(FetchError::PageLimit {
                max_pages: MAX_PAGES,
            });
        }

        let page = store.scan(token.as_ref()).await?;
        orders.extend(page.items.into_iter().map(normalize_order));

        token = page.next_token;
        if token.is_none() {
            break;
        }
    }

    tracing::debug!(total = orders.len(), pages = page_count, "fetched all orders");
    let total_count = orders.len();
    Ok(FetchedOrders {
        orders,
        total_count,
    })
}

/// Fetches exactly one page of orders, regardless of how many more exist.
///
/// # Errors
///
/// Propagates the scan error unchanged.
pub async fn fetch_order_batch<S>(
    store: &S,
    token: Option<&ScanToken>,
) -> Result<OrderBatch, FetchError<S::Error>>
where
    S: PagedScan<Record = RawOrderRecord> + Sync,
{
    let page = store.scan(token).await?;
    Ok(OrderBatch {
        total_count: page.count,
        next_token: page.next_token,
        orders: page.items.into_iter().map(normalize_order).collect(),
    })
}

/// Fetches every product; see [`fetch_all_orders`] for loop semantics.
///
/// # Errors
///
/// Propagates the first scan error unchanged; [`FetchError::PageLimit`] on
/// a cycling token.
pub async fn fetch_all_products<S>(store: &S) -> Result<FetchedProducts, FetchError<S::Error>>
where
    S: PagedScan<Record = RawProductRecord> + Sync,
{
    let mut products: Vec<Product> = Vec::new();
    let mut token: Option<ScanToken> = None;
    let mut page_count = 0usize;

    loop {
        page_count += 1;
        if page_count > MAX_PAGES {
            return Err(FetchError::PageLimit {
                max_pages: MAX_PAGES,
            });
        }

        let page = store.scan(token.as_ref()).await?;
        products.extend(page.items.into_iter().map(normalize_product));

        token = page.next_token;
        if token.is_none() {
            break;
        }
    }

    tracing::debug!(
        total = products.len(),
        pages = page_count,
        "fetched all products"
    );
    let total_count = products.len();
    Ok(FetchedProducts {
        products,
        total_count,
    })
}

/// Fetches exactly one page of products.
///
/// # Errors
///
/// Propagates the scan error unchanged.
pub async fn fetch_product_batch<S>(
    store: &S,
    token: Option<&ScanToken>,
) -> Result<ProductBatch, FetchError<S::Error>>
where
    S: PagedScan<Record = RawProductRecord> + Sync,
{
    let page = store.scan(token).await?;
    Ok(ProductBatch {
        total_count: page.count,
        next_token: page.next_token,
        products: page.items.into_iter().map(normalize_product).collect(),
    })
}
