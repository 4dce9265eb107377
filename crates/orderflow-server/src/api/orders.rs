use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use orderflow_core::{Order, OrderStatus, ScanToken};
use orderflow_fetch::{fetch_all_orders, fetch_order_batch};
use orderflow_store::OrdersTable;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;
use crate::query::{self, normalize_per_page, OrderListParams, SortDirection};

use super::{map_fetch_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct OrdersQuery {
    /// `paid`, `pending`, `failed`, or `all` (the default).
    pub status: Option<String>,
    /// Free-text search across id, order number, email, name, and city.
    pub q: Option<String>,
    pub sort: Option<SortDirection>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    /// `true` busts the TTL cache before fetching.
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct OrderListData {
    orders: Vec<Order>,
    /// Count of all orders in the store, before filtering.
    total_count: usize,
    /// Count after filters, before pagination.
    filtered_count: usize,
    page: usize,
    per_page: usize,
    total_pages: usize,
}

#[derive(Debug, Deserialize)]
pub(super) struct BatchQuery {
    /// Continuation token from the previous batch; absent for the first.
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct OrderBatchData {
    orders: Vec<Order>,
    next_token: Option<ScanToken>,
    total_count: usize,
}

/// `GET /api/v1/orders` — the dashboard's full order listing.
///
/// Fetches the whole table through the TTL cache, then applies the query
/// layer (filter, search, sort, paginate) to the normalized list.
pub(super) async fn list_orders(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<OrdersQuery>,
) -> Result<Json<ApiResponse<OrderListData>>, ApiError> {
    let status = parse_status_filter(params.status.as_deref())
        .map_err(|msg| ApiError::new(req_id.0.clone(), "validation_error", msg))?;

    if params.refresh {
        state.orders_cache.invalidate().await;
    }

    let fetched = match state.orders_cache.get().await {
        Some(cached) => cached,
        None => {
            let table = OrdersTable::new(state.pool.clone());
            let fresh = Arc::new(
                fetch_all_orders(&table)
                    .await
                    .map_err(|e| map_fetch_error(req_id.0.clone(), &e))?,
            );
            state.orders_cache.put(Arc::clone(&fresh)).await;
            fresh
        }
    };

    let listing = query::apply(
        fetched.orders.clone(),
        &OrderListParams {
            status,
            search: params.q,
            sort: params.sort.unwrap_or(SortDirection::Asc),
            page: params.page.unwrap_or(1),
            per_page: normalize_per_page(params.per_page),
        },
    );

    Ok(Json(ApiResponse {
        data: OrderListData {
            orders: listing.orders,
            total_count: fetched.total_count,
            filtered_count: listing.filtered_count,
            page: listing.page,
            per_page: listing.per_page,
            total_pages: listing.total_pages,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/orders/batch` — one scan page for incremental loading.
///
/// The caller appends batches and tracks "has more" via `next_token`; the
/// server holds no scroll state and does not de-duplicate overlapping
/// in-flight batch requests.
pub(super) async fn get_order_batch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<BatchQuery>,
) -> Result<Json<ApiResponse<OrderBatchData>>, ApiError> {
    let table = OrdersTable::new(state.pool.clone());
    let token = params.token.map(ScanToken::new);

    let batch = fetch_order_batch(&table, token.as_ref())
        .await
        .map_err(|e| map_fetch_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: OrderBatchData {
            orders: batch.orders,
            next_token: batch.next_token,
            total_count: batch.total_count,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Parses the `status` query param; `all` and absence mean no filter.
fn parse_status_filter(raw: Option<&str>) -> Result<Option<OrderStatus>, String> {
    match raw {
        None | Some("all") => Ok(None),
        Some("paid") => Ok(Some(OrderStatus::Paid)),
        Some("pending") => Ok(Some(OrderStatus::Pending)),
        Some("failed") => Ok(Some(OrderStatus::Failed)),
        Some(other) => Err(format!(
            "unknown status filter \"{other}\"; expected paid, pending, failed, or all"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_filter_accepts_known_values() {
        assert_eq!(parse_status_filter(None), Ok(None));
        assert_eq!(parse_status_filter(Some("all")), Ok(None));
        assert_eq!(
            parse_status_filter(Some("paid")),
            Ok(Some(OrderStatus::Paid))
        );
        assert_eq!(
            parse_status_filter(Some("pending")),
            Ok(Some(OrderStatus::Pending))
        );
        assert_eq!(
            parse_status_filter(Some("failed")),
            Ok(Some(OrderStatus::Failed))
        );
    }

    #[test]
    fn parse_status_filter_rejects_unknown_values() {
        let err = parse_status_filter(Some("refunded")).unwrap_err();
        assert!(err.contains("refunded"));
    }
}
