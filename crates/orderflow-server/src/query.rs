//! Presentation-layer aggregation over normalized orders.
//!
//! Filtering, searching, sorting, and pagination run here, strictly after
//! normalization — the fetch core returns the table in scan order and makes
//! no ordering promises. These are pure functions over an already-fetched
//! list; they never touch the store.

use chrono::DateTime;
use orderflow_core::{Order, OrderStatus};
use serde::Deserialize;

/// Page size used by the dashboard's order table.
pub const DEFAULT_PER_PAGE: usize = 10;
/// Upper bound for caller-supplied page sizes.
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Listing parameters, already validated by the handler layer.
#[derive(Debug, Clone)]
pub struct OrderListParams {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub sort: SortDirection,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for OrderListParams {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            sort: SortDirection::Asc,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a filtered, sorted order listing.
#[derive(Debug, Clone)]
pub struct OrderListing {
    pub orders: Vec<Order>,
    /// Count after filtering, before pagination.
    pub filtered_count: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Clamps a caller-supplied page size into `1..=MAX_PER_PAGE`.
#[must_use]
pub fn normalize_per_page(per_page: Option<usize>) -> usize {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Applies status filter, free-text search, creation-time sort, and
/// pagination to a fetched order list.
#[must_use]
pub fn apply(orders: Vec<Order>, params: &OrderListParams) -> OrderListing {
    let needle = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<Order> = orders
        .into_iter()
        .filter(|order| params.status.is_none_or(|status| order.status == status))
        .filter(|order| needle.as_deref().is_none_or(|n| matches_search(order, n)))
        .collect();

    filtered.sort_by_key(created_at_sort_key);
    if params.sort == SortDirection::Desc {
        filtered.reverse();
    }

    let filtered_count = filtered.len();
    let per_page = params.per_page.max(1);
    let total_pages = filtered_count.div_ceil(per_page);
    let page = params.page.max(1);

    let start = (page - 1).saturating_mul(per_page);
    let orders: Vec<Order> = filtered.into_iter().skip(start).take(per_page).collect();

    OrderListing {
        orders,
        filtered_count,
        page,
        per_page,
        total_pages,
    }
}

/// Case-insensitive match over the fields the dashboard search box covers.
fn matches_search(order: &Order, needle: &str) -> bool {
    let haystacks = [
        order.id.as_str(),
        order.order_id.as_str(),
        order.email.as_str(),
        order.billing_address.first_name.as_str(),
        order.billing_address.last_name.as_str(),
        order.billing_address.city.as_str(),
        order.financial_status.as_str(),
        order.total_price.as_str(),
    ];
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(needle))
}

/// Sort key for `created_at`; records with missing or unparsable stamps
/// sort first (key 0), matching the dashboard's behavior for invalid dates.
fn created_at_sort_key(order: &Order) -> i64 {
    DateTime::parse_from_rfc3339(&order.created_at)
        .map(|t| t.timestamp_millis())
        .unwrap_or(0)
}
