pub mod error;
pub mod fetch;
pub mod html;
pub mod normalize;
pub mod types;

pub use error::FetchError;
pub use fetch::{
    fetch_all_orders, fetch_all_products, fetch_order_batch, fetch_product_batch, FetchedOrders,
    FetchedProducts, OrderBatch, ProductBatch,
};
pub use html::strip_html_tags;
pub use normalize::{normalize_order, normalize_product};
pub use types::{RawOrderRecord, RawProductRecord};
