use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use orderflow_core::Product;
use orderflow_fetch::{fetch_all_products, normalize_product};
use orderflow_store::{NewProduct, ProductPatch, ProductsTable};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_fetch_error, map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductListData {
    products: Vec<Product>,
    total_count: usize,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateProductBody {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    /// HTML description; stored raw, stripped at read time.
    pub description: Option<String>,
    /// Comma-joined tag string.
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateProductBody {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub vendor: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedData {
    id: String,
    deleted: bool,
}

/// `GET /api/v1/products` — every product, normalized.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ProductListData>>, ApiError> {
    let table = ProductsTable::new(state.pool.clone());
    let fetched = fetch_all_products(&table)
        .await
        .map_err(|e| map_fetch_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ProductListData {
            products: fetched.products,
            total_count: fetched.total_count,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `POST /api/v1/products` — create a product; `title` and `price` are
/// required.
pub(super) async fn create_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateProductBody>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let title = body
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let (Some(title), Some(price)) = (title, body.price) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "title and price are required",
        ));
    };

    let record = orderflow_store::create_product(
        &state.pool,
        &NewProduct {
            title: title.to_owned(),
            price,
            vendor: body.vendor,
            product_type: body.product_type,
            description_html: body.description,
            tags: body.tags,
        },
    )
    .await
    .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: normalize_product(record),
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// `GET /api/v1/products/{product_id}` — one product or 404.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let record = orderflow_store::get_product(&state.pool, &product_id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: normalize_product(record),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `PUT /api/v1/products/{product_id}` — partial update; always refreshes
/// the record's `updated_at` stamp.
pub(super) async fn update_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductBody>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let patch = ProductPatch {
        title: body.title,
        price: body.price,
        vendor: body.vendor,
    };
    if patch.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "at least one of title, price, or vendor is required",
        ));
    }

    let record = orderflow_store::update_product(&state.pool, &product_id, &patch)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: normalize_product(record),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `DELETE /api/v1/products/{product_id}` — unconditional delete.
pub(super) async fn delete_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse<DeletedData>>, ApiError> {
    orderflow_store::delete_product(&state.pool, &product_id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: DeletedData {
            id: product_id,
            deleted: true,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
