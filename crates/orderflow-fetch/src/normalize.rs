//! Normalization from raw stored records to the domain types in
//! [`orderflow_core`].
//!
//! Normalization is pure and infallible: every lookup has a literal default,
//! so a record missing any field (or every field) still yields a fully
//! populated domain value. Missing fields are by design never an error here;
//! only the store can fail, and it fails before records reach this module.

use orderflow_core::{
    Address, Customer, LineItem, Order, OrderStatus, PaymentDetails, Product, ShippingLine,
};

use crate::html::strip_html_tags;
use crate::types::{
    RawAddress, RawCustomer, RawLineItem, RawNumber, RawOrderRecord, RawPaymentDetails,
    RawProductRecord, RawShippingLine,
};

/// Normalizes a stored order document into an [`Order`].
///
/// The record key always comes from the outer document, even when the
/// payload is wrapped under `Item`. `created_at` falls back to
/// `processed_at`; the normalizer never reads the clock.
#[must_use]
pub fn normalize_order(record: RawOrderRecord) -> Order {
    let RawOrderRecord { id, item, order } = record;
    let id = id.unwrap_or_default();
    let raw = item.unwrap_or(order);

    let order_id = raw
        .order_number
        .as_ref()
        .map(RawNumber::to_display_string)
        .unwrap_or_default();
    let order_number = raw.order_number.as_ref().map_or(0, RawNumber::as_i64);

    let total_price = raw.total_price.unwrap_or_else(|| "0.00".to_owned());
    let total_price_value = total_price.trim().parse::<f64>().unwrap_or(0.0);

    let financial_status = raw.financial_status.unwrap_or_default();
    let status = OrderStatus::from_financial_status(&financial_status);

    let processed_at = raw.processed_at.unwrap_or_default();
    let created_at = raw.created_at.unwrap_or_else(|| processed_at.clone());

    Order {
        id,
        order_id,
        order_number,
        email: raw.email.unwrap_or_default(),
        total_price,
        total_price_value,
        subtotal_price: raw.subtotal_price.unwrap_or_else(|| "0.00".to_owned()),
        total_tax: raw.total_tax.unwrap_or_else(|| "0.00".to_owned()),
        currency: raw.currency.unwrap_or_else(|| "INR".to_owned()),
        financial_status,
        status,
        fulfillment_status: raw.fulfillment_status,
        processed_at,
        created_at,
        billing_address: normalize_address(raw.billing_address),
        shipping_address: normalize_address(raw.shipping_address),
        customer: normalize_customer(raw.customer),
        line_items: raw.line_items.into_iter().map(normalize_line_item).collect(),
        shipping_lines: raw
            .shipping_lines
            .into_iter()
            .map(normalize_shipping_line)
            .collect(),
        payment_details: normalize_payment_details(raw.payment_details),
        note: raw.note,
        tags: raw.tags.unwrap_or_default(),
        source_name: raw.source_name.unwrap_or_default(),
    }
}

fn normalize_address(raw: Option<RawAddress>) -> Address {
    let raw = raw.unwrap_or_default();
    Address {
        first_name: raw.first_name.unwrap_or_default(),
        last_name: raw.last_name.unwrap_or_default(),
        company: raw.company,
        address1: raw.address1.unwrap_or_default(),
        address2: raw.address2,
        city: raw.city.unwrap_or_default(),
        province: raw.province.unwrap_or_default(),
        province_code: raw.province_code.unwrap_or_default(),
        country: raw.country.unwrap_or_default(),
        country_code: raw.country_code.unwrap_or_default(),
        zip: raw.zip.unwrap_or_default(),
        phone: raw.phone.unwrap_or_default(),
        latitude: raw.latitude,
        longitude: raw.longitude,
    }
}

fn normalize_customer(raw: Option<RawCustomer>) -> Customer {
    let raw = raw.unwrap_or_default();
    Customer {
        id: raw.id.unwrap_or(0),
        email: raw.email.unwrap_or_default(),
        first_name: raw.first_name.unwrap_or_default(),
        last_name: raw.last_name.unwrap_or_default(),
        phone: raw.phone,
        created_at: raw.created_at.unwrap_or_default(),
        orders_count: raw.orders_count.unwrap_or(0),
        total_spent: raw.total_spent.unwrap_or_else(|| "0.00".to_owned()),
        tax_exempt: raw.tax_exempt.unwrap_or(false),
    }
}

fn normalize_line_item(raw: RawLineItem) -> LineItem {
    LineItem {
        id: raw.id.unwrap_or(0),
        title: raw.title.unwrap_or_default(),
        quantity: raw.quantity.unwrap_or(0),
        price: raw.price.unwrap_or_else(|| "0.00".to_owned()),
        sku: raw.sku,
        variant_title: raw.variant_title,
        vendor: raw.vendor,
        product_id: raw.product_id,
        requires_shipping: raw.requires_shipping.unwrap_or(false),
        taxable: raw.taxable.unwrap_or(false),
        gift_card: raw.gift_card.unwrap_or(false),
    }
}

fn normalize_shipping_line(raw: RawShippingLine) -> ShippingLine {
    ShippingLine {
        id: raw.id.unwrap_or(0),
        title: raw.title.unwrap_or_default(),
        price: raw.price.unwrap_or_else(|| "0.00".to_owned()),
        code: raw.code,
        source: raw.source.unwrap_or_default(),
    }
}

fn normalize_payment_details(raw: Option<RawPaymentDetails>) -> PaymentDetails {
    let raw = raw.unwrap_or_default();
    PaymentDetails {
        credit_card_bin: raw.credit_card_bin,
        avs_result_code: raw.avs_result_code,
        cvv_result_code: raw.cvv_result_code,
        credit_card_number: raw.credit_card_number,
        credit_card_company: raw.credit_card_company,
    }
}

/// Normalizes a stored product document into a [`Product`].
///
/// Price comes from the first variant's `price` (string or number), the
/// image URL prefers the primary image over the first gallery entry, and
/// the comma-joined tag string is split into individual tags.
#[must_use]
pub fn normalize_product(record: RawProductRecord) -> Product {
    let RawProductRecord { id, item, product } = record;
    let id = id.unwrap_or_else(|| "N/A".to_owned());
    let raw = item.unwrap_or(product);

    let price = raw.variants.first().map_or(0.0, variant_price);

    let image_url = raw
        .image
        .and_then(|image| image.src)
        .or_else(|| first_image_src(&raw.images))
        .unwrap_or_default();

    let tags = match raw.tags.as_deref() {
        None | Some("") => Vec::new(),
        Some(joined) => joined.split(", ").map(str::to_owned).collect(),
    };

    Product {
        id,
        title: raw.title.unwrap_or_else(|| "Untitled Product".to_owned()),
        description: strip_html_tags(raw.body_html.as_deref().unwrap_or("")),
        price,
        image_url,
        vendor: raw.vendor.unwrap_or_default(),
        product_type: raw.product_type.unwrap_or_default(),
        created_at: raw.created_at.unwrap_or_default(),
        updated_at: raw.updated_at.unwrap_or_default(),
        status: raw.status.unwrap_or_else(|| "active".to_owned()),
        tags,
        variants: raw.variants,
        images: raw.images,
    }
}

/// Price of a raw variant object; `0.0` when absent or unparsable.
fn variant_price(variant: &serde_json::Value) -> f64 {
    match variant.get("price") {
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn first_image_src(images: &[serde_json::Value]) -> Option<String> {
    images
        .first()
        .and_then(|image| image.get("src"))
        .and_then(serde_json::Value::as_str)
        .filter(|src| !src.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
