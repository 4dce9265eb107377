use super::*;
use crate::types::{RawOrder, RawProduct};
use serde_json::json;

// -----------------------------------------------------------------------
// normalize_order — defaulting
// -----------------------------------------------------------------------

fn record_with_payload(id: &str, payload: RawOrder) -> RawOrderRecord {
    RawOrderRecord {
        id: Some(id.to_owned()),
        item: None,
        order: payload,
    }
}

fn populated_payload() -> RawOrder {
    RawOrder {
        order_number: Some(RawNumber::Number(1042)),
        email: Some("buyer@example.com".to_owned()),
        total_price: Some("499.00".to_owned()),
        subtotal_price: Some("449.00".to_owned()),
        total_tax: Some("50.00".to_owned()),
        currency: Some("INR".to_owned()),
        financial_status: Some("paid".to_owned()),
        processed_at: Some("2026-07-01T10:00:00Z".to_owned()),
        created_at: Some("2026-07-01T09:59:00Z".to_owned()),
        line_items: vec![RawLineItem {
            id: Some(7),
            title: Some("Sticker Pack".to_owned()),
            quantity: Some(2),
            price: Some("99.00".to_owned()),
            ..RawLineItem::default()
        }],
        ..RawOrder::default()
    }
}

#[test]
fn empty_record_normalizes_to_documented_defaults() {
    let order = normalize_order(RawOrderRecord::default());

    assert_eq!(order.id, "");
    assert_eq!(order.order_id, "");
    assert_eq!(order.order_number, 0);
    assert_eq!(order.email, "");
    assert_eq!(order.total_price, "0.00");
    assert!((order.total_price_value - 0.0).abs() < f64::EPSILON);
    assert_eq!(order.subtotal_price, "0.00");
    assert_eq!(order.total_tax, "0.00");
    assert_eq!(order.currency, "INR");
    assert_eq!(order.financial_status, "");
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.fulfillment_status.is_none());
    assert_eq!(order.processed_at, "");
    assert_eq!(order.created_at, "");
    assert_eq!(order.billing_address.city, "");
    assert!(order.billing_address.company.is_none());
    assert_eq!(order.customer.id, 0);
    assert_eq!(order.customer.total_spent, "0.00");
    assert!(!order.customer.tax_exempt);
    assert!(order.line_items.is_empty());
    assert!(order.shipping_lines.is_empty());
    assert!(order.payment_details.credit_card_bin.is_none());
    assert!(order.note.is_none());
    assert_eq!(order.tags, "");
    assert_eq!(order.source_name, "");
}

#[test]
fn populated_record_maps_fields_through() {
    let order = normalize_order(record_with_payload("ord-1", populated_payload()));

    assert_eq!(order.id, "ord-1");
    assert_eq!(order.order_id, "1042");
    assert_eq!(order.order_number, 1042);
    assert_eq!(order.total_price, "499.00");
    assert!((order.total_price_value - 499.0).abs() < f64::EPSILON);
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.financial_status, "paid");
    assert_eq!(order.line_items.len(), 1);
    assert_eq!(order.line_items[0].title, "Sticker Pack");
    assert_eq!(order.line_items[0].quantity, 2);
}

#[test]
fn wrapped_and_unwrapped_records_normalize_identically() {
    let unwrapped = record_with_payload("ord-9", populated_payload());
    let wrapped = RawOrderRecord {
        id: Some("ord-9".to_owned()),
        item: Some(populated_payload()),
        order: RawOrder::default(),
    };

    let a = serde_json::to_value(normalize_order(unwrapped)).expect("serialize");
    let b = serde_json::to_value(normalize_order(wrapped)).expect("serialize");
    assert_eq!(a, b);
}

#[test]
fn outer_id_wins_over_wrapped_payload() {
    let record: RawOrderRecord = serde_json::from_value(json!({
        "id": "outer-id",
        "Item": { "id": "inner-id", "order_number": 5 }
    }))
    .expect("deserialize");

    let order = normalize_order(record);
    assert_eq!(order.id, "outer-id");
    assert_eq!(order.order_number, 5);
}

#[test]
fn order_number_string_and_number_normalize_the_same() {
    let from_number = normalize_order(
        serde_json::from_value(json!({"id": "a", "order_number": 238})).expect("deserialize"),
    );
    let from_text = normalize_order(
        serde_json::from_value(json!({"id": "a", "order_number": "238"})).expect("deserialize"),
    );

    assert_eq!(from_number.order_id, "238");
    assert_eq!(from_text.order_id, "238");
    assert_eq!(from_number.order_number, from_text.order_number);
}

#[test]
fn created_at_falls_back_to_processed_at() {
    let mut payload = RawOrder::default();
    payload.processed_at = Some("2026-07-02T00:00:00Z".to_owned());
    let order = normalize_order(record_with_payload("ord-2", payload));

    assert_eq!(order.created_at, "2026-07-02T00:00:00Z");
    assert_eq!(order.processed_at, "2026-07-02T00:00:00Z");
}

#[test]
fn unparsable_total_price_value_is_zero_but_string_is_kept() {
    let mut payload = RawOrder::default();
    payload.total_price = Some("free".to_owned());
    let order = normalize_order(record_with_payload("ord-3", payload));

    assert_eq!(order.total_price, "free");
    assert!((order.total_price_value - 0.0).abs() < f64::EPSILON);
}

#[test]
fn unrecognized_financial_status_coerces_to_pending_but_is_kept_verbatim() {
    let mut payload = RawOrder::default();
    payload.financial_status = Some("refunded".to_owned());
    let order = normalize_order(record_with_payload("ord-4", payload));

    assert_eq!(order.financial_status, "refunded");
    assert_eq!(order.status, OrderStatus::Pending);
}

#[test]
fn partial_address_fills_missing_fields() {
    let record: RawOrderRecord = serde_json::from_value(json!({
        "id": "ord-5",
        "billing_address": { "first_name": "Asha", "city": "Pune" }
    }))
    .expect("deserialize");

    let order = normalize_order(record);
    assert_eq!(order.billing_address.first_name, "Asha");
    assert_eq!(order.billing_address.city, "Pune");
    assert_eq!(order.billing_address.last_name, "");
    assert_eq!(order.billing_address.zip, "");
    assert!(order.billing_address.latitude.is_none());
    // shipping_address was absent entirely and still fully defaults
    assert_eq!(order.shipping_address.country, "");
}

#[test]
fn line_items_default_element_wise() {
    let record: RawOrderRecord = serde_json::from_value(json!({
        "id": "ord-6",
        "line_items": [{}, {"title": "Mug", "gift_card": true}]
    }))
    .expect("deserialize");

    let order = normalize_order(record);
    assert_eq!(order.line_items.len(), 2);
    assert_eq!(order.line_items[0].id, 0);
    assert_eq!(order.line_items[0].price, "0.00");
    assert!(!order.line_items[0].gift_card);
    assert_eq!(order.line_items[1].title, "Mug");
    assert!(order.line_items[1].gift_card);
}

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

fn product_record(id: &str, payload: RawProduct) -> RawProductRecord {
    RawProductRecord {
        id: Some(id.to_owned()),
        item: None,
        product: payload,
    }
}

#[test]
fn empty_product_record_normalizes_to_documented_defaults() {
    let product = normalize_product(RawProductRecord::default());

    assert_eq!(product.id, "N/A");
    assert_eq!(product.title, "Untitled Product");
    assert_eq!(product.description, "");
    assert!((product.price - 0.0).abs() < f64::EPSILON);
    assert_eq!(product.image_url, "");
    assert_eq!(product.vendor, "");
    assert_eq!(product.product_type, "");
    assert_eq!(product.status, "active");
    assert!(product.tags.is_empty());
    assert!(product.variants.is_empty());
    assert!(product.images.is_empty());
}

#[test]
fn product_price_comes_from_first_variant_string() {
    let mut payload = RawProduct::default();
    payload.variants = vec![json!({"price": "249.00"}), json!({"price": "999.00"})];
    let product = normalize_product(product_record("p-1", payload));
    assert!((product.price - 249.0).abs() < f64::EPSILON);
}

#[test]
fn product_price_accepts_numeric_variant_price() {
    let mut payload = RawProduct::default();
    payload.variants = vec![json!({"price": 120.5})];
    let product = normalize_product(product_record("p-2", payload));
    assert!((product.price - 120.5).abs() < f64::EPSILON);
}

#[test]
fn product_image_prefers_primary_then_gallery_then_empty() {
    let primary: RawProductRecord = serde_json::from_value(json!({
        "id": "p-3",
        "image": {"src": "https://cdn/p.jpg"},
        "images": [{"src": "https://cdn/g.jpg"}]
    }))
    .expect("deserialize");
    assert_eq!(normalize_product(primary).image_url, "https://cdn/p.jpg");

    let gallery_only: RawProductRecord = serde_json::from_value(json!({
        "id": "p-4",
        "images": [{"src": "https://cdn/g.jpg"}]
    }))
    .expect("deserialize");
    assert_eq!(normalize_product(gallery_only).image_url, "https://cdn/g.jpg");

    let none: RawProductRecord =
        serde_json::from_value(json!({"id": "p-5"})).expect("deserialize");
    assert_eq!(normalize_product(none).image_url, "");
}

#[test]
fn product_description_is_stripped_of_markup() {
    let mut payload = RawProduct::default();
    payload.body_html = Some("<p>Waterproof &amp; reusable</p>".to_owned());
    let product = normalize_product(product_record("p-6", payload));
    assert_eq!(product.description, "Waterproof & reusable");
}

#[test]
fn product_tags_split_on_comma_space() {
    let mut payload = RawProduct::default();
    payload.tags = Some("minimal, line, black".to_owned());
    let product = normalize_product(product_record("p-7", payload));
    assert_eq!(product.tags, vec!["minimal", "line", "black"]);
}

#[test]
fn product_empty_tag_string_becomes_empty_vec() {
    let mut payload = RawProduct::default();
    payload.tags = Some(String::new());
    let product = normalize_product(product_record("p-8", payload));
    assert!(product.tags.is_empty());
}

#[test]
fn wrapped_product_record_normalizes_like_unwrapped() {
    let wrapped: RawProductRecord = serde_json::from_value(json!({
        "id": "p-9",
        "Item": {"title": "Tattoo", "vendor": "inkhub"}
    }))
    .expect("deserialize");
    let unwrapped: RawProductRecord = serde_json::from_value(json!({
        "id": "p-9",
        "title": "Tattoo",
        "vendor": "inkhub"
    }))
    .expect("deserialize");

    let a = serde_json::to_value(normalize_product(wrapped)).expect("serialize");
    let b = serde_json::to_value(normalize_product(unwrapped)).expect("serialize");
    assert_eq!(a, b);
}
