//! Raw record types for documents as the commerce platform exports them.
//!
//! These are the only types in the system that model the store's
//! loosely-typed shapes; they are consumed by `normalize` and go no further.
//! Every field is optional and every collection defaults to empty, so a
//! record missing any field still deserializes.
//!
//! ## Observed shapes from live export data
//!
//! ### `Item` wrapping
//! Some export paths write the payload one level deeper, under an `Item`
//! key, next to the record key: `{"id": "...", "Item": {...}}`. Other paths
//! write the payload fields at the top level beside `id`. Both shapes occur
//! in the same table and must normalize identically; the record key (`id`)
//! is always the outer one.
//!
//! ### `order_number`
//! Observed both as a JSON number and as a numeric string depending on the
//! export path. [`RawNumber`] accepts both.
//!
//! ### `tags`
//! A single comma-joined string (`"minimal, line"`), not an array — unlike
//! the platform's storefront API. Products split it on `", "` during
//! normalization; orders keep it joined.
//!
//! ### `payment_details`
//! Frequently absent as a whole block, and individual card fields inside it
//! are null for non-card payments. Never assume presence.
//!
//! ### Product `variants` / `images`
//! Arbitrary platform objects the dashboard renders opaquely. They pass
//! through as raw JSON; normalization only peeks at the first variant's
//! `price` and the image `src` fields.

use serde::Deserialize;

/// A stored order document, possibly `Item`-wrapped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrderRecord {
    /// Record key from the outer document.
    #[serde(default)]
    pub id: Option<String>,
    /// Wrapped payload, when the export wrote one.
    #[serde(rename = "Item", default)]
    pub item: Option<RawOrder>,
    /// Top-level payload fields, for unwrapped records.
    #[serde(flatten)]
    pub order: RawOrder,
}

impl RawOrderRecord {
    /// The payload source: the `Item` wrapper when present, the top-level
    /// fields otherwise.
    #[must_use]
    pub fn payload(&self) -> &RawOrder {
        self.item.as_ref().unwrap_or(&self.order)
    }
}

/// Order payload fields. All optional; defaults are applied in `normalize`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrder {
    #[serde(default)]
    pub order_number: Option<RawNumber>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub total_price: Option<String>,
    #[serde(default)]
    pub subtotal_price: Option<String>,
    #[serde(default)]
    pub total_tax: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub financial_status: Option<String>,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub billing_address: Option<RawAddress>,
    #[serde(default)]
    pub shipping_address: Option<RawAddress>,
    #[serde(default)]
    pub customer: Option<RawCustomer>,
    #[serde(default)]
    pub line_items: Vec<RawLineItem>,
    #[serde(default)]
    pub shipping_lines: Vec<RawShippingLine>,
    #[serde(default)]
    pub payment_details: Option<RawPaymentDetails>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
}

/// A numeric field observed as either a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(i64),
    Text(String),
}

impl RawNumber {
    /// Integer value; text that does not parse yields `0`.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// String rendering, as the dashboard displays order numbers.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCustomer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub orders_count: Option<i64>,
    #[serde(default)]
    pub total_spent: Option<String>,
    #[serde(default)]
    pub tax_exempt: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub requires_shipping: Option<bool>,
    #[serde(default)]
    pub taxable: Option<bool>,
    #[serde(default)]
    pub gift_card: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShippingLine {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaymentDetails {
    #[serde(default)]
    pub credit_card_bin: Option<String>,
    #[serde(default)]
    pub avs_result_code: Option<String>,
    #[serde(default)]
    pub cvv_result_code: Option<String>,
    #[serde(default)]
    pub credit_card_number: Option<String>,
    #[serde(default)]
    pub credit_card_company: Option<String>,
}

/// A stored product document, possibly `Item`-wrapped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProductRecord {
    /// Record key from the outer document.
    #[serde(default)]
    pub id: Option<String>,
    /// Wrapped payload, when the export wrote one.
    #[serde(rename = "Item", default)]
    pub item: Option<RawProduct>,
    /// Top-level payload fields, for unwrapped records.
    #[serde(flatten)]
    pub product: RawProduct,
}

impl RawProductRecord {
    /// The payload source: the `Item` wrapper when present, the top-level
    /// fields otherwise.
    #[must_use]
    pub fn payload(&self) -> &RawProduct {
        self.item.as_ref().unwrap_or(&self.product)
    }
}

/// Product payload fields as exported by the platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub title: Option<String>,
    /// Raw HTML description; stripped during normalization.
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-joined tag string, e.g. `"minimal, line"`.
    #[serde(default)]
    pub tags: Option<String>,
    /// Primary image object.
    #[serde(default)]
    pub image: Option<RawImage>,
    /// Full gallery, passed through untyped.
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    /// Variant objects, passed through untyped.
    #[serde(default)]
    pub variants: Vec<serde_json::Value>,
}

/// The primary image object; only `src` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub src: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_record_parses_item_and_outer_id() {
        let record: RawOrderRecord = serde_json::from_value(json!({
            "id": "ord-1",
            "Item": { "order_number": 42, "email": "a@b.c" }
        }))
        .expect("deserialize wrapped record");

        assert_eq!(record.id.as_deref(), Some("ord-1"));
        let payload = record.payload();
        assert_eq!(payload.order_number.as_ref().map(RawNumber::as_i64), Some(42));
        assert_eq!(payload.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn unwrapped_record_parses_flattened_payload() {
        let record: RawOrderRecord = serde_json::from_value(json!({
            "id": "ord-2",
            "order_number": "77",
            "total_price": "100.00"
        }))
        .expect("deserialize unwrapped record");

        assert!(record.item.is_none());
        assert_eq!(record.payload().order_number.as_ref().map(RawNumber::as_i64), Some(77));
        assert_eq!(record.payload().total_price.as_deref(), Some("100.00"));
    }

    #[test]
    fn empty_document_deserializes_with_all_defaults() {
        let record: RawOrderRecord =
            serde_json::from_value(json!({})).expect("deserialize empty record");
        assert!(record.id.is_none());
        assert!(record.item.is_none());
        assert!(record.payload().line_items.is_empty());
    }

    #[test]
    fn raw_number_text_that_does_not_parse_is_zero() {
        let n = RawNumber::Text("not-a-number".to_owned());
        assert_eq!(n.as_i64(), 0);
        assert_eq!(n.to_display_string(), "not-a-number");
    }

    #[test]
    fn product_record_keeps_variants_untyped() {
        let record: RawProductRecord = serde_json::from_value(json!({
            "id": "p-1",
            "title": "Tattoo",
            "variants": [{"id": 1, "price": "249.00", "grams": 5}]
        }))
        .expect("deserialize product record");
        assert_eq!(record.payload().variants.len(), 1);
        assert_eq!(record.payload().variants[0]["grams"], 5);
    }
}
