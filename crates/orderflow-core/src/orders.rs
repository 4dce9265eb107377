//! Normalized order types.
//!
//! Orders are written into the document store by the commerce platform's
//! webhook export and only read here. The normalizer in `orderflow-fetch`
//! produces these types; every field is populated — missing upstream values
//! are replaced by the documented defaults, never left absent.

use serde::{Deserialize, Serialize};

/// Financial status of an order, coerced into a closed set for filtering
/// and badge styling. The verbatim upstream string is kept separately on
/// [`Order::financial_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Paid,
    Pending,
    Failed,
}

impl OrderStatus {
    /// Coerces an upstream `financial_status` string into the closed set.
    ///
    /// Unrecognized values (including `"refunded"`, `"voided"`,
    /// `"partially_paid"`) and the empty string all map to `Pending`; see
    /// DESIGN.md for the caveat on this behavior.
    #[must_use]
    pub fn from_financial_status(status: &str) -> Self {
        match status {
            "paid" => OrderStatus::Paid,
            "failed" => OrderStatus::Failed,
            _ => OrderStatus::Pending,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A fully-normalized merchandise order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Key of the stored record. Always taken from the outer record, never
    /// from an `Item`-wrapped payload.
    pub id: String,
    /// Upstream order number rendered as a string (e.g. `"1042"`).
    pub order_id: String,
    /// Upstream order number as an integer; `0` when absent.
    pub order_number: i64,
    pub email: String,
    /// Total as a decimal string, exactly as the platform exports it.
    pub total_price: String,
    /// `total_price` parsed as a float for sorting and aggregation; `0.0`
    /// when the string does not parse.
    pub total_price_value: f64,
    pub subtotal_price: String,
    pub total_tax: String,
    /// ISO 4217 code; the observed store default is `"INR"`.
    pub currency: String,
    /// Verbatim upstream financial status, empty when absent.
    pub financial_status: String,
    /// [`Self::financial_status`] coerced into the closed set.
    pub status: OrderStatus,
    pub fulfillment_status: Option<String>,
    pub processed_at: String,
    /// Upstream `created_at`, falling back to `processed_at` when missing.
    pub created_at: String,
    pub billing_address: Address,
    pub shipping_address: Address,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub shipping_lines: Vec<ShippingLine>,
    pub payment_details: PaymentDetails,
    pub note: Option<String>,
    /// Comma-joined tag string as exported, not a structured set.
    pub tags: String,
    pub source_name: String,
}

impl Order {
    /// Customer display name assembled from the billing address.
    #[must_use]
    pub fn customer_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.billing_address.first_name, self.billing_address.last_name
        );
        name.trim().to_owned()
    }
}

/// Billing or shipping address; the two are structurally identical upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub province: String,
    pub province_code: String,
    pub country: String,
    pub country_code: String,
    pub zip: String,
    pub phone: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Customer identity, contact, and lifetime stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub created_at: String,
    pub orders_count: i64,
    pub total_spent: String,
    pub tax_exempt: bool,
}

/// One purchasable line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub title: String,
    pub quantity: i64,
    /// Unit price as a decimal string.
    pub price: String,
    pub sku: Option<String>,
    pub variant_title: Option<String>,
    pub vendor: Option<String>,
    pub product_id: Option<i64>,
    pub requires_shipping: bool,
    pub taxable: bool,
    pub gift_card: bool,
}

/// A shipping method applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingLine {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub code: Option<String>,
    pub source: String,
}

/// Card metadata from the payment gateway. Every field is optional; exports
/// routinely omit the whole block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub credit_card_bin: Option<String>,
    pub avs_result_code: Option<String>,
    pub cvv_result_code: Option<String>,
    pub credit_card_number: Option<String>,
    pub credit_card_company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_paid_maps_to_paid() {
        assert_eq!(OrderStatus::from_financial_status("paid"), OrderStatus::Paid);
    }

    #[test]
    fn status_failed_maps_to_failed() {
        assert_eq!(
            OrderStatus::from_financial_status("failed"),
            OrderStatus::Failed
        );
    }

    #[test]
    fn status_pending_maps_to_pending() {
        assert_eq!(
            OrderStatus::from_financial_status("pending"),
            OrderStatus::Pending
        );
    }

    #[test]
    fn status_unrecognized_defaults_to_pending() {
        assert_eq!(
            OrderStatus::from_financial_status("refunded"),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::from_financial_status("partially_paid"),
            OrderStatus::Pending
        );
    }

    #[test]
    fn status_empty_defaults_to_pending() {
        assert_eq!(OrderStatus::from_financial_status(""), OrderStatus::Pending);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Paid).expect("serialize");
        assert_eq!(json, "\"paid\"");
    }

    #[test]
    fn customer_name_joins_and_trims() {
        let mut order = sample_order();
        order.billing_address.first_name = "Asha".to_owned();
        order.billing_address.last_name = "Rao".to_owned();
        assert_eq!(order.customer_name(), "Asha Rao");

        order.billing_address.last_name = String::new();
        assert_eq!(order.customer_name(), "Asha");

        order.billing_address.first_name = String::new();
        assert_eq!(order.customer_name(), "");
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).expect("serialize");
        let decoded: Order = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.id, order.id);
        assert_eq!(decoded.status, OrderStatus::Paid);
        assert_eq!(decoded.line_items.len(), 1);
    }

    fn sample_order() -> Order {
        Order {
            id: "ord-1".to_owned(),
            order_id: "1042".to_owned(),
            order_number: 1042,
            email: "buyer@example.com".to_owned(),
            total_price: "499.00".to_owned(),
            total_price_value: 499.0,
            subtotal_price: "449.00".to_owned(),
            total_tax: "50.00".to_owned(),
            currency: "INR".to_owned(),
            financial_status: "paid".to_owned(),
            status: OrderStatus::Paid,
            fulfillment_status: None,
            processed_at: "2026-07-01T10:00:00Z".to_owned(),
            created_at: "2026-07-01T10:00:00Z".to_owned(),
            billing_address: Address::default(),
            shipping_address: Address::default(),
            customer: Customer::default(),
            line_items: vec![LineItem {
                id: 1,
                title: "Sticker Pack".to_owned(),
                quantity: 2,
                price: "99.00".to_owned(),
                sku: None,
                variant_title: None,
                vendor: None,
                product_id: None,
                requires_shipping: true,
                taxable: true,
                gift_card: false,
            }],
            shipping_lines: vec![],
            payment_details: PaymentDetails::default(),
            note: None,
            tags: String::new(),
            source_name: "web".to_owned(),
        }
    }
}
