//! Normalized product types.

use serde::{Deserialize, Serialize};

/// A product record normalized for the dashboard.
///
/// `variants` and `images` are passed through as raw JSON: the dashboard
/// renders them opaquely and the store round-trips them untouched, so typing
/// them here would add a second normalization surface with no consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Key of the stored record; `"N/A"` when the record carries none.
    pub id: String,
    pub title: String,
    /// Description with HTML markup stripped and the fixed entity set
    /// decoded; see `orderflow-fetch`'s sanitizer.
    pub description: String,
    /// Price of the first variant; `0.0` when no variant carries one.
    pub price: f64,
    /// First of: primary image URL, first gallery image URL, empty.
    pub image_url: String,
    pub vendor: String,
    pub product_type: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: String,
    /// Individual tags split from the platform's `", "`-joined tag string.
    pub tags: Vec<String>,
    pub variants: Vec<serde_json::Value>,
    pub images: Vec<serde_json::Value>,
}

impl Product {
    /// Returns `true` if the product has a renderable image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Returns the number of raw variants carried by the record.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "1718000000000".to_owned(),
            title: "Minimal Line Tattoo".to_owned(),
            description: "Waterproof temporary tattoo".to_owned(),
            price: 249.0,
            image_url: "https://cdn.example.com/p/1.jpg".to_owned(),
            vendor: "inkhub".to_owned(),
            product_type: "tattoo".to_owned(),
            created_at: "2026-06-20T08:00:00Z".to_owned(),
            updated_at: "2026-06-21T08:00:00Z".to_owned(),
            status: "active".to_owned(),
            tags: vec!["minimal".to_owned(), "line".to_owned()],
            variants: vec![serde_json::json!({"id": 1, "price": "249.00"})],
            images: vec![],
        }
    }

    #[test]
    fn has_image_false_for_empty_url() {
        let mut product = sample_product();
        product.image_url = String::new();
        assert!(!product.has_image());
    }

    #[test]
    fn has_image_true_for_nonempty_url() {
        assert!(sample_product().has_image());
    }

    #[test]
    fn variant_count_matches_len() {
        assert_eq!(sample_product().variant_count(), 1);
    }

    #[test]
    fn product_serde_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).expect("serialize");
        let decoded: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.tags, product.tags);
        assert_eq!(decoded.variants.len(), 1);
    }
}
