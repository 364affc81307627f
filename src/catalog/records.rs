//! Upstream wire records.
//!
//! serde models of the payloads the Admin REST API returns. These are the
//! raw shapes: everything the upstream sends for a product or smart
//! collection, untouched. The stable internal shapes in
//! [`crate::catalog::product`] and [`crate::catalog::collection`] are
//! derived from these and are the only thing consumers should depend on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product tags as the upstream sends them.
///
/// The REST API usually returns a comma-joined string, but the shape is
/// upstream-defined and some payloads carry an array of strings instead.
/// Both forms deserialize and pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Tags {
    /// Comma-joined form, e.g. `"summer,sale"`.
    Joined(String),
    /// Array form, e.g. `["summer", "sale"]`.
    List(Vec<String>),
}

impl Default for Tags {
    fn default() -> Self {
        Self::Joined(String::new())
    }
}

/// A product variant as returned by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantRecord {
    /// The unique identifier of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The variant title (combination of option values).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price as a decimal string, e.g. `"9.99"`.
    pub price: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Units in stock across locations.
    pub inventory_quantity: i64,

    /// The admin GraphQL API ID, e.g. `"gid://shopify/ProductVariant/1"`.
    pub admin_graphql_api_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    /// The unique identifier of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The position of the image in the product's image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The source URL of the image.
    pub src: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    /// Alternative text for the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A product as returned by the upstream.
///
/// Raw-record operations expose this type directly; the normalized
/// [`crate::Product`] derives from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    /// The unique identifier of the product.
    pub id: u64,

    /// The product title.
    pub title: String,

    /// The description in HTML format, unsanitized.
    pub body_html: String,

    /// The vendor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly name of the product.
    pub handle: String,

    /// Product status: "active", "draft", or "archived".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The product's tags, comma-joined or as an array.
    #[serde(default)]
    pub tags: Tags,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID of the product itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,

    /// The product's variants. May be empty on malformed upstream data,
    /// which makes the record unnormalizable.
    #[serde(default)]
    pub variants: Vec<VariantRecord>,

    /// The product's images. Same caveat as `variants`.
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// A rule of a smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmartCollectionRule {
    /// The product property to check (e.g., "tag", "vendor").
    pub column: String,
    /// How to compare (e.g., "equals", "contains").
    pub relation: String,
    /// The value to compare against.
    pub condition: String,
}

/// A smart collection as returned by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmartCollectionRecord {
    /// The unique identifier of the collection.
    pub id: u64,

    /// The name of the collection.
    pub title: String,

    /// The URL-friendly name of the collection.
    pub handle: String,

    /// The description in HTML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The order in which products appear in the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// Whether products must match any rule (true) or all rules (false).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,

    /// The rules that determine which products are included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SmartCollectionRule>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_deserialize_joined_form() {
        let tags: Tags = serde_json::from_str(r#""a,b""#).unwrap();
        assert_eq!(tags, Tags::Joined("a,b".to_string()));
    }

    #[test]
    fn test_tags_deserialize_list_form() {
        let tags: Tags = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(tags, Tags::List(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_tags_round_trip_unchanged() {
        let joined = Tags::Joined("summer,sale".to_string());
        let json = serde_json::to_string(&joined).unwrap();
        assert_eq!(json, r#""summer,sale""#);

        let list = Tags::List(vec!["summer".to_string()]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["summer"]"#);
    }

    #[test]
    fn test_product_record_deserializes_minimal_payload() {
        let json = r#"{
            "id": 1,
            "title": "T",
            "body_html": "<p>d</p>",
            "handle": "t",
            "tags": "a,b",
            "variants": [
                {"admin_graphql_api_id": "gid1", "price": "9.99", "inventory_quantity": 5}
            ],
            "images": [{"src": "http://x/img.png"}]
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.title, "T");
        assert_eq!(record.body_html, "<p>d</p>");
        assert_eq!(record.handle, "t");
        assert_eq!(record.tags, Tags::Joined("a,b".to_string()));
        assert_eq!(record.variants.len(), 1);
        assert_eq!(record.variants[0].price, "9.99");
        assert_eq!(record.variants[0].inventory_quantity, 5);
        assert_eq!(record.variants[0].admin_graphql_api_id, "gid1");
        assert_eq!(record.images[0].src, "http://x/img.png");
        assert!(record.vendor.is_none());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_product_record_defaults_missing_arrays_to_empty() {
        let json = r#"{"id": 2, "title": "Bare", "body_html": "", "handle": "bare"}"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert!(record.variants.is_empty());
        assert!(record.images.is_empty());
        assert_eq!(record.tags, Tags::Joined(String::new()));
    }

    #[test]
    fn test_product_record_keeps_upstream_extras() {
        let json = r#"{
            "id": 3,
            "title": "Full",
            "body_html": "<p>x</p>",
            "vendor": "Acme",
            "product_type": "Widget",
            "handle": "full",
            "status": "active",
            "tags": "a",
            "created_at": "2024-01-15T10:30:00Z",
            "admin_graphql_api_id": "gid://shopify/Product/3",
            "variants": [],
            "images": []
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.vendor.as_deref(), Some("Acme"));
        assert_eq!(record.status.as_deref(), Some("active"));
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_smart_collection_record_deserialization() {
        let json = r#"{
            "id": 672049463622,
            "title": "Featured",
            "handle": "featured",
            "sort_order": "best-selling",
            "disjunctive": false,
            "rules": [
                {"column": "tag", "relation": "equals", "condition": "featured"}
            ],
            "updated_at": "2024-01-02T09:28:43-05:00"
        }"#;

        let record: SmartCollectionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 672_049_463_622);
        assert_eq!(record.title, "Featured");
        assert_eq!(record.handle, "featured");
        assert_eq!(record.disjunctive, Some(false));

        let rules = record.rules.unwrap();
        assert_eq!(rules[0].column, "tag");
        assert_eq!(rules[0].condition, "featured");
    }
}
