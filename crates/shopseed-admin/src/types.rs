//! Request and response shapes for the Admin REST API.
//!
//! Responses are wrapped in a single-key envelope named after the resource
//! (`{"product": {...}}`, `{"products": [...]}`). Listing calls made with a
//! `fields` filter omit every other key, so anything beyond `id` defaults.

use serde::{Deserialize, Serialize};

/// A product as returned by `products.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminProduct {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub variants: Vec<AdminVariant>,
}

/// A variant nested in an [`AdminProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct AdminVariant {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Handle for inventory writes. Absent when the listing was field-filtered
    /// without `variants`.
    #[serde(default)]
    pub inventory_item_id: Option<i64>,
    /// Sum of available stock across locations at read time.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

/// A fulfillment location.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// The `id`/`title` pair shared by custom and smart collections.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

/// A product-to-collection membership link.
#[derive(Debug, Clone, Deserialize)]
pub struct Collect {
    pub id: i64,
    pub product_id: i64,
    pub collection_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryLevel {
    pub inventory_item_id: i64,
    pub location_id: i64,
    #[serde(default)]
    pub available: Option<i64>,
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub body_html: String,
    pub vendor: String,
    pub product_type: String,
    /// Comma-joined tag list.
    pub tags: String,
    pub status: String,
    pub options: Vec<NewOption>,
    pub variants: Vec<NewVariant>,
    pub images: Vec<NewImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOption {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewVariant {
    pub title: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
    pub sku: String,
    /// `"shopify"` makes the platform track stock so inventory levels apply.
    pub inventory_management: String,
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub option3: Option<String>,
}

impl NewVariant {
    /// Number of option selectors that carry a value.
    #[must_use]
    pub fn selector_count(&self) -> usize {
        [&self.option1, &self.option2, &self.option3]
            .iter()
            .filter(|o| o.as_deref().is_some_and(|v| !v.is_empty()))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewImage {
    pub src: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCustomCollection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<NewImage>,
    pub published: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewCollect {
    pub product_id: i64,
    pub collection_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct InventoryLevelSet {
    pub location_id: i64,
    pub inventory_item_id: i64,
    pub available: i64,
}

// Envelopes

#[derive(Debug, Serialize)]
pub(crate) struct ProductRequest<'a> {
    pub product: &'a NewProduct,
}

#[derive(Debug, Serialize)]
pub(crate) struct CustomCollectionRequest<'a> {
    pub custom_collection: &'a NewCustomCollection,
}

#[derive(Debug, Serialize)]
pub(crate) struct CollectRequest {
    pub collect: NewCollect,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductResponse {
    pub product: AdminProduct,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    pub products: Vec<AdminProduct>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationsResponse {
    pub locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomCollectionsResponse {
    pub custom_collections: Vec<CollectionSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SmartCollectionsResponse {
    pub smart_collections: Vec<CollectionSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomCollectionResponse {
    pub custom_collection: CollectionSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectResponse {
    pub collect: Collect,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InventoryLevelResponse {
    pub inventory_level: InventoryLevel,
}
