//! The static catalog applied by a populate run, loaded from YAML.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The admin API accepts at most three option axes per product.
pub const MAX_OPTIONS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    pub title: String,
    /// Raw HTML description.
    #[serde(default)]
    pub body_html: String,
    pub vendor: String,
    /// Category used to group products into collections.
    pub product_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Option axis names, e.g. `["Size", "Color"]`.
    pub options: Vec<String>,
    pub variants: Vec<VariantSpec>,
    /// Image source URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductSpec {
    /// Tags in the comma-joined form the admin API stores.
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    /// `true` when at least one variant carries a compare-at price.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.variants.iter().any(VariantSpec::has_discount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSpec {
    pub title: String,
    /// Decimal string, e.g. `"29.99"`.
    pub price: String,
    #[serde(default)]
    pub compare_at_price: Option<String>,
    pub sku: String,
    /// Stock applied right after the product is created.
    #[serde(default)]
    pub inventory_quantity: i64,
    /// One value per parent option, in the parent's option order.
    #[serde(default)]
    pub option_values: Vec<String>,
}

impl VariantSpec {
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.compare_at_price
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }

    /// Option value at 1-based `position`, matching the API's `option1..option3`.
    #[must_use]
    pub fn option(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.option_values.get(i))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSpec {
    pub title: String,
    #[serde(default)]
    pub body_html: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_src: Option<String>,
    /// Categories whose products belong to this collection.
    #[serde(default)]
    pub product_types: Vec<String>,
    /// Collect every product with a discounted variant instead of matching categories.
    #[serde(default)]
    pub on_sale: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<ProductSpec>,
    #[serde(default)]
    pub collections: Vec<CollectionSpec>,
}

impl CatalogFile {
    /// Total number of variants across all products.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content)
}

/// Parse and validate catalog YAML held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML does not parse or fails validation.
pub fn parse_catalog(content: &str) -> Result<CatalogFile, ConfigError> {
    let catalog: CatalogFile = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Check the structural rules the populate run relies on.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first rule broken.
pub fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    let mut seen_titles = HashSet::new();
    let mut seen_skus = HashSet::new();
    let mut product_types = HashSet::new();

    for product in &catalog.products {
        if product.title.trim().is_empty() {
            return Err(invalid("product title must be non-empty"));
        }
        if !seen_titles.insert(product.title.as_str()) {
            return Err(invalid(format!("duplicate product title: '{}'", product.title)));
        }
        if product.product_type.trim().is_empty() {
            return Err(invalid(format!(
                "product '{}' has an empty product_type",
                product.title
            )));
        }
        product_types.insert(product.product_type.as_str());

        if product.options.is_empty() || product.options.len() > MAX_OPTIONS {
            return Err(invalid(format!(
                "product '{}' declares {} options; expected 1 to {MAX_OPTIONS}",
                product.title,
                product.options.len()
            )));
        }
        if product.variants.is_empty() {
            return Err(invalid(format!(
                "product '{}' has no variants",
                product.title
            )));
        }

        for variant in &product.variants {
            validate_variant(product, variant)?;
            if !seen_skus.insert(variant.sku.as_str()) {
                return Err(invalid(format!("duplicate SKU: '{}'", variant.sku)));
            }
        }
    }

    let mut seen_collections = HashSet::new();
    let mut sale_collections = 0usize;
    for collection in &catalog.collections {
        if collection.title.trim().is_empty() {
            return Err(invalid("collection title must be non-empty"));
        }
        if !seen_collections.insert(collection.title.as_str()) {
            return Err(invalid(format!(
                "duplicate collection title: '{}'",
                collection.title
            )));
        }
        if collection.on_sale {
            sale_collections += 1;
            if !collection.product_types.is_empty() {
                return Err(invalid(format!(
                    "on_sale collection '{}' must not list product_types",
                    collection.title
                )));
            }
            continue;
        }
        for product_type in &collection.product_types {
            if !product_types.contains(product_type.as_str()) {
                return Err(invalid(format!(
                    "collection '{}' lists product_type '{product_type}' which no product uses",
                    collection.title
                )));
            }
        }
    }
    if sale_collections > 1 {
        return Err(invalid(format!(
            "found {sale_collections} on_sale collections; at most one is allowed"
        )));
    }

    Ok(())
}

fn validate_variant(product: &ProductSpec, variant: &VariantSpec) -> Result<(), ConfigError> {
    let context = || format!("variant '{}' of '{}'", variant.title, product.title);

    if variant.sku.trim().is_empty() {
        return Err(invalid(format!("{} has an empty SKU", context())));
    }
    if variant.option_values.len() != product.options.len() {
        return Err(invalid(format!(
            "{} has {} option values but the product declares {} options",
            context(),
            variant.option_values.len(),
            product.options.len()
        )));
    }
    if variant.option_values.iter().any(|v| v.trim().is_empty()) {
        return Err(invalid(format!("{} has an empty option value", context())));
    }
    parse_price(&variant.price).map_err(|reason| {
        invalid(format!("{} has invalid price: {reason}", context()))
    })?;
    if let Some(compare_at) = variant.compare_at_price.as_deref() {
        if !compare_at.trim().is_empty() {
            parse_price(compare_at).map_err(|reason| {
                invalid(format!("{} has invalid compare_at_price: {reason}", context()))
            })?;
        }
    }
    if variant.inventory_quantity < 0 {
        return Err(invalid(format!(
            "{} has negative inventory_quantity {}",
            context(),
            variant.inventory_quantity
        )));
    }
    Ok(())
}

/// Parse a non-negative decimal price string.
fn parse_price(raw: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| format!("'{raw}': {e}"))?;
    if value.is_sign_negative() {
        return Err(format!("'{raw}' is negative"));
    }
    Ok(value)
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation(message.into())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
