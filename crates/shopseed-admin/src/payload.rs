//! Conversion from catalog entries to Admin API create payloads.

use shopseed_core::{CollectionSpec, ProductSpec, VariantSpec};

use crate::types::{NewCustomCollection, NewImage, NewOption, NewProduct, NewVariant};

/// Builds the `POST products.json` body for one catalog product, with its
/// options, variants and images nested.
#[must_use]
pub fn product_payload(spec: &ProductSpec) -> NewProduct {
    NewProduct {
        title: spec.title.clone(),
        body_html: spec.body_html.clone(),
        vendor: spec.vendor.clone(),
        product_type: spec.product_type.clone(),
        tags: spec.tags_joined(),
        status: "active".to_owned(),
        options: spec
            .options
            .iter()
            .map(|name| NewOption { name: name.clone() })
            .collect(),
        variants: spec.variants.iter().map(variant_payload).collect(),
        images: spec
            .images
            .iter()
            .map(|src| NewImage { src: src.clone() })
            .collect(),
    }
}

fn variant_payload(spec: &VariantSpec) -> NewVariant {
    let option = |position| spec.option(position).map(str::to_owned);
    NewVariant {
        title: spec.title.clone(),
        price: spec.price.clone(),
        compare_at_price: spec
            .compare_at_price
            .clone()
            .filter(|_| spec.has_discount()),
        sku: spec.sku.clone(),
        inventory_management: "shopify".to_owned(),
        option1: option(1),
        option2: option(2),
        option3: option(3),
    }
}

/// Builds the `POST custom_collections.json` body. Collections are published
/// immediately; membership is linked separately.
#[must_use]
pub fn collection_payload(spec: &CollectionSpec) -> NewCustomCollection {
    NewCustomCollection {
        title: spec.title.clone(),
        body_html: spec.body_html.clone(),
        image: spec.image_src.clone().map(|src| NewImage { src }),
        published: true,
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
