//! Grouping of created products by category and collection membership.

use std::collections::{HashMap, HashSet};

use crate::catalog::CollectionSpec;

/// A product the populate run has created, as tracked for collection grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProduct {
    /// Remote-assigned product ID.
    pub id: i64,
    pub title: String,
    pub product_type: String,
    /// `true` when any of the product's variants carries a compare-at price.
    pub has_discount: bool,
}

/// Created products grouped by category.
///
/// Categories keep the order in which they were first seen and products keep
/// creation order within their category.
#[derive(Debug, Default)]
pub struct ProductGroups {
    groups: Vec<(String, Vec<CreatedProduct>)>,
    index: HashMap<String, usize>,
}

impl ProductGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: CreatedProduct) {
        if let Some(&i) = self.index.get(&product.product_type) {
            self.groups[i].1.push(product);
        } else {
            self.index
                .insert(product.product_type.clone(), self.groups.len());
            self.groups
                .push((product.product_type.clone(), vec![product]));
        }
    }

    /// Products recorded for `product_type`, in creation order.
    #[must_use]
    pub fn category(&self, product_type: &str) -> &[CreatedProduct] {
        match self.index.get(product_type) {
            Some(&i) => &self.groups[i].1,
            None => &[],
        }
    }

    /// Every recorded product, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &CreatedProduct> {
        self.groups.iter().flat_map(|(_, products)| products.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, products)| products.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Members of `collection`, without duplicate product IDs.
    ///
    /// An `on_sale` collection takes every discounted product across all
    /// categories. Any other collection takes the union of its listed
    /// categories, in the order they are listed.
    #[must_use]
    pub fn members(&self, collection: &CollectionSpec) -> Vec<&CreatedProduct> {
        let candidates: Box<dyn Iterator<Item = &CreatedProduct> + '_> = if collection.on_sale {
            Box::new(self.iter().filter(|p| p.has_discount))
        } else {
            Box::new(
                collection
                    .product_types
                    .iter()
                    .flat_map(|t| self.category(t).iter()),
            )
        };

        let mut seen = HashSet::new();
        candidates.filter(|p| seen.insert(p.id)).collect()
    }
}
