//! Dry-run rendering of what `populate` would do.

use shopseed_core::{CatalogFile, CreatedProduct, ProductGroups};

/// Groups the catalog as a run would, using catalog positions as stand-in ids.
fn planned_groups(catalog: &CatalogFile) -> ProductGroups {
    let mut groups = ProductGroups::new();
    for (position, spec) in (1_i64..).zip(&catalog.products) {
        groups.push(CreatedProduct {
            id: position,
            title: spec.title.clone(),
            product_type: spec.product_type.clone(),
            has_discount: spec.has_discount(),
        });
    }
    groups
}

/// One line per collection: title followed by member titles in link order.
fn membership_lines(catalog: &CatalogFile) -> Vec<String> {
    let groups = planned_groups(catalog);
    catalog
        .collections
        .iter()
        .map(|spec| {
            let titles: Vec<&str> = groups
                .members(spec)
                .into_iter()
                .map(|p| p.title.as_str())
                .collect();
            format!("{} ({}): [{}]", spec.title, titles.len(), titles.join(", "))
        })
        .collect()
}

pub(super) fn print_plan(catalog: &CatalogFile, keep_existing: bool) {
    if keep_existing {
        println!("dry-run: existing products and collections would be kept");
    } else {
        println!("dry-run: all existing products, custom and smart collections would be deleted");
    }

    println!(
        "dry-run: would create {} products with {} variants:",
        catalog.products.len(),
        catalog.variant_count()
    );
    for spec in &catalog.products {
        let sale = if spec.has_discount() { ", on sale" } else { "" };
        println!(
            "  {} [{}] {} variants{sale}",
            spec.title,
            spec.product_type,
            spec.variants.len()
        );
    }

    println!(
        "dry-run: would create {} collections:",
        catalog.collections.len()
    );
    for line in membership_lines(catalog) {
        println!("  {line}");
    }
}
