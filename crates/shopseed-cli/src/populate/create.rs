//! Product creation and initial stock assignment.

use shopseed_admin::{product_payload, AdminClient, AdminError, AdminProduct};
use shopseed_core::{CatalogFile, CreatedProduct, ProductGroups, ProductSpec};

use crate::policy::{settle, Phase};

use super::SyncReport;

/// Creates every catalog product in order, stocks its variants, and groups
/// the created products by category.
///
/// # Errors
///
/// Returns an error on the first product the API refuses to create.
pub(super) async fn create_products(
    client: &AdminClient,
    catalog: &CatalogFile,
    location_id: i64,
    report: &mut SyncReport,
) -> anyhow::Result<ProductGroups> {
    let total = catalog.products.len();
    let mut groups = ProductGroups::new();

    for (i, spec) in catalog.products.iter().enumerate() {
        println!("  [{}/{total}] creating: {}", i + 1, spec.title);

        let payload = product_payload(spec);
        let Some(created) = settle(
            Phase::ProductCreation,
            &spec.title,
            client.create_product(&payload).await,
        )?
        else {
            continue;
        };
        report.products_created += 1;

        assign_inventory(client, spec, &created, location_id, report).await?;

        groups.push(CreatedProduct {
            id: created.id,
            title: spec.title.clone(),
            product_type: spec.product_type.clone(),
            has_discount: spec.has_discount(),
        });
    }

    println!("  created {} of {total} products", report.products_created);
    Ok(groups)
}

/// Sets each created variant's stock to its catalog quantity.
///
/// Variants are matched to their specs by position; the API returns them in
/// payload order.
async fn assign_inventory(
    client: &AdminClient,
    spec: &ProductSpec,
    created: &AdminProduct,
    location_id: i64,
    report: &mut SyncReport,
) -> anyhow::Result<()> {
    if created.variants.len() != spec.variants.len() {
        tracing::warn!(
            product = %spec.title,
            expected = spec.variants.len(),
            returned = created.variants.len(),
            "variant count mismatch; stocking the overlapping variants only"
        );
    }

    for (variant, variant_spec) in created.variants.iter().zip(&spec.variants) {
        report.inventory_attempted += 1;
        let subject = format!("{} / {}", spec.title, variant_spec.title);

        let result = match variant.inventory_item_id {
            Some(item_id) => client
                .set_inventory_level(location_id, item_id, variant_spec.inventory_quantity)
                .await
                .map(|_| ()),
            None => Err(AdminError::MissingInventoryItem {
                variant_id: variant.id,
            }),
        };

        if settle(Phase::InventoryAssignment, &subject, result)?.is_some() {
            report.inventory_set += 1;
        }
    }
    Ok(())
}
