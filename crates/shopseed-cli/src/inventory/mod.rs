//! `fix-inventory`: reset every variant's stock to its designated target.
//!
//! The pass is idempotent. Each variant is set to an absolute quantity (zero
//! for out-of-stock titles, the configured default otherwise), so repeating
//! it changes nothing.

use shopseed_admin::{AdminClient, AdminError, AdminProduct};
use shopseed_core::{AppConfig, InventoryPolicy};

use crate::location::resolve_location;
use crate::policy::{settle, Phase};

const PRODUCT_FIELDS: &str = "id,title,variants";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CorrectionReport {
    pub products: usize,
    pub variants: usize,
    pub attempted: usize,
    pub succeeded: usize,
}

/// # Errors
///
/// Returns an error if the client cannot be built, the location cannot be
/// resolved, or the product listing fails.
pub(crate) async fn run_fix_inventory(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let client = AdminClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build admin client: {e}"))?;

    let report = correct_inventory(&client, &config.inventory, config.location_id, dry_run).await?;

    println!();
    if dry_run {
        println!(
            "dry-run: {} variants across {} products would be set",
            report.variants, report.products
        );
        return Ok(());
    }

    println!(
        "fix-inventory complete: set {}/{} variants",
        report.succeeded, report.attempted
    );
    if report.succeeded < report.attempted {
        tracing::warn!(
            failed = report.attempted - report.succeeded,
            "some variants could not be corrected"
        );
    }
    Ok(())
}

/// Sets every variant of every product to its target quantity.
///
/// With `dry_run` the current and target quantities are printed and nothing
/// is written; the location is not resolved either.
///
/// # Errors
///
/// Returns an error when the location or the product listing cannot be
/// loaded. Per-variant failures are logged and counted.
pub(crate) async fn correct_inventory(
    client: &AdminClient,
    policy: &InventoryPolicy,
    configured_location: Option<i64>,
    dry_run: bool,
) -> anyhow::Result<CorrectionReport> {
    let location_id = if dry_run {
        None
    } else {
        Some(resolve_location(client, configured_location).await?)
    };

    let listed = settle(
        Phase::ProductListing,
        "products.json",
        client.fetch_all_products(Some(PRODUCT_FIELDS)).await,
    )?;
    let products = listed.unwrap_or_default();
    println!("found {} products", products.len());

    let mut report = CorrectionReport::default();
    for product in &products {
        correct_product(client, policy, location_id, product, &mut report).await?;
    }
    Ok(report)
}

async fn correct_product(
    client: &AdminClient,
    policy: &InventoryPolicy,
    location_id: Option<i64>,
    product: &AdminProduct,
    report: &mut CorrectionReport,
) -> anyhow::Result<()> {
    let target = policy.target_for(&product.title);
    report.products += 1;
    println!("product: {} (target qty: {target})", product.title);

    for variant in &product.variants {
        report.variants += 1;
        let current = variant
            .inventory_quantity
            .map_or_else(|| "?".to_owned(), |q| q.to_string());
        println!("  variant: {} | current: {current} -> {target}", variant.title);

        let Some(location_id) = location_id else {
            continue;
        };

        report.attempted += 1;
        let result = match variant.inventory_item_id {
            Some(item_id) => client
                .set_inventory_level(location_id, item_id, target)
                .await
                .map(|_| ()),
            None => Err(AdminError::MissingInventoryItem {
                variant_id: variant.id,
            }),
        };

        let subject = format!("{} / {}", product.title, variant.title);
        if settle(Phase::InventoryCorrection, &subject, result)?.is_some() {
            report.succeeded += 1;
        } else {
            println!("    failed to set inventory");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
