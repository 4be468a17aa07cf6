//! `populate`: rebuild the store's catalog from the catalog file.
//!
//! A run tears down every existing product and collection, recreates the
//! products with their variants and stock, then creates the collections and
//! links their members. Failures follow the table in [`crate::policy`]: only
//! location resolution and product creation stop the run.

mod collections;
mod create;
mod plan;
mod teardown;

use shopseed_admin::AdminClient;
use shopseed_core::{AppConfig, CatalogFile};

use crate::location::resolve_location;

/// Counters for one synchronization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SyncReport {
    pub teardown: teardown::TeardownReport,
    pub products_created: usize,
    pub inventory_attempted: usize,
    pub inventory_set: usize,
    pub collections_attempted: usize,
    pub collections_created: usize,
    pub links_attempted: usize,
    pub links_created: usize,
}

impl SyncReport {
    /// Number of tolerated failures across all phases.
    pub(crate) fn failures(&self) -> usize {
        self.teardown.failed
            + (self.inventory_attempted - self.inventory_set)
            + (self.collections_attempted - self.collections_created)
            + (self.links_attempted - self.links_created)
    }

    fn print(&self) {
        println!();
        println!("populate complete");
        println!(
            "  teardown: {} products, {} custom collections, {} smart collections deleted ({} failed)",
            self.teardown.products,
            self.teardown.custom_collections,
            self.teardown.smart_collections,
            self.teardown.failed
        );
        println!("  products created: {}", self.products_created);
        println!(
            "  inventory set: {}/{} variants",
            self.inventory_set, self.inventory_attempted
        );
        println!(
            "  collections created: {}/{}",
            self.collections_created, self.collections_attempted
        );
        println!(
            "  collection links: {}/{}",
            self.links_created, self.links_attempted
        );
    }
}

/// Runs `populate` against the configured store, or prints the plan when
/// `dry_run` is set.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the client cannot be
/// built, or an aborting phase fails.
pub(crate) async fn run_populate(
    config: &AppConfig,
    dry_run: bool,
    keep_existing: bool,
) -> anyhow::Result<()> {
    let catalog = shopseed_core::load_catalog(&config.catalog_path)?;

    if dry_run {
        plan::print_plan(&catalog, keep_existing);
        return Ok(());
    }

    let client = AdminClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build admin client: {e}"))?;

    let report = synchronize(&client, &catalog, config.location_id, keep_existing).await?;
    report.print();

    let failures = report.failures();
    if failures > 0 {
        tracing::warn!(failures, "populate finished with tolerated failures");
    }
    Ok(())
}

/// Brings the store in line with `catalog`.
///
/// The location is resolved before anything is deleted so a store without
/// one is left untouched.
///
/// # Errors
///
/// Returns an error when location resolution or a product creation fails.
/// Everything else is logged, counted in the report, and skipped.
pub(crate) async fn synchronize(
    client: &AdminClient,
    catalog: &CatalogFile,
    configured_location: Option<i64>,
    keep_existing: bool,
) -> anyhow::Result<SyncReport> {
    let location_id = resolve_location(client, configured_location).await?;
    let mut report = SyncReport::default();

    if keep_existing {
        println!("keeping existing products and collections");
    } else {
        println!("=== tearing down existing catalog ===");
        report.teardown = teardown::teardown(client).await?;
    }

    println!("=== creating products ===");
    let groups = create::create_products(client, catalog, location_id, &mut report).await?;
    tracing::info!(products = groups.len(), "product creation finished");

    println!("=== creating collections ===");
    collections::create_collections(client, &catalog.collections, &groups, &mut report).await?;

    Ok(report)
}

#[cfg(test)]
#[path = "populate_test.rs"]
mod tests;
