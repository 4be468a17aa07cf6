//! Bulk deletion of existing products and collections.

use std::collections::HashSet;

use shopseed_admin::{AdminClient, AdminError};

use crate::policy::{settle, Phase};

/// Upper bound on list-then-delete rounds per resource.
const MAX_ROUNDS: usize = 200;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TeardownReport {
    pub products: usize,
    pub custom_collections: usize,
    pub smart_collections: usize,
    /// Deletions (and listings) that failed.
    pub failed: usize,
}

#[derive(Debug, Clone, Copy)]
enum Resource {
    Products,
    CustomCollections,
    SmartCollections,
}

impl Resource {
    fn noun(self) -> &'static str {
        match self {
            Resource::Products => "product",
            Resource::CustomCollections => "custom collection",
            Resource::SmartCollections => "smart collection",
        }
    }

    /// One page of `(id, title)` pairs.
    async fn list(self, client: &AdminClient) -> Result<Vec<(i64, String)>, AdminError> {
        match self {
            Resource::Products => {
                let (products, _) = client.list_products_page(Some("id,title"), None).await?;
                Ok(products.into_iter().map(|p| (p.id, p.title)).collect())
            }
            Resource::CustomCollections => Ok(client
                .list_custom_collections()
                .await?
                .into_iter()
                .map(|c| (c.id, c.title))
                .collect()),
            Resource::SmartCollections => Ok(client
                .list_smart_collections()
                .await?
                .into_iter()
                .map(|c| (c.id, c.title))
                .collect()),
        }
    }

    async fn delete(self, client: &AdminClient, id: i64) -> Result<(), AdminError> {
        match self {
            Resource::Products => client.delete_product(id).await,
            Resource::CustomCollections => client.delete_custom_collection(id).await,
            Resource::SmartCollections => client.delete_smart_collection(id).await,
        }
    }
}

/// Deletes every product, then every custom collection, then every smart
/// collection. Failures are logged and counted; none stops the teardown.
///
/// # Errors
///
/// Only if the teardown failure policy were changed to abort.
pub(crate) async fn teardown(client: &AdminClient) -> anyhow::Result<TeardownReport> {
    let mut report = TeardownReport::default();

    let (deleted, failed) = drain(client, Resource::Products).await?;
    report.products = deleted;
    report.failed += failed;
    println!("  deleted {deleted} products");

    let (deleted, failed) = drain(client, Resource::CustomCollections).await?;
    report.custom_collections = deleted;
    report.failed += failed;
    println!("  deleted {deleted} custom collections");

    let (deleted, failed) = drain(client, Resource::SmartCollections).await?;
    report.smart_collections = deleted;
    report.failed += failed;
    println!("  deleted {deleted} smart collections");

    Ok(report)
}

/// Lists and deletes `resource` until a listing comes back empty.
///
/// A listing holding nothing but entries whose deletion already failed ends
/// the loop, as does [`MAX_ROUNDS`]. Returns `(deleted, failed)`.
async fn drain(client: &AdminClient, resource: Resource) -> anyhow::Result<(usize, usize)> {
    let mut deleted = 0usize;
    let mut failed = 0usize;
    let mut failed_ids: HashSet<i64> = HashSet::new();

    for _ in 0..MAX_ROUNDS {
        let Some(listed) = settle(Phase::Teardown, resource.noun(), resource.list(client).await)?
        else {
            failed += 1;
            return Ok((deleted, failed));
        };

        let pending: Vec<(i64, String)> = listed
            .into_iter()
            .filter(|(id, _)| !failed_ids.contains(id))
            .collect();
        if pending.is_empty() {
            if !failed_ids.is_empty() {
                tracing::warn!(
                    resource = resource.noun(),
                    remaining = failed_ids.len(),
                    "only undeletable entries remain; moving on"
                );
            }
            return Ok((deleted, failed));
        }

        for (id, title) in pending {
            let subject = format!("{} {id} ({title})", resource.noun());
            match settle(Phase::Teardown, &subject, resource.delete(client, id).await)? {
                Some(()) => {
                    tracing::debug!(resource = resource.noun(), id, %title, "deleted");
                    deleted += 1;
                }
                None => {
                    failed += 1;
                    failed_ids.insert(id);
                }
            }
        }
    }

    tracing::warn!(
        resource = resource.noun(),
        max_rounds = MAX_ROUNDS,
        "teardown round limit reached"
    );
    Ok((deleted, failed))
}
