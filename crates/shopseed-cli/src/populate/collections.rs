//! Collection creation and membership linking.

use shopseed_admin::{collection_payload, AdminClient};
use shopseed_core::{CollectionSpec, ProductGroups};

use crate::policy::{settle, Phase};

use super::SyncReport;

/// Creates each collection in catalog order and links its members one by
/// one. A collection that fails to create is skipped along with its links.
pub(super) async fn create_collections(
    client: &AdminClient,
    collections: &[CollectionSpec],
    groups: &ProductGroups,
    report: &mut SyncReport,
) -> anyhow::Result<()> {
    for spec in collections {
        let members = groups.members(spec);
        println!(
            "  creating collection: {} ({} products)",
            spec.title,
            members.len()
        );
        report.collections_attempted += 1;

        let Some(collection) = settle(
            Phase::CollectionCreation,
            &spec.title,
            client.create_custom_collection(&collection_payload(spec)).await,
        )?
        else {
            println!("    skipped {} links", members.len());
            continue;
        };
        report.collections_created += 1;

        let mut linked = 0usize;
        for product in &members {
            report.links_attempted += 1;
            let subject = format!("{} -> {}", product.title, spec.title);
            if settle(
                Phase::CollectionLink,
                &subject,
                client.create_collect(product.id, collection.id).await,
            )?
            .is_some()
            {
                linked += 1;
            }
        }
        report.links_created += linked;

        if linked < members.len() {
            println!("    linked {linked}/{} products", members.len());
        }
    }
    Ok(())
}
