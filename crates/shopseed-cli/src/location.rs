//! Resolution of the location that holds inventory for a run.

use shopseed_admin::{AdminClient, AdminError};

use crate::policy::{settle, Phase};

/// Returns the configured location id, or the first location the store
/// lists. Called once per run.
///
/// # Errors
///
/// Returns an error if the locations listing fails or the store has none.
pub(crate) async fn resolve_location(
    client: &AdminClient,
    configured: Option<i64>,
) -> anyhow::Result<i64> {
    if let Some(id) = configured {
        tracing::info!(location_id = id, "using configured location");
        return Ok(id);
    }

    let listed = settle(
        Phase::LocationResolution,
        "locations.json",
        client.list_locations().await,
    )?;
    let Some(locations) = listed else {
        anyhow::bail!("no location available for inventory");
    };

    let first = match locations.first() {
        Some(location) => location,
        None => {
            settle::<()>(
                Phase::LocationResolution,
                "locations.json",
                Err(AdminError::NoLocations),
            )?;
            anyhow::bail!("no location available for inventory");
        }
    };

    if locations.len() > 1 {
        tracing::warn!(
            location_count = locations.len(),
            location_id = first.id,
            location = %first.name,
            "store has several locations; using the first. Set SHOPIFY_LOCATION_ID to choose"
        );
    } else {
        tracing::info!(location_id = first.id, location = %first.name, "resolved location");
    }
    Ok(first.id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(server: &MockServer) -> AdminClient {
        AdminClient::with_base_url(&server.uri(), "shpat_test", 5, "shopseed-test/0.1", 0)
            .expect("failed to build test AdminClient")
    }

    #[tokio::test]
    async fn configured_location_skips_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let id = resolve_location(&test_client(&server), Some(99))
            .await
            .expect("configured id is used as-is");
        assert_eq!(id, 99);
    }

    #[tokio::test]
    async fn first_listed_location_wins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "locations": [
                    {"id": 11, "name": "Shop location"},
                    {"id": 12, "name": "Overflow"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let id = resolve_location(&test_client(&server), None)
            .await
            .expect("first location");
        assert_eq!(id, 11);
    }

    #[tokio::test]
    async fn empty_location_list_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locations": []})))
            .mount(&server)
            .await;

        let err = resolve_location(&test_client(&server), None)
            .await
            .expect_err("no locations");
        assert!(format!("{err:#}").contains("no locations"));
    }

    #[tokio::test]
    async fn listing_failure_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let err = resolve_location(&test_client(&server), None)
            .await
            .expect_err("401 aborts");
        assert!(format!("{err:#}").contains("HTTP 401"));
    }
}
