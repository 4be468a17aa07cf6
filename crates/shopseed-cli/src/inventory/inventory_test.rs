use std::collections::BTreeMap;

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopseed_core::InventoryPolicy;

use super::*;

const LOCATION_ID: i64 = 7;

fn test_client(server: &MockServer) -> AdminClient {
    AdminClient::with_base_url(&server.uri(), "shpat_test", 5, "shopseed-test/0.1", 0)
        .expect("failed to build test AdminClient")
}

fn policy() -> InventoryPolicy {
    InventoryPolicy::new(50, vec!["Limited Edition Art Print".to_owned()])
}

fn product(id: i64, title: &str, quantities: &[i64]) -> Value {
    let variants: Vec<Value> = (1_i64..)
        .zip(quantities)
        .map(|(n, qty)| {
            json!({
                "id": id * 10 + n,
                "title": format!("Variant {n}"),
                "inventory_item_id": id * 100 + n,
                "inventory_quantity": qty
            })
        })
        .collect();
    json!({"id": id, "title": title, "variants": variants})
}

/// Two pages: an out-of-stock print and a lamp, then a mug.
async fn mount_two_page_listing(server: &MockServer) {
    let next_link = format!(
        "<{base}/products.json?limit=250&fields=id,title,variants&page_info=page2>; rel=\"next\"",
        base = server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("fields", "id,title,variants"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [
                    product(1, "Limited Edition Art Print", &[4, 9]),
                    product(2, "Desk Lamp", &[0])
                ]}))
                .insert_header("Link", next_link.as_str()),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": [
            product(3, "Ceramic Mug", &[120, 50])
        ]})))
        .mount(server)
        .await;
}

async fn mount_inventory_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/inventory_levels/set.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 1, "location_id": LOCATION_ID, "available": 0}
        })))
        .mount(server)
        .await;
}

/// Final `available` per inventory item, taking the last write for each.
async fn final_quantities(server: &MockServer) -> BTreeMap<i64, i64> {
    let mut levels = BTreeMap::new();
    for request in server.received_requests().await.expect("recording enabled") {
        if request.url.path() != "/inventory_levels/set.json" {
            continue;
        }
        let body: Value = serde_json::from_slice(&request.body).expect("JSON body");
        assert_eq!(body["location_id"], LOCATION_ID);
        let item = body["inventory_item_id"].as_i64().expect("item id");
        let available = body["available"].as_i64().expect("available");
        levels.insert(item, available);
    }
    levels
}

#[tokio::test]
async fn out_of_stock_titles_go_to_zero_and_others_to_default() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;
    mount_inventory_ok(&server).await;

    let report = correct_inventory(&test_client(&server), &policy(), Some(LOCATION_ID), false)
        .await
        .expect("pass should succeed");

    assert_eq!(
        report,
        CorrectionReport {
            products: 3,
            variants: 5,
            attempted: 5,
            succeeded: 5
        }
    );
    let expected = BTreeMap::from([(101, 0), (102, 0), (201, 50), (301, 50), (302, 50)]);
    assert_eq!(final_quantities(&server).await, expected);
}

#[tokio::test]
async fn running_twice_matches_running_once() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;
    mount_inventory_ok(&server).await;
    let client = test_client(&server);

    correct_inventory(&client, &policy(), Some(LOCATION_ID), false)
        .await
        .expect("first pass");
    let after_first = final_quantities(&server).await;

    server.reset().await;
    mount_two_page_listing(&server).await;
    mount_inventory_ok(&server).await;

    correct_inventory(&client, &policy(), Some(LOCATION_ID), false)
        .await
        .expect("second pass");
    let after_second = final_quantities(&server).await;

    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn variant_failure_does_not_stop_the_pass() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;

    Mock::given(method("POST"))
        .and(path("/inventory_levels/set.json"))
        .and(body_partial_json(json!({"inventory_item_id": 201})))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string("Inventory item does not have inventory tracking enabled"),
        )
        .mount(&server)
        .await;
    mount_inventory_ok(&server).await;

    let report = correct_inventory(&test_client(&server), &policy(), Some(LOCATION_ID), false)
        .await
        .expect("per-variant failures are tolerated");
    assert_eq!(report.attempted, 5);
    assert_eq!(report.succeeded, 4);
}

#[tokio::test]
async fn variant_without_inventory_item_counts_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": [{
            "id": 9,
            "title": "Gift Card",
            "variants": [{"id": 91, "title": "Default Title"}]
        }]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/inventory_levels/set.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = correct_inventory(&test_client(&server), &policy(), Some(LOCATION_ID), false)
        .await
        .expect("missing item is tolerated");
    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 0);
}

#[tokio::test]
async fn dry_run_reads_without_writing() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;
    Mock::given(method("GET"))
        .and(path("/locations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locations": []})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/inventory_levels/set.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = correct_inventory(&test_client(&server), &policy(), None, true)
        .await
        .expect("dry run");
    assert_eq!(report.products, 3);
    assert_eq!(report.variants, 5);
    assert_eq!(report.attempted, 0);
}

#[tokio::test]
async fn listing_failure_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = correct_inventory(&test_client(&server), &policy(), Some(LOCATION_ID), false)
        .await
        .expect_err("listing failure is fatal");
    assert!(format!("{err:#}").contains("product listing failed"));
}
