use shopseed_core::parse_catalog;

use super::*;

const CATALOG: &str = r#"
products:
  - title: Smart Watch Pro
    body_html: "<p>Tracks things.</p>"
    vendor: TrendTech
    product_type: Electronics
    tags: [electronics, smartwatch, fitness]
    options: [Size, Band]
    variants:
      - title: 40mm / Black Sport Band
        price: "299.99"
        compare_at_price: "349.99"
        sku: SW-40-BLK
        inventory_quantity: 40
        option_values: [40mm, Black Sport Band]
      - title: 44mm / Silver Mesh
        price: "359.99"
        compare_at_price: ""
        sku: SW-44-SLV
        inventory_quantity: 15
        option_values: [44mm, Silver Mesh]
    images:
      - https://images.example.com/watch-1.jpg
      - https://images.example.com/watch-2.jpg
collections:
  - title: Electronics
    product_types: [Electronics]
    image_src: https://images.example.com/electronics.jpg
  - title: On Sale
    body_html: "<p>Deals</p>"
    on_sale: true
"#;

#[test]
fn product_payload_carries_product_fields() {
    let catalog = parse_catalog(CATALOG).expect("catalog");
    let payload = product_payload(&catalog.products[0]);
    assert_eq!(payload.title, "Smart Watch Pro");
    assert_eq!(payload.vendor, "TrendTech");
    assert_eq!(payload.product_type, "Electronics");
    assert_eq!(payload.tags, "electronics, smartwatch, fitness");
    assert_eq!(payload.status, "active");
    assert_eq!(
        payload.options,
        vec![
            NewOption { name: "Size".into() },
            NewOption { name: "Band".into() }
        ]
    );
    assert_eq!(payload.images.len(), 2);
    assert_eq!(payload.images[0].src, "https://images.example.com/watch-1.jpg");
}

#[test]
fn variant_selectors_align_with_options() {
    let catalog = parse_catalog(CATALOG).expect("catalog");
    let spec = &catalog.products[0];
    let payload = product_payload(spec);
    for variant in &payload.variants {
        assert_eq!(variant.selector_count(), spec.options.len());
        assert_eq!(variant.option3, None);
        assert_eq!(variant.inventory_management, "shopify");
    }
    assert_eq!(payload.variants[0].option1.as_deref(), Some("40mm"));
    assert_eq!(payload.variants[0].option2.as_deref(), Some("Black Sport Band"));
}

#[test]
fn compare_at_price_only_sent_when_discounted() {
    let catalog = parse_catalog(CATALOG).expect("catalog");
    let payload = product_payload(&catalog.products[0]);
    assert_eq!(payload.variants[0].compare_at_price.as_deref(), Some("349.99"));
    assert_eq!(payload.variants[1].compare_at_price, None);

    let json = serde_json::to_value(&payload.variants[1]).expect("serialize");
    assert!(json.get("compare_at_price").is_none());
    assert!(json.get("option3").is_some_and(serde_json::Value::is_null));
}

#[test]
fn collection_payload_is_published_with_cover_image() {
    let catalog = parse_catalog(CATALOG).expect("catalog");
    let payload = collection_payload(&catalog.collections[0]);
    assert_eq!(payload.title, "Electronics");
    assert!(payload.published);
    assert_eq!(
        payload.image,
        Some(NewImage {
            src: "https://images.example.com/electronics.jpg".into()
        })
    );
    assert_eq!(payload.body_html, None);

    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json.get("body_html").is_none());
}

#[test]
fn collection_payload_keeps_description() {
    let catalog = parse_catalog(CATALOG).expect("catalog");
    let payload = collection_payload(&catalog.collections[1]);
    assert_eq!(payload.body_html.as_deref(), Some("<p>Deals</p>"));
    assert_eq!(payload.image, None);
}
