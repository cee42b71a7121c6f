//! Tests for request descriptions and response views.

use super::*;

#[test]
fn product_query_repeats_list_keys() {
    let query = ProductQuery {
        scryfall_ids: vec!["a".into(), "b".into()],
        product_ids: vec!["p1".into()],
        ..Default::default()
    };

    assert_eq!(
        query.to_pairs(),
        vec![
            ("scryfall_ids", "a".to_string()),
            ("scryfall_ids", "b".to_string()),
            ("product_ids", "p1".to_string()),
        ]
    );
    assert!(!query.is_empty());
    assert!(ProductQuery::default().is_empty());
}

#[test]
fn inventory_query_defaults_and_min_quantity() {
    let query = InventoryQuery::default();
    assert_eq!(
        query.to_pairs(),
        vec![("limit", "100".to_string()), ("offset", "0".to_string())]
    );

    let query = InventoryQuery {
        min_quantity: Some(2),
        ..Default::default()
    };
    assert!(query.to_pairs().contains(&("minQuantity", "2".to_string())));
}

#[test]
fn order_query_omits_unset_filters() {
    assert!(OrderQuery::default().to_pairs().is_empty());

    let query = OrderQuery {
        since: Some("2025-01-01T00:00:00Z".into()),
        is_unfulfilled: true,
        limit: Some(10),
        ..Default::default()
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("since", "2025-01-01T00:00:00Z".to_string()),
            ("is_unfulfilled", "true".to_string()),
            ("limit", "10".to_string()),
        ]
    );
}

#[test]
fn fulfillment_update_skips_missing_tracking() {
    let update = FulfillmentUpdate {
        status: "shipped".into(),
        tracking_number: Some("1Z999".into()),
        ..Default::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "status": "shipped", "tracking_number": "1Z999" })
    );
}

#[test]
fn price_category_path_segments() {
    assert_eq!(PriceCategory::Singles.as_str(), "singles");
    assert_eq!(PriceCategory::Sealed.as_str(), "sealed");
    assert_eq!(PriceCategory::Variants.as_str(), "variants");
}

#[test]
fn inventory_listing_tolerates_missing_fields() {
    let json = r#"{
        "inventory": [
            { "price_cents": 150, "quantity": 2 },
            { "product": { "single": { "name": "Lightning Bolt", "set": "LEA" } } }
        ]
    }"#;

    let listing: InventoryListing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.inventory.len(), 2);
    assert!(listing.inventory[0].single().is_none());
    assert_eq!(
        listing.inventory[1].single().and_then(|s| s.name.as_deref()),
        Some("Lightning Bolt")
    );
}

#[test]
fn empty_object_is_an_empty_listing() {
    let listing: InventoryListing = serde_json::from_str("{}").unwrap();
    assert!(listing.inventory.is_empty());
}

// ── null lists ───────────────────────────────────────────────────────

#[test]
fn null_inventory_is_an_empty_listing() {
    let listing: InventoryListing = serde_json::from_str(r#"{"inventory": null}"#).unwrap();
    assert!(listing.inventory.is_empty());
}

#[test]
fn null_market_variants_keep_the_item() {
    let json = r#"{
        "inventory": [{
            "product": { "single": { "name": "Sol Ring", "set": "C21" } },
            "price_cents": 150,
            "market_stats": { "variants": null }
        }]
    }"#;

    let listing: InventoryListing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.inventory.len(), 1);
    let stats = listing.inventory[0].market_stats.as_ref().unwrap();
    assert!(stats.variants.is_empty());
}

#[test]
fn null_search_data_is_empty() {
    let response: ProductSearchResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
    assert!(response.data.is_empty());
}

#[test]
fn null_product_variants_keep_the_product() {
    let json = r#"{ "data": [{ "name": "Brainstorm", "set_code": "ICE", "variants": null }] }"#;

    let response: ProductSearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.data.len(), 1);
    assert!(response.data[0].variants.is_empty());
}
