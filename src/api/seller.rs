//! Seller inventory and order management.

use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::models::{FulfillmentUpdate, InventoryQuery, InventoryUpdate, OrderQuery};

use super::client::segment;
use super::ManapoolApi;

impl ManapoolApi {
    /// `GET /seller/inventory`
    pub async fn seller_inventory(&self, query: &InventoryQuery) -> Result<Value> {
        log::info!(
            "Fetching seller inventory (limit {}, offset {})",
            query.limit,
            query.offset
        );
        self.get_json("/seller/inventory", &query.to_pairs()).await
    }

    /// `PUT /seller/inventory/tcgsku/{sku}`
    ///
    /// Price and quantity are always sent together; the API resets any
    /// field left out.
    pub async fn update_inventory_by_sku(
        &self,
        sku: &str,
        update: &InventoryUpdate,
    ) -> Result<Value> {
        log::info!(
            "Updating SKU {}: {} cents, quantity {}",
            sku,
            update.price_cents,
            update.quantity
        );
        self.send_json(
            Method::PUT,
            &format!("/seller/inventory/tcgsku/{}", segment(sku)),
            update,
        )
        .await
    }

    /// `GET /seller/orders`
    pub async fn seller_orders(&self, query: &OrderQuery) -> Result<Value> {
        log::info!("Fetching seller orders");
        self.get_json("/seller/orders", &query.to_pairs()).await
    }

    /// `GET /seller/orders/{id}`
    pub async fn seller_order(&self, id: &str) -> Result<Value> {
        self.get_json(&format!("/seller/orders/{}", segment(id)), &[])
            .await
    }

    /// `PUT /seller/orders/{id}/fulfillment`
    pub async fn update_order_fulfillment(
        &self,
        id: &str,
        update: &FulfillmentUpdate,
    ) -> Result<Value> {
        log::info!("Setting fulfillment of order {} to {}", id, update.status);
        self.send_json(
            Method::PUT,
            &format!("/seller/orders/{}/fulfillment", segment(id)),
            update,
        )
        .await
    }
}
