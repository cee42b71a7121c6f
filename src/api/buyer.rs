//! Buyer endpoints: cart optimizer and pending orders.

use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

use super::client::segment;
use super::ManapoolApi;

impl ManapoolApi {
    /// `POST /buyer/optimizer` with the cart as given
    pub async fn optimize_cart(&self, cart: &Value) -> Result<Value> {
        log::info!("Submitting cart to optimizer");
        self.send_json(Method::POST, "/buyer/optimizer", cart).await
    }

    /// `POST /buyer/orders/pending-orders`
    pub async fn create_pending_order(&self, order: &Value) -> Result<Value> {
        log::info!("Creating pending order");
        self.send_json(Method::POST, "/buyer/orders/pending-orders", order)
            .await
    }

    /// `GET /buyer/orders/pending-orders/{id}`
    pub async fn pending_order(&self, id: &str) -> Result<Value> {
        self.get_json(&format!("/buyer/orders/pending-orders/{}", segment(id)), &[])
            .await
    }

    /// `POST /buyer/orders/pending-orders/{id}/purchase`
    ///
    /// `payment` carries billing/payment details; an empty object is sent
    /// when none are given.
    pub async fn purchase_pending_order(&self, id: &str, payment: &Value) -> Result<Value> {
        log::info!("Purchasing pending order {}", id);
        self.send_json(
            Method::POST,
            &format!("/buyer/orders/pending-orders/{}/purchase", segment(id)),
            payment,
        )
        .await
    }

    /// `GET /account`
    pub async fn account(&self) -> Result<Value> {
        self.get_json("/account", &[]).await
    }
}
