//! Product search endpoints.

use serde_json::Value;

use crate::error::Result;
use crate::models::ProductQuery;

use super::ManapoolApi;

impl ManapoolApi {
    /// `GET /products/singles`
    pub async fn search_singles(&self, query: &ProductQuery) -> Result<Value> {
        log::info!("Searching singles ({} ids)", query.to_pairs().len());
        self.get_json("/products/singles", &query.to_pairs()).await
    }

    /// `GET /products/sealed`
    pub async fn search_sealed(&self, query: &ProductQuery) -> Result<Value> {
        log::info!("Searching sealed products ({} ids)", query.to_pairs().len());
        self.get_json("/products/sealed", &query.to_pairs()).await
    }
}
