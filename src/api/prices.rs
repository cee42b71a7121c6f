//! Bulk price exports.

use serde_json::Value;

use crate::error::Result;
use crate::models::PriceCategory;

use super::ManapoolApi;

impl ManapoolApi {
    /// `GET /prices/{singles|sealed|variants}`
    pub async fn prices(&self, category: PriceCategory) -> Result<Value> {
        log::info!("Fetching {} prices", category.as_str());
        self.get_json(&format!("/prices/{}", category.as_str()), &[])
            .await
    }
}
