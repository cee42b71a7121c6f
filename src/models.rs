//! Request descriptions and lenient response views for the Mana Pool API.
//!
//! Responses are relayed as raw JSON; the view structs below are only used by
//! the text renderers and default every field so unexpected payloads still print.

use serde::{Deserialize, Deserializer, Serialize};

/// Price export category, used as the `/prices/{category}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PriceCategory {
    Singles,
    Sealed,
    Variants,
}

impl PriceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Singles => "singles",
            PriceCategory::Sealed => "sealed",
            PriceCategory::Variants => "variants",
        }
    }
}

/// Identifier lists for product searches. Empty lists are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub scryfall_ids: Vec<String>,
    pub tcgplayer_ids: Vec<String>,
    pub tcgplayer_sku_ids: Vec<String>,
    pub product_ids: Vec<String>,
}

impl ProductQuery {
    pub fn is_empty(&self) -> bool {
        self.scryfall_ids.is_empty()
            && self.tcgplayer_ids.is_empty()
            && self.tcgplayer_sku_ids.is_empty()
            && self.product_ids.is_empty()
    }

    /// Query pairs with list values repeated per key
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, values) in [
            ("scryfall_ids", &self.scryfall_ids),
            ("tcgplayer_ids", &self.tcgplayer_ids),
            ("tcgplayer_sku_ids", &self.tcgplayer_sku_ids),
            ("product_ids", &self.product_ids),
        ] {
            pairs.extend(values.iter().map(|v| (key, v.clone())));
        }
        pairs
    }
}

/// Seller inventory paging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryQuery {
    pub limit: u32,
    pub offset: u32,
    pub min_quantity: Option<u32>,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            min_quantity: None,
        }
    }
}

impl InventoryQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(min) = self.min_quantity {
            pairs.push(("minQuantity", min.to_string()));
        }
        pairs
    }
}

/// Seller order listing filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub since: Option<String>,
    pub is_unfulfilled: bool,
    pub is_fulfilled: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl OrderQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(since) = &self.since {
            pairs.push(("since", since.clone()));
        }
        if self.is_unfulfilled {
            pairs.push(("is_unfulfilled", "true".to_string()));
        }
        if self.is_fulfilled {
            pairs.push(("is_fulfilled", "true".to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Body for `PUT /seller/inventory/tcgsku/{sku}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryUpdate {
    pub price_cents: i64,
    pub quantity: u32,
}

/// Body for `PUT /seller/orders/{id}/fulfillment`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FulfillmentUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
}

// ── Response views ───────────────────────────────────────────────────

/// Reads a missing or `null` list as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /seller/inventory` response
#[derive(Debug, Default, Deserialize)]
pub struct InventoryListing {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inventory: Vec<InventoryItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub product: Option<InventoryProduct>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub market_stats: Option<MarketStats>,
}

impl InventoryItem {
    pub fn single(&self) -> Option<&SingleDetails> {
        self.product.as_ref().and_then(|p| p.single.as_ref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InventoryProduct {
    #[serde(default)]
    pub single: Option<SingleDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SingleDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub scryfall_id: Option<String>,
    #[serde(default)]
    pub language_id: Option<String>,
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub finish_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketStats {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variants: Vec<PriceVariant>,
}

/// One language/condition/finish combination with its marketplace low
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceVariant {
    #[serde(default)]
    pub language_id: Option<String>,
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub finish_id: Option<String>,
    #[serde(default)]
    pub low_price: Option<i64>,
}

/// `GET /products/singles` response
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<ProductPrices>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductPrices {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub set_code: Option<String>,
    #[serde(default)]
    pub price_market: Option<i64>,
    #[serde(default)]
    pub price_market_foil: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variants: Vec<PriceVariant>,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
