//! Lowest-price report: one product search per id, rendered as price tables.
//!
//! Ids can come from the command line or from a saved `seller-inventory`
//! response. A failed lookup is reported and the remaining ids still run.

use std::collections::HashSet;
use std::path::Path;

use crate::api::ManapoolApi;
use crate::error::{ManapoolError, Result};
use crate::formatters::format_product_lowest_prices;
use crate::models::{InventoryListing, ProductQuery, ProductSearchResponse};

/// Which search parameter an id is sent as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Scryfall,
    Tcgplayer,
    Product,
}

impl IdKind {
    pub fn param(&self) -> &'static str {
        match self {
            IdKind::Scryfall => "scryfall_ids",
            IdKind::Tcgplayer => "tcgplayer_ids",
            IdKind::Product => "product_ids",
        }
    }

    fn query(&self, id: &str) -> ProductQuery {
        let ids = vec![id.to_string()];
        match self {
            IdKind::Scryfall => ProductQuery {
                scryfall_ids: ids,
                ..Default::default()
            },
            IdKind::Tcgplayer => ProductQuery {
                tcgplayer_ids: ids,
                ..Default::default()
            },
            IdKind::Product => ProductQuery {
                product_ids: ids,
                ..Default::default()
            },
        }
    }
}

/// Ids to look up, grouped by kind
#[derive(Debug, Clone, Default)]
pub struct LowestPriceRequest {
    pub scryfall_ids: Vec<String>,
    pub tcgplayer_ids: Vec<String>,
    pub product_ids: Vec<String>,
}

impl LowestPriceRequest {
    /// Adds the scryfall ids of every single in a saved inventory listing.
    pub fn add_inventory_file(&mut self, path: &Path) -> Result<()> {
        let ids = scryfall_ids_from_inventory_file(path)?;
        log::info!("Read {} scryfall ids from {}", ids.len(), path.display());
        self.scryfall_ids.extend(ids);
        Ok(())
    }

    /// One lookup per distinct id, scryfall first, then tcgplayer, then product.
    pub fn lookups(&self) -> Result<Vec<(IdKind, String)>> {
        let lookups: Vec<(IdKind, String)> = [
            (IdKind::Scryfall, &self.scryfall_ids),
            (IdKind::Tcgplayer, &self.tcgplayer_ids),
            (IdKind::Product, &self.product_ids),
        ]
        .into_iter()
        .flat_map(|(kind, ids)| dedupe(ids).into_iter().map(move |id| (kind, id)))
        .collect();

        if lookups.is_empty() {
            return Err(ManapoolError::Usage(
                "Must provide at least one search parameter (--scryfall-ids, --tcgplayer-ids, --product-ids, --inventory-file).".to_string(),
            ));
        }
        Ok(lookups)
    }
}

/// Removes repeated and blank ids, keeping first-seen order
pub fn dedupe(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(str::to_string)
        .collect()
}

pub fn scryfall_ids_from_inventory_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ManapoolError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let listing: InventoryListing = serde_json::from_str(&content)?;

    Ok(listing
        .inventory
        .iter()
        .filter_map(|item| item.single().and_then(|s| s.scryfall_id.clone()))
        .collect())
}

/// Runs every lookup and renders the price tables.
///
/// Lookup failures go to stderr; the returned text is the stdout report.
pub async fn report(api: &ManapoolApi, request: &LowestPriceRequest) -> Result<String> {
    let lookups = request.lookups()?;
    log::info!("Looking up lowest prices for {} ids", lookups.len());

    let mut output = String::new();
    let mut found_any = false;

    for (kind, id) in &lookups {
        let response = match api.search_singles(&kind.query(id)).await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error fetching data for {}={}: {}", kind.param(), id, e);
                continue;
            }
        };

        let products: ProductSearchResponse = match serde_json::from_value(response) {
            Ok(products) => products,
            Err(e) => {
                eprintln!("Error fetching data for {}={}: {}", kind.param(), id, e);
                continue;
            }
        };

        for product in &products.data {
            found_any = true;
            output.push_str(&format_product_lowest_prices(product));
        }
    }

    if !found_any {
        output.push_str("No products found.\n");
    }

    Ok(output)
}

#[cfg(test)]
#[path = "lowest_prices_tests.rs"]
mod tests;
