//! Maps parsed subcommands onto API calls and renders their output.

use std::path::Path;

use serde_json::Value;

use crate::api::ManapoolApi;
use crate::cli::{Cli, Command, PendingOrderAction};
use crate::config::Credentials;
use crate::error::{ManapoolError, Result};
use crate::formatters::{format_inventory_summary, format_json};
use crate::lowest_prices::{self, LowestPriceRequest};
use crate::models::{
    FulfillmentUpdate, InventoryListing, InventoryQuery, InventoryUpdate, OrderQuery, ProductQuery,
};

/// Reads a JSON request body from disk
pub fn read_json_file(path: &Path) -> Result<Value> {
    log::debug!("Reading JSON from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ManapoolError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn require_ids(query: &ProductQuery) -> Result<()> {
    if query.is_empty() {
        return Err(ManapoolError::Usage(
            "Must provide at least one search parameter.".to_string(),
        ));
    }
    Ok(())
}

/// Resolves credentials and runs the parsed command line.
///
/// Missing credentials fail here, before any request is sent.
pub async fn run(cli: Cli) -> Result<String> {
    let credentials = Credentials::new(cli.token, cli.email)?;
    let api = ManapoolApi::with_base_url(credentials, &cli.base_url);
    execute(&api, cli.command).await
}

/// Runs one subcommand and returns the text to print on stdout.
pub async fn execute(api: &ManapoolApi, command: Command) -> Result<String> {
    let response = match command {
        Command::SearchSingles {
            scryfall_ids,
            tcgplayer_ids,
            tcgplayer_sku_ids,
            product_ids,
        } => {
            let query = ProductQuery {
                scryfall_ids,
                tcgplayer_ids,
                tcgplayer_sku_ids,
                product_ids,
            };
            require_ids(&query)?;
            api.search_singles(&query).await?
        }
        Command::SearchSealed {
            tcgplayer_ids,
            product_ids,
        } => {
            let query = ProductQuery {
                tcgplayer_ids,
                product_ids,
                ..Default::default()
            };
            require_ids(&query)?;
            api.search_sealed(&query).await?
        }
        Command::Prices { category } => api.prices(category).await?,
        Command::LowestPrices {
            scryfall_ids,
            tcgplayer_ids,
            product_ids,
            inventory_file,
        } => {
            let mut request = LowestPriceRequest {
                scryfall_ids,
                tcgplayer_ids,
                product_ids,
            };
            if let Some(path) = inventory_file {
                request.add_inventory_file(&path)?;
            }
            return lowest_prices::report(api, &request).await;
        }
        Command::Optimize { file } => {
            let cart = read_json_file(&file)?;
            api.optimize_cart(&cart).await?
        }
        Command::PendingOrder { action } => match action {
            PendingOrderAction::Create { file } => {
                let order = read_json_file(&file)?;
                api.create_pending_order(&order).await?
            }
            PendingOrderAction::Get { id } => api.pending_order(&id).await?,
            PendingOrderAction::Purchase { id, file } => {
                let payment = match file {
                    Some(path) => read_json_file(&path)?,
                    None => Value::Object(Default::default()),
                };
                api.purchase_pending_order(&id, &payment).await?
            }
        },
        Command::Account => api.account().await?,
        Command::SellerInventory {
            limit,
            offset,
            min_quantity,
            stats,
            summary,
        } => {
            let query = InventoryQuery {
                limit,
                offset,
                min_quantity,
            };
            let response = api.seller_inventory(&query).await?;
            if summary {
                let listing: InventoryListing = serde_json::from_value(response)?;
                return Ok(format_inventory_summary(&listing, stats));
            }
            response
        }
        Command::UpdatePrice {
            sku,
            price_cents,
            quantity,
        } => {
            let update = InventoryUpdate {
                price_cents,
                quantity,
            };
            api.update_inventory_by_sku(&sku, &update).await?
        }
        Command::SellerOrders {
            since,
            unfulfilled,
            fulfilled,
            limit,
            offset,
        } => {
            let query = OrderQuery {
                since,
                is_unfulfilled: unfulfilled,
                is_fulfilled: fulfilled,
                limit,
                offset,
            };
            api.seller_orders(&query).await?
        }
        Command::SellerOrder { id } => api.seller_order(&id).await?,
        Command::FulfillOrder {
            id,
            status,
            tracking_company,
            tracking_number,
            tracking_url,
        } => {
            let update = FulfillmentUpdate {
                status,
                tracking_company,
                tracking_number,
                tracking_url,
            };
            api.update_order_fulfillment(&id, &update).await?
        }
    };

    let mut output = format_json(&response);
    output.push('\n');
    Ok(output)
}
