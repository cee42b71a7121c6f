//! Command line surface: one subcommand per API capability.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{BASE_URL_ENV, DEFAULT_BASE_URL, EMAIL_ENV, TOKEN_ENV};
use crate::models::PriceCategory;

/// Mana Pool API CLI - search, prices, cart optimizer, inventory and orders
#[derive(Parser, Debug)]
#[command(name = "manapool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Account email the token belongs to
    #[arg(long, env = EMAIL_ENV, global = true)]
    pub email: Option<String>,

    /// API root URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// env_logger filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search singles by id
    SearchSingles {
        /// Scryfall ID(s)
        #[arg(long, num_args = 1..)]
        scryfall_ids: Vec<String>,
        /// TCGplayer product ID(s)
        #[arg(long, num_args = 1..)]
        tcgplayer_ids: Vec<String>,
        /// TCGplayer SKU ID(s)
        #[arg(long, num_args = 1..)]
        tcgplayer_sku_ids: Vec<String>,
        /// Mana Pool product ID(s)
        #[arg(long, num_args = 1..)]
        product_ids: Vec<String>,
    },

    /// Search sealed products by id
    SearchSealed {
        /// TCGplayer product ID(s)
        #[arg(long, num_args = 1..)]
        tcgplayer_ids: Vec<String>,
        /// Mana Pool product ID(s)
        #[arg(long, num_args = 1..)]
        product_ids: Vec<String>,
    },

    /// Download the price export for a category
    Prices {
        /// Price export to download
        #[arg(value_enum)]
        category: PriceCategory,
    },

    /// Print lowest Mana Pool prices next to TCGplayer market prices
    LowestPrices {
        /// Scryfall ID(s)
        #[arg(long, num_args = 1..)]
        scryfall_ids: Vec<String>,
        /// TCGplayer product ID(s)
        #[arg(long, num_args = 1..)]
        tcgplayer_ids: Vec<String>,
        /// Mana Pool product ID(s)
        #[arg(long, num_args = 1..)]
        product_ids: Vec<String>,
        /// Saved seller-inventory JSON to take scryfall ids from
        #[arg(long)]
        inventory_file: Option<PathBuf>,
    },

    /// Run the cart optimizer on a JSON cart file
    Optimize {
        /// Path to JSON file containing cart data
        file: PathBuf,
    },

    /// Create, inspect or purchase pending orders
    PendingOrder {
        #[command(subcommand)]
        action: PendingOrderAction,
    },

    /// Show the authenticated account
    Account,

    /// List seller inventory
    SellerInventory {
        /// Number of items to fetch
        #[arg(long, default_value_t = 100)]
        limit: u32,
        /// Offset for pagination
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// Filter by minimum quantity
        #[arg(long)]
        min_quantity: Option<u32>,
        /// Add the market low for each item to the summary
        #[arg(long, requires = "summary")]
        stats: bool,
        /// Print a human-readable summary
        #[arg(long)]
        summary: bool,
    },

    /// Set price and quantity for a TCGplayer SKU
    UpdatePrice {
        /// TCGplayer SKU
        #[arg(long)]
        sku: String,
        /// Price in cents
        #[arg(long)]
        price_cents: i64,
        /// Quantity (required so a price change never resets stock)
        #[arg(long)]
        quantity: u32,
    },

    /// List seller orders
    SellerOrders {
        /// Only orders created after this timestamp (RFC 3339)
        #[arg(long)]
        since: Option<String>,
        /// Only unfulfilled orders
        #[arg(long, conflicts_with = "fulfilled")]
        unfulfilled: bool,
        /// Only fulfilled orders
        #[arg(long)]
        fulfilled: bool,
        /// Number of orders to fetch
        #[arg(long)]
        limit: Option<u32>,
        /// Offset for pagination
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Show a single seller order
    SellerOrder {
        /// Order ID
        id: String,
    },

    /// Update fulfillment status and tracking of a seller order
    FulfillOrder {
        /// Order ID
        id: String,
        /// New fulfillment status (e.g. processing, shipped, delivered)
        #[arg(long)]
        status: String,
        /// Carrier name (e.g. usps, ups, fedex)
        #[arg(long)]
        tracking_company: Option<String>,
        /// Carrier tracking number
        #[arg(long)]
        tracking_number: Option<String>,
        /// Link to the carrier's tracking page
        #[arg(long)]
        tracking_url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PendingOrderAction {
    /// Create a pending order from a JSON file
    Create {
        /// Path to JSON file containing the order
        file: PathBuf,
    },
    /// Show a pending order
    Get {
        /// Pending order ID
        id: String,
    },
    /// Purchase a pending order, with optional payment details from a JSON file
    Purchase {
        /// Pending order ID
        id: String,
        /// Path to JSON file containing payment details
        file: Option<PathBuf>,
    },
}
