//! Mana Pool CLI
//!
//! Command line client for the Mana Pool marketplace API: product search,
//! price exports, cart optimizer, pending orders, seller inventory and orders.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatters;
pub mod lowest_prices;
pub mod models;

pub use api::ManapoolApi;
pub use cli::{Cli, Command};
pub use config::Credentials;
pub use error::{ManapoolError, Result};
