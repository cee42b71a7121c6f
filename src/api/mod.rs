//! Mana Pool API client.
//!
//! One method per remote endpoint. Responses are returned as raw JSON so the
//! CLI can relay them unmodified.

mod buyer;
mod client;
mod prices;
mod products;
mod seller;

use reqwest::Client;

use crate::config::Credentials;

/// Mana Pool API client authenticated with an access token and account email.
pub struct ManapoolApi {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

impl ManapoolApi {
    /// Creates a client against an API root (production, staging, mock servers).
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Self {
        log::debug!("Creating Mana Pool API client for {}", base_url);
        Self {
            client: Client::new(),
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
