//! Credentials and endpoint configuration

use crate::error::{ManapoolError, Result};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://manapool.com/api/v1";

pub const TOKEN_ENV: &str = "MANAPOOL_API_TOKEN";
pub const EMAIL_ENV: &str = "MANAPOOL_API_EMAIL";
pub const BASE_URL_ENV: &str = "MANAPOOL_API_URL";

/// Access token and account email used to authenticate every request
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub email: String,
}

impl Credentials {
    /// Builds credentials, rejecting missing or blank values.
    pub fn new(token: Option<String>, email: Option<String>) -> Result<Self> {
        let token = token.filter(|t| !t.trim().is_empty());
        let email = email.filter(|e| !e.trim().is_empty());

        match (token, email) {
            (Some(token), Some(email)) => {
                log::debug!("Using credentials for {} (token length: {})", email, token.len());
                Ok(Self { token, email })
            }
            _ => Err(ManapoolError::MissingCredentials),
        }
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"***")
            .field("email", &self.email)
            .finish()
    }
}
