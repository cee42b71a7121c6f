//! Request construction and response handling shared by all endpoints.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ManapoolError, Result};

use super::ManapoolApi;

const USER_AGENT: &str = concat!("manapool-cli/", env!("CARGO_PKG_VERSION"));

impl ManapoolApi {
    /// Builds an authenticated request for `path` (relative to the API root).
    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        self.client
            .request(method, &url)
            .bearer_auth(&self.credentials.token)
            .header("X-ManaPool-Access-Token", &self.credentials.token)
            .header("X-ManaPool-Email", &self.credentials.email)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
    }

    /// GET with query pairs; repeated keys encode list parameters.
    pub(crate) async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let request = self.authorized(Method::GET, path).query(query);
        Self::send(request).await
    }

    /// Sends `body` as JSON with the given method.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        // .json() also sets Content-Type: application/json
        let request = self.authorized(method, path).json(body);
        Self::send(request).await
    }

    async fn send(request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        log::debug!("Response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("Request failed with status {}: {}", status, body);
            return Err(ManapoolError::HttpStatus { status, body });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Percent-encodes a single path segment (SKUs, order ids).
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
