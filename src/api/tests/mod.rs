//! Unit tests for the Mana Pool API client.


use crate::api::ManapoolApi;
use crate::config::Credentials;

pub(super) fn test_credentials() -> Credentials {
    Credentials::new(Some("test_token".into()), Some("seller@example.com".into())).unwrap()
}

pub(super) fn api_with_mock(mock_uri: &str) -> ManapoolApi {
    ManapoolApi::with_base_url(test_credentials(), mock_uri)
}
