//! HTTP client construction for backend communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;

pub const USER_AGENT: &str = concat!("fansapprove-web/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every backend request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared backend client.
///
/// A request that exceeds `timeout` fails like any other backend error.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .timeout(timeout)
        .build()?;
    Ok(client)
}
