//! HTTP client utilities
//!
//! Provides the reqwest::Client shared by every engine call

use reqwest::Client;
use std::time::Duration;

/// Build a reqwest Client, optionally bounded by a request timeout.
///
/// Without a timeout a slow engine simply delays the response.
/// Proxy env vars (HTTP_PROXY, HTTPS_PROXY, NO_PROXY) are honored by reqwest itself.
pub fn engine_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .user_agent(concat!("address-finder/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_client_builds() {
        assert!(engine_client(None).is_ok());
        assert!(engine_client(Some(Duration::from_secs(5))).is_ok());
    }
}
