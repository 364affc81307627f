//! The request executor.
//!
//! [`ApiClient`] issues authenticated GETs against fully-qualified URLs
//! and returns the parsed JSON body. It is the only place in the crate
//! that touches the network.

use std::collections::HashMap;

use crate::clients::errors::FetchError;
use crate::clients::ApiRequest;
use crate::config::StoreConfig;

/// Header carrying the API credential on every request.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Authenticated HTTP executor for upstream API calls.
///
/// The client attaches the configured access token to every request and
/// parses each response body as JSON. It performs a single attempt per
/// call: no retry, no backoff, no timeout beyond the transport's own.
///
/// The HTTP status code is never inspected. An upstream 4xx/5xx whose
/// body is JSON comes back as `Ok`; the caller discovers the failure when
/// the body does not have the shape it expects.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async
/// tasks. Each call is independent; the client holds no per-call state.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_catalog::clients::{ApiClient, ApiRequest};
/// use storefront_catalog::StoreConfig;
///
/// let client = ApiClient::new(&StoreConfig::from_env());
/// let request = ApiRequest::get("https://my-store.myshopify.com/admin/api/2023-07/products.json")
///     .build();
/// let body = client.send(&request).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new executor carrying the configured credential.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends the request and parses the response body as JSON.
    ///
    /// The body is read as text first, then parsed, so the two failure
    /// modes stay distinct: a transport problem is
    /// [`FetchError::Network`], a non-JSON body is
    /// [`FetchError::MalformedBody`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request cannot be sent (including a
    /// malformed URL from missing configuration), the body cannot be
    /// read, or the body is not valid JSON.
    pub async fn send(&self, request: &ApiRequest) -> Result<serde_json::Value, FetchError> {
        let mut builder = self.client.get(&request.url);

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                builder = builder.header(key, value);
            }
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        let response = builder.send().await?;
        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, StoreHost};

    fn create_test_config() -> StoreConfig {
        StoreConfig::builder()
            .host(StoreHost::new("https://test-shop.myshopify.com"))
            .access_token(AccessToken::new("test-access-token"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_access_token_header_injection() {
        let client = ApiClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_empty_token_is_still_sent() {
        // An absent credential is not validated here; the upstream
        // rejects it and the caller sees a shape mismatch.
        let config = StoreConfig::builder()
            .host(StoreHost::new("https://test-shop.myshopify.com"))
            .access_token(AccessToken::new(""))
            .build()
            .unwrap();
        let client = ApiClient::new(&config);

        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&String::new())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
