//! Request values for the executor.
//!
//! Every call this layer makes is a GET, so a request is just a URL plus
//! optional query parameters and extra headers. Use [`ApiRequest::get`]
//! to construct one with the builder.

use std::collections::HashMap;

/// A GET request to be sent by [`crate::clients::ApiClient`].
///
/// # Example
///
/// ```rust
/// use storefront_catalog::clients::ApiRequest;
///
/// let request = ApiRequest::get("https://shop.example.com/admin/api/2023-07/products.json")
///     .query_param("ids", "8421")
///     .build();
///
/// assert_eq!(request.query.unwrap().get("ids"), Some(&"8421".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The fully-qualified URL to request.
    pub url: String,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include beyond the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Creates a new builder for a GET request against `url`.
    #[must_use]
    pub fn get(url: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(url)
    }
}

/// Builder for [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    url: String,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: None,
            extra_headers: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`ApiRequest`].
    ///
    /// A GET with no body has nothing to validate, so this cannot fail.
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            url: self.url,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}
