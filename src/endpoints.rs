//! Upstream endpoint URL construction.
//!
//! Every URL this crate requests is composed here, from the configured
//! store host plus a fixed, per-endpoint Admin API version segment. The
//! version pins differ across endpoint families; they are configuration
//! carried in the table below, not something negotiated with the upstream.
//!
//! Construction is pure string composition. An empty host produces a URL
//! with no authority (`/admin/api/...`), never a local error; the
//! failure surfaces at the fetch like every other upstream problem.

use crate::config::{ApiVersion, StoreConfig};

/// The collection whose products the storefront's landing page features.
pub const MAIN_COLLECTION_ID: u64 = 672_049_463_622;

/// Version pin for the product and smart-collection listings.
pub const LISTING_VERSION: ApiVersion = ApiVersion::V2023_07;

/// Version pin for the main-products endpoint.
pub const MAIN_PRODUCTS_VERSION: ApiVersion = ApiVersion::V2023_10;

/// Version pin for the collection-products endpoint.
pub const COLLECTION_PRODUCTS_VERSION: ApiVersion = ApiVersion::V2025_10;

/// Header used to bypass intermediary HTTP caches on the main-products
/// fetch.
pub const CACHE_BYPASS_HEADER: (&str, &str) = ("Cache-Control", "no-cache");

/// Header carrying the cache tag external caches invalidate on.
pub const CACHE_TAG_HEADER: &str = "Surrogate-Key";

/// Cache tag attached to the main-products fetch.
pub const MAIN_PRODUCTS_CACHE_TAG: &str = "main-products";

/// The table of upstream endpoints, bound to one store host.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::{AccessToken, Endpoints, StoreConfig, StoreHost};
///
/// let config = StoreConfig::builder()
///     .host(StoreHost::new("https://my-store.myshopify.com"))
///     .access_token(AccessToken::new("shpat-example"))
///     .build()
///     .unwrap();
///
/// let endpoints = Endpoints::new(&config);
/// assert_eq!(
///     endpoints.products_all(),
///     "https://my-store.myshopify.com/admin/api/2023-07/products.json"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Endpoints {
    host: String,
}

impl Endpoints {
    /// Binds the endpoint table to the configured store host.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            host: config.host().as_ref().to_string(),
        }
    }

    /// The full product listing. Also the target of product creation.
    #[must_use]
    pub fn products_all(&self) -> String {
        format!("{}/admin/api/{LISTING_VERSION}/products.json", self.host)
    }

    /// A single product, for update or delete.
    #[must_use]
    pub fn product(&self, id: &str) -> String {
        format!("{}/admin/api/{LISTING_VERSION}/products/{id}.json", self.host)
    }

    /// The featured collection's products, served by its own endpoint.
    #[must_use]
    pub fn main_products(&self) -> String {
        format!(
            "{}/admin/api/{MAIN_PRODUCTS_VERSION}/collections/{MAIN_COLLECTION_ID}/products.json",
            self.host
        )
    }

    /// The smart-collection listing. Also the target of collection
    /// creation.
    #[must_use]
    pub fn collections_all(&self) -> String {
        format!(
            "{}/admin/api/{LISTING_VERSION}/smart_collections.json",
            self.host
        )
    }

    /// A single smart collection, for update or delete.
    #[must_use]
    pub fn collection(&self, id: &str) -> String {
        format!(
            "{}/admin/api/{LISTING_VERSION}/smart_collections/{id}.json",
            self.host
        )
    }

    /// The products belonging to one collection.
    ///
    /// The identifier is substituted verbatim; an empty or otherwise
    /// unresolved id yields a malformed path that fails upstream rather
    /// than here.
    #[must_use]
    pub fn collection_products(&self, id: &str) -> String {
        format!(
            "{}/admin/api/{COLLECTION_PRODUCTS_VERSION}/collections/{id}/products.json",
            self.host
        )
    }
}
