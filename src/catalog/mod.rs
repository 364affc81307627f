//! The catalog accessors.
//!
//! [`CatalogClient`] exposes the data-retrieval operations the storefront
//! UI consumes: product listings (normalized), the featured collection's
//! products (raw), the smart-collection listing, and one collection's
//! products (raw).
//!
//! Every operation comes in two forms:
//!
//! - **strict**: `try_*`, returning `Result<_, CatalogError>` so callers
//!   can tell a transport failure from a malformed response from an
//!   unnormalizable record;
//! - **lenient**: the same name without the prefix, returning `Option`.
//!   Any failure is logged through `tracing` and collapsed to `None`.
//!   `None` means "no data", never "empty list"; callers that want the
//!   distinction use the strict form.
//!
//! Each invocation issues exactly one HTTP request (the category
//! composition, which chains two operations, issues one per operation),
//! holds no cache, and imposes no ordering on concurrent calls.

mod collection;
mod errors;
mod product;
pub mod records;

pub use collection::Collection;
pub use errors::CatalogError;
pub use product::{NormalizeError, Product};

use serde::de::DeserializeOwned;

use crate::clients::{ApiClient, ApiRequest};
use crate::config::StoreConfig;
use crate::endpoints::{
    Endpoints, CACHE_BYPASS_HEADER, CACHE_TAG_HEADER, MAIN_PRODUCTS_CACHE_TAG,
};
use records::{ProductRecord, SmartCollectionRecord};

/// Envelope field holding product records.
const PRODUCTS_KEY: &str = "products";

/// Envelope field holding smart-collection records.
const SMART_COLLECTIONS_KEY: &str = "smart_collections";

/// The result of the category composition.
///
/// The two variants are named because their element shapes differ: a
/// category listing comes back as raw upstream records, the full listing
/// as normalized products. Callers must match, which keeps them from
/// treating one shape as the other by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Normalized products from the full product listing.
    Normalized(Vec<Product>),
    /// Raw upstream records from a collection's product listing.
    Raw(Vec<ProductRecord>),
}

/// Resolves a category path segment to a collection id.
///
/// The match is a case-sensitive comparison against each collection's
/// handle, first match wins. No match resolves to `None`, which the
/// composition forwards into the products call as an empty id rather
/// than reporting "not found" locally.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::{resolve_collection_id, Collection};
///
/// let collections = vec![
///     Collection { id: 1, title: "A".into(), handle: "a".into() },
///     Collection { id: 2, title: "B".into(), handle: "b".into() },
/// ];
///
/// assert_eq!(resolve_collection_id(&collections, "b"), Some(2));
/// assert_eq!(resolve_collection_id(&collections, "z"), None);
/// ```
#[must_use]
pub fn resolve_collection_id(collections: &[Collection], handle: &str) -> Option<u64> {
    collections
        .iter()
        .find(|collection| collection.handle == handle)
        .map(|collection| collection.id)
}

/// The product/collection data-access client.
///
/// Wraps the request executor and the endpoint table. Construct one from
/// a [`StoreConfig`] at startup and share it; it is `Send + Sync` and
/// holds no per-call state.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_catalog::{CatalogClient, StoreConfig};
///
/// let catalog = CatalogClient::new(&StoreConfig::from_env());
///
/// // Lenient, baseline behavior: None on any failure.
/// let products = catalog.products(None).await;
///
/// // Strict: the failure kind is observable.
/// match catalog.try_products(None).await {
///     Ok(products) => render(products),
///     Err(err) => eprintln!("catalog unavailable: {err}"),
/// }
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    client: ApiClient,
    endpoints: Endpoints,
}

// Verify CatalogClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
};

impl CatalogClient {
    /// Creates a client bound to the configured store.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: ApiClient::new(config),
            endpoints: Endpoints::new(config),
        }
    }

    /// Returns the endpoint table this client requests against.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Lists products, normalized, in upstream response order.
    ///
    /// With `ids`, the listing is narrowed upstream via the `ids` query
    /// parameter (a comma-separated id list, forwarded verbatim); without
    /// it, the full listing is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, a malformed or
    /// unexpectedly-shaped body, or any record that cannot be normalized
    /// (one bad record fails the whole listing).
    pub async fn try_products(&self, ids: Option<&str>) -> Result<Vec<Product>, CatalogError> {
        let mut request = ApiRequest::get(self.endpoints.products_all());
        if let Some(ids) = ids {
            request = request.query_param("ids", ids);
        }

        let body = self.client.send(&request.build()).await?;
        let records: Vec<ProductRecord> = extract(body, PRODUCTS_KEY)?;

        let products = records
            .iter()
            .map(Product::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    /// Lenient form of [`try_products`](Self::try_products): logs and
    /// returns `None` on any failure.
    pub async fn products(&self, ids: Option<&str>) -> Option<Vec<Product>> {
        swallow("products", self.try_products(ids).await)
    }

    /// Lists the featured collection's products, **raw**.
    ///
    /// Unlike [`try_products`](Self::try_products) this returns the
    /// upstream records unnormalized; the `_raw` suffix marks the
    /// asymmetry. The request bypasses intermediary caches
    /// (`Cache-Control: no-cache`) and carries the `main-products`
    /// surrogate key so external caches can invalidate it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a malformed or
    /// unexpectedly-shaped body.
    pub async fn try_main_products_raw(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let request = ApiRequest::get(self.endpoints.main_products())
            .header(CACHE_BYPASS_HEADER.0, CACHE_BYPASS_HEADER.1)
            .header(CACHE_TAG_HEADER, MAIN_PRODUCTS_CACHE_TAG)
            .build();

        let body = self.client.send(&request).await?;
        let records: Vec<ProductRecord> = extract(body, PRODUCTS_KEY)?;
        tracing::debug!("Fetched {} main products", records.len());

        Ok(records)
    }

    /// Lenient form of
    /// [`try_main_products_raw`](Self::try_main_products_raw).
    pub async fn main_products_raw(&self) -> Option<Vec<ProductRecord>> {
        swallow("main_products_raw", self.try_main_products_raw().await)
    }

    /// Lists smart collections, projected to the internal shape, in
    /// upstream response order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a malformed or
    /// unexpectedly-shaped body.
    pub async fn try_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        let request = ApiRequest::get(self.endpoints.collections_all()).build();

        let body = self.client.send(&request).await?;
        let records: Vec<SmartCollectionRecord> = extract(body, SMART_COLLECTIONS_KEY)?;

        Ok(records.iter().map(Collection::from_record).collect())
    }

    /// Lenient form of [`try_collections`](Self::try_collections).
    pub async fn collections(&self) -> Option<Vec<Collection>> {
        swallow("collections", self.try_collections().await)
    }

    /// Lists one collection's products, **raw**.
    ///
    /// The id is substituted into the path verbatim and never validated:
    /// an empty or unresolved id produces a malformed request whose
    /// failure surfaces like any other upstream error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a malformed or
    /// unexpectedly-shaped body.
    pub async fn try_collection_products_raw(
        &self,
        id: &str,
    ) -> Result<Vec<ProductRecord>, CatalogError> {
        let request = ApiRequest::get(self.endpoints.collection_products(id)).build();

        let body = self.client.send(&request).await?;
        extract(body, PRODUCTS_KEY)
    }

    /// Lenient form of
    /// [`try_collection_products_raw`](Self::try_collection_products_raw).
    pub async fn collection_products_raw(&self, id: &str) -> Option<Vec<ProductRecord>> {
        swallow(
            "collection_products_raw",
            self.try_collection_products_raw(id).await,
        )
    }

    /// The storefront composition rule.
    ///
    /// With a category path segment, resolves it against the collection
    /// listing by case-sensitive handle match and fetches that
    /// collection's products (raw). An unmatched handle resolves to no
    /// id and is forwarded as the empty string; the failure belongs to
    /// the downstream fetch, not to resolution. Without a category, the
    /// full normalized product listing is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from whichever underlying operation
    /// fails first.
    pub async fn try_category_listing(
        &self,
        category: Option<&str>,
    ) -> Result<Listing, CatalogError> {
        match category {
            Some(handle) => {
                let collections = self.try_collections().await?;
                let id = resolve_collection_id(&collections, handle)
                    .map_or_else(String::new, |id| id.to_string());
                let records = self.try_collection_products_raw(&id).await?;
                Ok(Listing::Raw(records))
            }
            None => Ok(Listing::Normalized(self.try_products(None).await?)),
        }
    }

    /// Lenient form of
    /// [`try_category_listing`](Self::try_category_listing).
    pub async fn category_listing(&self, category: Option<&str>) -> Option<Listing> {
        swallow("category_listing", self.try_category_listing(category).await)
    }
}

/// Pulls the record array out of an envelope body and decodes it.
fn extract<T: DeserializeOwned>(
    mut body: serde_json::Value,
    key: &'static str,
) -> Result<Vec<T>, CatalogError> {
    let records = match body.get_mut(key) {
        Some(value) => value.take(),
        None => return Err(CatalogError::MissingKey { key }),
    };

    serde_json::from_value(records).map_err(|source| CatalogError::UnexpectedShape { key, source })
}

/// Collapses a strict result into the lenient contract: log, then `None`.
fn swallow<T>(operation: &'static str, result: Result<T, CatalogError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!("Catalog operation '{}' failed: {}", operation, error);
            None
        }
    }
}
