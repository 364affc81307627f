//! # Storefront Catalog
//!
//! The product/collection data-access layer for a Shopify-backed
//! storefront. This crate is the only part of the storefront that talks
//! to the upstream Admin REST API; the UI layer calls in, renders what it
//! gets back, and owns everything else.
//!
//! ## Overview
//!
//! The crate provides:
//! - Explicit, injected configuration via [`StoreConfig`] (no
//!   process-wide lookups at call time)
//! - A pure endpoint table via [`Endpoints`], with per-endpoint API
//!   version pins
//! - An authenticated GET executor via [`clients::ApiClient`]
//! - Normalization of upstream product records into the stable
//!   [`Product`] shape
//! - The catalog accessors via [`CatalogClient`]: product listings,
//!   the featured collection's products, smart collections, and one
//!   collection's products
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront_catalog::{CatalogClient, StoreConfig};
//!
//! # async fn run() {
//! // Load configuration once at process start.
//! let config = StoreConfig::from_env();
//! let catalog = CatalogClient::new(&config);
//!
//! // Baseline, lenient mode: any failure is logged and comes back as
//! // None ("no data", not "empty list").
//! if let Some(products) = catalog.products(None).await {
//!     for product in products {
//!         println!("{}: {}", product.title, product.price);
//!     }
//! }
//!
//! // Strict mode: the failure kind is observable.
//! match catalog.try_collections().await {
//!     Ok(collections) => println!("{} collections", collections.len()),
//!     Err(err) => eprintln!("collections unavailable: {err}"),
//! }
//! # }
//! ```
//!
//! ## Failure model
//!
//! Every lenient accessor returns `Option`: `None` on transport failure,
//! a malformed body, an unexpected response shape, or an unnormalizable
//! record, with the cause logged through [`tracing`]. HTTP status codes
//! are never inspected: an upstream error body fails as a shape
//! mismatch, not as a status. There is no retry, no backoff, and no
//! caching; every call is a fresh fetch.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed
//!   explicitly
//! - **Encapsulated upstream schema**: raw wire records never leak
//!   through the normalized shapes
//! - **Thread-safe**: clients are `Send + Sync`; calls are independent
//!   and safe to run concurrently
//! - **Async-first**: designed for use with the Tokio runtime

pub mod catalog;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;

// Re-export public types at crate root for convenience
pub use catalog::{
    resolve_collection_id, CatalogClient, CatalogError, Collection, Listing, NormalizeError,
    Product,
};
pub use config::{AccessToken, ApiVersion, StoreConfig, StoreConfigBuilder, StoreHost};
pub use endpoints::Endpoints;
pub use error::ConfigError;

// Re-export executor types for callers that drive requests directly
pub use clients::{ApiClient, ApiRequest, FetchError};
