//! Configuration for the data-access layer.
//!
//! The upstream host and API credential are injected explicitly at
//! construction time and are read-only afterwards. There is no process-wide
//! configuration access at call time: load a [`StoreConfig`] once at
//! startup (typically with [`StoreConfig::from_env`]) and hand it to the
//! clients that need it.
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::{AccessToken, StoreConfig, StoreHost};
//!
//! let config = StoreConfig::builder()
//!     .host(StoreHost::new("https://my-store.myshopify.com"))
//!     .access_token(AccessToken::new("shpat-example"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, StoreHost};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable holding the upstream store hostname.
pub const HOSTNAME_VAR: &str = "SHOPIFY_HOSTNAME";

/// Environment variable holding the Admin API access token.
pub const API_KEY_VAR: &str = "SHOPIFY_API_KEY";

/// Configuration for upstream API access.
///
/// Holds the two values every request needs: the store hostname the
/// endpoint URLs are composed from, and the access token sent with each
/// request.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Missing values
///
/// Neither value is validated. An empty host composes malformed endpoint
/// URLs and an empty token is rejected by the upstream; both surface as
/// fetch failures at the accessor, never as construction errors.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    host: StoreHost,
    access_token: AccessToken,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads [`HOSTNAME_VAR`] and [`API_KEY_VAR`]. This is meant to run
    /// once at process start; absent variables fall back to the empty
    /// string rather than erroring, degrading to malformed requests
    /// downstream.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: StoreHost::new(std::env::var(HOSTNAME_VAR).unwrap_or_default()),
            access_token: AccessToken::new(std::env::var(API_KEY_VAR).unwrap_or_default()),
        }
    }

    /// Returns the upstream store host.
    #[must_use]
    pub const fn host(&self) -> &StoreHost {
        &self.host
    }

    /// Returns the API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// Both fields are required in the sense that they must be *set*; their
/// contents are not inspected.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::{AccessToken, StoreConfig, StoreHost};
///
/// let config = StoreConfig::builder()
///     .host(StoreHost::new("https://my-store.myshopify.com"))
///     .access_token(AccessToken::new("shpat-example"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    host: Option<StoreHost>,
    access_token: Option<AccessToken>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream store host (required).
    #[must_use]
    pub fn host(mut self, host: StoreHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Builds the [`StoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` or
    /// `access_token` were never set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(StoreConfig { host, access_token })
    }
}
