//! Newtype wrappers for configuration values.
//!
//! Unlike most newtype wrappers, these perform no content validation. The
//! upstream contract is that a missing or empty host/credential is *not* a
//! local error: it produces a malformed request whose failure surfaces
//! downstream, at the fetch. The wrappers exist for type safety (a host and
//! a token cannot be swapped by accident) and, for the token, to keep the
//! credential out of debug output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The upstream store hostname, scheme included.
///
/// Example value: `https://my-store.myshopify.com`. The value is taken
/// as-is; an empty host yields endpoint URLs with no authority, which fail
/// when fetched rather than at construction.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::StoreHost;
///
/// let host = StoreHost::new("https://my-store.myshopify.com");
/// assert_eq!(host.as_ref(), "https://my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreHost(String);

impl StoreHost {
    /// Wraps a hostname string.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    /// Returns `true` if the host is the empty string.
    ///
    /// Callers normally have no reason to check this; it exists so that
    /// diagnostics can say *why* every fetch is failing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for StoreHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The Admin API access token sent as `X-Shopify-Access-Token`.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `AccessToken(*****)` instead of the credential.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::AccessToken;
///
/// let token = AccessToken::new("shpat-example");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a credential string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_host_is_passed_through_unchanged() {
        let host = StoreHost::new("https://my-store.myshopify.com");
        assert_eq!(host.as_ref(), "https://my-store.myshopify.com");
        assert_eq!(host.to_string(), "https://my-store.myshopify.com");
    }

    #[test]
    fn test_store_host_accepts_empty_value() {
        let host = StoreHost::new("");
        assert!(host.is_empty());
        assert_eq!(host.as_ref(), "");
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat-super-secret");
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("shpat-super-secret"));
    }

    #[test]
    fn test_access_token_exposes_value_for_headers() {
        let token = AccessToken::new("shpat-example");
        assert_eq!(token.as_ref(), "shpat-example");
    }

    #[test]
    fn test_store_host_serializes_as_plain_string() {
        let host = StoreHost::new("https://shop.example.com");
        let json = serde_json::to_string(&host).unwrap();
        assert_eq!(json, r#""https://shop.example.com""#);

        let restored: StoreHost = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, host);
    }
}
