//! Admin API version segments.
//!
//! The upstream endpoints this crate talks to are pinned to *different*
//! API versions, fixed per endpoint rather than negotiated. This module
//! provides the [`ApiVersion`] values the endpoint table composes into
//! paths.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version, as it appears in the URL path.
///
/// Versions are released quarterly and named `YYYY-MM`. The endpoint table
/// pins one version per endpoint family; the pins are configuration, not
/// something resolved at runtime.
///
/// # Example
///
/// ```rust
/// use storefront_catalog::ApiVersion;
///
/// assert_eq!(ApiVersion::V2023_07.to_string(), "2023-07");
///
/// let version: ApiVersion = "2025-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-07, used by the product and collection listings.
    V2023_07,
    /// API version 2023-10, used by the main-products endpoint.
    V2023_10,
    /// API version 2025-10, used by the collection-products endpoint.
    V2025_10,
    /// Any other `YYYY-MM` version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the versions the endpoint table pins, `false`
    /// for `Custom` values.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn as_str(&self) -> &str {
        match self {
            Self::V2023_07 => "2023-07",
            Self::V2023_10 => "2023-10",
            Self::V2025_10 => "2025-10",
            Self::Custom(version) => version,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    /// Parses a `YYYY-MM` version string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not
    /// four digits, a hyphen, and two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2023-07" => return Ok(Self::V2023_07),
            "2023-10" => return Ok(Self::V2023_10),
            "2025-10" => return Ok(Self::V2025_10),
            _ => {}
        }

        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Self::Custom(s.to_string()))
        } else {
            Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(ApiVersion::V2023_07.to_string(), "2023-07");
        assert_eq!(ApiVersion::V2023_10.to_string(), "2023-10");
        assert_eq!(ApiVersion::V2025_10.to_string(), "2025-10");
        assert_eq!(
            ApiVersion::Custom("2026-01".to_string()).to_string(),
            "2026-01"
        );
    }

    #[test]
    fn test_parse_pinned_versions() {
        assert_eq!("2023-07".parse::<ApiVersion>().unwrap(), ApiVersion::V2023_07);
        assert_eq!("2023-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2023_10);
        assert_eq!("2025-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_10);
    }

    #[test]
    fn test_parse_unknown_version_becomes_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_pinned());
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for bad in ["", "unstable", "2023", "2023-7", "23-07", "2023_07", "2023-ab"] {
            let result = bad.parse::<ApiVersion>();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_pinned_versions_report_pinned() {
        assert!(ApiVersion::V2023_07.is_pinned());
        assert!(ApiVersion::V2023_10.is_pinned());
        assert!(ApiVersion::V2025_10.is_pinned());
    }
}
