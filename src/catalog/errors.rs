//! Error types for the catalog accessors.

use thiserror::Error;

use crate::catalog::product::NormalizeError;
use crate::clients::FetchError;

/// Errors a strict (`try_*`) catalog operation can return.
///
/// The lenient operations collapse all of these into a logged `None`; the
/// strict tier keeps them apart so callers can tell "the network is down"
/// from "the upstream answered with something else".
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fetch itself failed: transport error or a non-JSON body.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The body was JSON but had no envelope field where the records
    /// should be.
    ///
    /// This is also how upstream *error* responses surface, since the
    /// executor never inspects the HTTP status: a `{"errors": ...}` body
    /// simply has no `products` key.
    #[error("Response body has no '{key}' field.")]
    MissingKey {
        /// The expected envelope field.
        key: &'static str,
    },

    /// The envelope field was present but its records did not match the
    /// upstream schema.
    #[error("Unexpected shape under '{key}': {source}")]
    UnexpectedShape {
        /// The envelope field that held the malformed records.
        key: &'static str,
        /// The underlying decode failure.
        source: serde_json::Error,
    },

    /// A fetched record could not be normalized.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
