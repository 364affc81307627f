//! The internal collection shape.

use serde::{Deserialize, Serialize};

use crate::catalog::records::SmartCollectionRecord;

/// A collection in the internal, UI-facing shape.
///
/// A strict subset of the upstream smart-collection record: identifier,
/// display title, and the URL-safe handle the storefront routes on.
/// Rules, sort order and the rest of the upstream record stay behind the
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Opaque collection identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// URL-safe slug, matched case-sensitively against category path
    /// segments.
    pub handle: String,
}

impl Collection {
    /// Projects an upstream record down to the internal shape.
    #[must_use]
    pub fn from_record(record: &SmartCollectionRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            handle: record.handle.clone(),
        }
    }
}

impl From<&SmartCollectionRecord> for Collection {
    fn from(record: &SmartCollectionRecord) -> Self {
        Self::from_record(record)
    }
}
