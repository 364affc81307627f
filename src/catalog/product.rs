//! The normalized product shape and its normalizer.
//!
//! [`Product`] is the stable contract this layer exposes to the UI. It is
//! derived from an upstream [`ProductRecord`] by direct field copies plus
//! three derivations that always read the *first* element of the
//! upstream's `variants` and `images` arrays. Nothing else crosses the
//! boundary: vendor, status, timestamps and other upstream-only fields
//! stay on the wire side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::records::{ProductRecord, Tags};

/// A product in the internal, UI-facing shape.
///
/// Field-by-field provenance:
///
/// | field       | source                                   |
/// |-------------|------------------------------------------|
/// | `id`        | upstream product `id`                    |
/// | `gql_id`    | `variants[0].admin_graphql_api_id`       |
/// | `title`     | upstream `title`                         |
/// | `description` | upstream `body_html` (HTML, unsanitized at this layer) |
/// | `price`     | `variants[0].price`, the upstream decimal string unchanged |
/// | `image`     | `images[0].src`                          |
/// | `quantity`  | `variants[0].inventory_quantity`         |
/// | `handle`    | upstream `handle`                        |
/// | `tags`      | upstream `tags`, passed through          |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Opaque product identifier.
    pub id: u64,
    /// Admin GraphQL identifier of the first variant.
    pub gql_id: String,
    /// The product title.
    pub title: String,
    /// HTML description; sanitization is the consumer's concern.
    pub description: String,
    /// Decimal price string, no rounding or currency conversion.
    pub price: String,
    /// Source URL of the first image.
    pub image: String,
    /// Units in stock for the first variant.
    pub quantity: i64,
    /// URL-safe slug.
    pub handle: String,
    /// Tags, in whichever form the upstream sent them.
    pub tags: Tags,
}

impl Product {
    /// Normalizes one upstream record.
    ///
    /// Pure: the same record always yields the same `Product`. No
    /// validation beyond presence of the first variant and image, no
    /// rounding, no currency conversion.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] if the record's `variants` or `images`
    /// array is empty, since the derived fields have nowhere to come
    /// from.
    pub fn from_record(record: &ProductRecord) -> Result<Self, NormalizeError> {
        let variant = record
            .variants
            .first()
            .ok_or(NormalizeError::MissingVariants { id: record.id })?;
        let image = record
            .images
            .first()
            .ok_or(NormalizeError::MissingImages { id: record.id })?;

        Ok(Self {
            id: record.id,
            gql_id: variant.admin_graphql_api_id.clone(),
            title: record.title.clone(),
            description: record.body_html.clone(),
            price: variant.price.clone(),
            image: image.src.clone(),
            quantity: variant.inventory_quantity,
            handle: record.handle.clone(),
            tags: record.tags.clone(),
        })
    }
}

impl TryFrom<&ProductRecord> for Product {
    type Error = NormalizeError;

    fn try_from(record: &ProductRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

/// Errors raised while normalizing an upstream product record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record has no variants, so price, quantity and the GraphQL id
    /// cannot be derived.
    #[error("Product {id} has no variants; cannot derive price, quantity, or gql_id.")]
    MissingVariants {
        /// The upstream id of the unnormalizable record.
        id: u64,
    },

    /// The record has no images, so the image URL cannot be derived.
    #[error("Product {id} has no images; cannot derive an image URL.")]
    MissingImages {
        /// The upstream id of the unnormalizable record.
        id: u64,
    },
}
