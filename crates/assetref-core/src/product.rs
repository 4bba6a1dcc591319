//! Product records and representative-image extraction.
//!
//! Listing UIs want *some* image for a product, and no single field is
//! guaranteed to be populated. Each record type lists its media fields in
//! priority order; the first one that resolves wins.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::reference::RawReference;
use crate::resolver::AssetResolver;

/// A record that carries media references in a fixed priority order.
pub trait MediaRecord {
    fn media_references(&self) -> Vec<&RawReference>;
}

/// Product as returned by the REST API (media-relevant fields only).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    /// Display name when the API sends a plain string; localized maps and
    /// other shapes are dropped.
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub image: RawReference,
    #[serde(default, alias = "metaImage")]
    pub meta_image: RawReference,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub variants: Vec<ProductVariant>,
}

/// Variant of a [`Product`]. Older records use `image` for the primary
/// image, newer ones `main_image`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductVariant {
    #[serde(default, alias = "mainImage")]
    pub main_image: RawReference,
    #[serde(default)]
    pub image: RawReference,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub images: Vec<RawReference>,
}

impl MediaRecord for Product {
    /// Product image, meta image, then the first variant's main image,
    /// legacy image and first gallery image.
    fn media_references(&self) -> Vec<&RawReference> {
        let mut refs = vec![&self.image, &self.meta_image];
        if let Some(variant) = self.variants.first() {
            refs.push(&variant.main_image);
            refs.push(&variant.image);
            if let Some(first) = variant.images.first() {
                refs.push(first);
            }
        }
        refs
    }
}

/// First reference of `record` that resolves to a URL, or `""`.
pub fn extract_media<M: MediaRecord + ?Sized>(resolver: &AssetResolver, record: &M) -> String {
    record
        .media_references()
        .into_iter()
        .map(|r| resolver.resolve(r))
        .find(|url| !url.is_empty())
        .unwrap_or_default()
}

/// Representative image URL for a product listing, or `""` if none resolves.
pub fn extract_product_image(resolver: &AssetResolver, product: &Product) -> String {
    extract_media(resolver, product)
}

/// Arrays keep their positions (an unreadable element becomes
/// `T::default()`); any other JSON value becomes an empty list.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
