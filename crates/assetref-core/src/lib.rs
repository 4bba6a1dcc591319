//! Resolution of backend media references into URLs a browser can load.
//!
//! ```
//! use assetref_core::{AssetResolver, OriginPair, RawReference};
//!
//! let resolver = AssetResolver::new(OriginPair::new("https://api.example.com/api"));
//! let url = resolver.resolve(&RawReference::from("/uploads/shoe.png"));
//! assert_eq!(url, "https://api.example.com/uploads/shoe.png");
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub mod origin;
pub mod product;
pub mod reference;
pub mod resolver;
pub mod url_model;

pub use error::ConfigError;
pub use origin::OriginPair;
pub use product::{extract_media, extract_product_image, MediaRecord, Product, ProductVariant};
pub use reference::RawReference;
pub use resolver::{AssetResolver, ResolvedPair};
