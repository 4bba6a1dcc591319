//! `assetref product` – listing image for a product record.

use anyhow::{Context, Result};
use assetref_core::{extract_product_image, AssetResolver, Product};
use std::fs;
use std::path::Path;

pub fn run_product(resolver: &AssetResolver, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let product: Product =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;

    let url = extract_product_image(resolver, &product);
    let name = product.name.as_deref().unwrap_or("-");
    if url.is_empty() {
        println!("{name}: (none)");
    } else {
        println!("{name}: {url}");
    }
    Ok(())
}
