//! `assetref origins` – show the origin pair in effect.

use anyhow::Result;
use assetref_core::AssetResolver;

pub fn run_origins(resolver: &AssetResolver) -> Result<()> {
    let origins = resolver.origins();
    println!("{:<8} {}", "api", origins.api());
    println!("{:<8} {}", "asset", origins.asset());
    if origins.is_single_origin() {
        println!("(single origin: no /api mount configured)");
    }
    Ok(())
}
