//! `assetref resolve` – run one reference through the resolver.

use anyhow::{Context, Result};
use assetref_core::{AssetResolver, RawReference};

use crate::cli::Mode;

/// Strings starting with `{` are read as a JSON reference object; anything
/// else is taken literally.
pub(crate) fn parse_reference(input: &str) -> Result<RawReference> {
    if input.trim_start().starts_with('{') {
        let value: serde_json::Value =
            serde_json::from_str(input).context("reference looks like JSON but does not parse")?;
        Ok(RawReference::from(&value))
    } else {
        Ok(RawReference::from(input))
    }
}

pub fn run_resolve(resolver: &AssetResolver, input: &str, mode: Mode, json: bool) -> Result<()> {
    let reference = parse_reference(input)?;
    tracing::debug!("resolving {:?} in {:?} mode", reference, mode);

    match mode {
        Mode::Simple => {
            let url = resolver.resolve(&reference);
            if json {
                println!("{}", serde_json::to_string(&url)?);
            } else {
                println!("{url}");
            }
        }
        Mode::Pair => {
            let pair = resolver.resolve_pair(&reference);
            if json {
                println!("{}", serde_json::to_string_pretty(&pair)?);
            } else {
                println!("{:<9} {}", "primary", pair.primary);
                println!("{:<9} {}", "fallback", pair.fallback);
            }
        }
        Mode::Candidates => {
            let candidates = resolver.resolve_candidates(&reference);
            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                for url in candidates {
                    println!("{url}");
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_reference() {
        assert_eq!(
            parse_reference("uploads/a.png").unwrap(),
            RawReference::Str("uploads/a.png".to_string())
        );
    }

    #[test]
    fn json_object_reference() {
        assert_eq!(
            parse_reference(r#"{"path":"Uploads\\x.jpg"}"#).unwrap(),
            RawReference::Object {
                url: None,
                path: Some("Uploads\\x.jpg".to_string())
            }
        );
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(parse_reference("{path:").is_err());
    }
}
