//! Origin selection and candidate building.
//!
//! Uploaded media has been served from the bare static origin on some
//! deployments and from the API origin on others. Paths under `uploads/`
//! try the asset origin first; everything else tries the API origin first.
//! The three modes differ only in how many of those guesses they return.

use serde::Serialize;

use crate::origin::OriginPair;
use crate::reference::{sanitize, RawReference};
use crate::url_model::{classify, encode_uri, CanonicalRef};

const UPLOADS_SEGMENT: &str = "uploads/";

/// Primary URL plus the URL to retry with if the primary fails to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPair {
    pub primary: String,
    /// Empty for absolute references and unresolvable ones.
    pub fallback: String,
}

/// Resolves media references against a fixed [`OriginPair`].
#[derive(Debug, Clone)]
pub struct AssetResolver {
    origins: OriginPair,
}

impl AssetResolver {
    pub fn new(origins: OriginPair) -> Self {
        Self { origins }
    }

    pub fn origins(&self) -> &OriginPair {
        &self.origins
    }

    /// Single best-guess URL, or `""` if the reference does not resolve.
    pub fn resolve(&self, reference: &RawReference) -> String {
        match self.canonical(reference) {
            None => String::new(),
            Some(CanonicalRef::Absolute(url)) => encode_uri(&url),
            Some(CanonicalRef::Relative(path)) => {
                let (preferred, _) = self.ordered_origins(&path);
                join(preferred, &path)
            }
        }
    }

    /// Preferred-origin URL and the other-origin URL for the same path.
    pub fn resolve_pair(&self, reference: &RawReference) -> ResolvedPair {
        match self.canonical(reference) {
            None => ResolvedPair::default(),
            Some(CanonicalRef::Absolute(url)) => ResolvedPair {
                primary: encode_uri(&url),
                fallback: String::new(),
            },
            Some(CanonicalRef::Relative(path)) => {
                let (preferred, other) = self.ordered_origins(&path);
                ResolvedPair {
                    primary: join(preferred, &path),
                    fallback: join(other, &path),
                }
            }
        }
    }

    /// Every candidate in retry order: preferred origin, other origin, then
    /// root-relative for same-origin deployments. No duplicates.
    pub fn resolve_candidates(&self, reference: &RawReference) -> Vec<String> {
        match self.canonical(reference) {
            None => Vec::new(),
            Some(CanonicalRef::Absolute(url)) => vec![encode_uri(&url)],
            Some(CanonicalRef::Relative(path)) => {
                let (preferred, other) = self.ordered_origins(&path);
                let all = [
                    join(preferred, &path),
                    join(other, &path),
                    encode_uri(&format!("/{path}")),
                ];
                let mut out: Vec<String> = Vec::with_capacity(all.len());
                for url in all {
                    if !out.contains(&url) {
                        out.push(url);
                    }
                }
                out
            }
        }
    }

    fn canonical(&self, reference: &RawReference) -> Option<CanonicalRef> {
        classify(&sanitize(reference))
    }

    /// (preferred, other) origins for a canonical relative path.
    fn ordered_origins(&self, path: &str) -> (&str, &str) {
        let api = self.origins.api();
        let asset = self.origins.asset();
        if prefers_asset_origin(path) {
            tracing::trace!(path, origin = asset, "uploads path, asset origin first");
            (asset, api)
        } else {
            tracing::trace!(path, origin = api, "api origin first");
            (api, asset)
        }
    }
}

/// `uploads/` as the first segment, compared case-insensitively like the
/// `api/` strip during canonicalization.
fn prefers_asset_origin(path: &str) -> bool {
    crate::url_model::starts_with_ignore_case(path, UPLOADS_SEGMENT)
}

fn join(origin: &str, path: &str) -> String {
    encode_uri(&format!("{origin}/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AssetResolver {
        AssetResolver::new(OriginPair::new("https://api.example.com/api"))
    }

    fn r(s: &str) -> RawReference {
        RawReference::from(s)
    }

    #[test]
    fn uploads_prefers_asset_origin() {
        let pair = resolver().resolve_pair(&r("uploads/a/b.jpg"));
        assert_eq!(pair.primary, "https://api.example.com/uploads/a/b.jpg");
        assert_eq!(pair.fallback, "https://api.example.com/api/uploads/a/b.jpg");
    }

    #[test]
    fn other_paths_prefer_api_origin() {
        let pair = resolver().resolve_pair(&r("products/x.png"));
        assert_eq!(pair.primary, "https://api.example.com/api/products/x.png");
        assert_eq!(pair.fallback, "https://api.example.com/products/x.png");
    }

    #[test]
    fn uploads_check_ignores_case() {
        assert_eq!(
            resolver().resolve(&r("UPLOADS/a.png")),
            "https://api.example.com/UPLOADS/a.png"
        );
    }

    #[test]
    fn uploads_must_be_a_whole_segment() {
        assert_eq!(
            resolver().resolve(&r("uploadsX/a.png")),
            "https://api.example.com/api/uploadsX/a.png"
        );
    }

    #[test]
    fn api_prefixed_path_is_not_doubled() {
        assert_eq!(
            resolver().resolve(&r("/api/products/x.png")),
            "https://api.example.com/api/products/x.png"
        );
    }

    #[test]
    fn absolute_passes_through_encoded() {
        let res = resolver();
        let abs = r("https://cdn.example.com/a b.png");
        assert_eq!(res.resolve(&abs), "https://cdn.example.com/a%20b.png");
        let pair = res.resolve_pair(&abs);
        assert_eq!(pair.primary, "https://cdn.example.com/a%20b.png");
        assert_eq!(pair.fallback, "");
        assert_eq!(
            res.resolve_candidates(&abs),
            vec!["https://cdn.example.com/a%20b.png".to_string()]
        );
    }

    #[test]
    fn relative_paths_are_encoded() {
        assert_eq!(
            resolver().resolve(&r("uploads/my file.png")),
            "https://api.example.com/uploads/my%20file.png"
        );
    }

    #[test]
    fn candidates_order() {
        assert_eq!(
            resolver().resolve_candidates(&r("uploads/a.png")),
            vec![
                "https://api.example.com/uploads/a.png".to_string(),
                "https://api.example.com/api/uploads/a.png".to_string(),
                "/uploads/a.png".to_string(),
            ]
        );
    }

    #[test]
    fn candidates_deduplicated_for_single_origin() {
        let res = AssetResolver::new(OriginPair::new("https://shop.example.com"));
        assert_eq!(
            res.resolve_candidates(&r("products/x.png")),
            vec![
                "https://shop.example.com/products/x.png".to_string(),
                "/products/x.png".to_string(),
            ]
        );
    }

    #[test]
    fn empty_origin_collapses_to_root_relative() {
        let res = AssetResolver::new(OriginPair::new(""));
        assert_eq!(res.resolve(&r("uploads/a.png")), "/uploads/a.png");
        assert_eq!(
            res.resolve_candidates(&r("uploads/a.png")),
            vec!["/uploads/a.png".to_string()]
        );
    }

    #[test]
    fn unresolvable_is_empty_everywhere() {
        let res = resolver();
        for input in [
            RawReference::Absent,
            r(""),
            r("null"),
            r("undefined"),
            r("///"),
            r("/api/"),
        ] {
            assert_eq!(res.resolve(&input), "", "{input:?}");
            assert_eq!(res.resolve_pair(&input), ResolvedPair::default(), "{input:?}");
            assert!(res.resolve_candidates(&input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssetResolver>();
    }
}
