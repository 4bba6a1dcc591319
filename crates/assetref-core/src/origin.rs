//! API / asset origin pair.
//!
//! The asset origin is never configured on its own: it is the API origin
//! with a trailing `/api` mount removed.

use crate::error::ConfigError;

const API_MOUNT: &str = "/api";

/// The two base URLs a relative media path can be served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPair {
    api: String,
    asset: String,
}

impl OriginPair {
    /// Builds the pair without validating `api_origin`.
    pub fn new(api_origin: &str) -> Self {
        let api = trim_origin(api_origin);
        let path_start = path_start(api);
        let asset = match strip_api_mount(&api[path_start..]) {
            Some(path) => trim_origin(&api[..path_start + path.len()]),
            None => api,
        };
        Self {
            api: api.to_string(),
            asset: asset.to_string(),
        }
    }

    /// Validates `api_origin` as an absolute http(s) URL and builds the pair.
    pub fn from_api_origin(api_origin: &str) -> Result<Self, ConfigError> {
        let trimmed = trim_origin(api_origin);
        let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidOrigin {
            value: api_origin.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    value: api_origin.to_string(),
                    scheme: other.to_string(),
                })
            }
        }

        let asset = match strip_api_mount(parsed.path().trim_end_matches('/')) {
            Some(path) => {
                let mut asset = parsed.clone();
                asset.set_path(path);
                asset.set_query(None);
                asset.set_fragment(None);
                trim_origin(asset.as_str()).to_string()
            }
            None => trimmed.to_string(),
        };
        let pair = Self {
            api: trimmed.to_string(),
            asset,
        };
        tracing::debug!(api = %pair.api, asset = %pair.asset, "derived origin pair");
        Ok(pair)
    }

    /// Origin that serves `/api`-mounted endpoints.
    pub fn api(&self) -> &str {
        &self.api
    }

    /// Bare static origin (API origin minus its `/api` mount).
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// True when both origins are the same string (no `/api` mount configured).
    pub fn is_single_origin(&self) -> bool {
        self.api == self.asset
    }
}

fn trim_origin(s: &str) -> &str {
    s.trim().trim_end_matches('/')
}

/// Byte offset where the path begins: after `scheme://authority`, or 0
/// for strings without a scheme.
fn path_start(origin: &str) -> usize {
    match origin.find("://") {
        Some(i) => {
            let authority = i + "://".len();
            origin[authority..]
                .find('/')
                .map_or(origin.len(), |j| authority + j)
        }
        None => 0,
    }
}

/// Path without its trailing `/api` (compared case-insensitively), or
/// `None` when the path does not end in that mount.
fn strip_api_mount(path: &str) -> Option<&str> {
    let len = path.len();
    if len >= API_MOUNT.len() && path.is_char_boundary(len - API_MOUNT.len()) {
        let (head, tail) = path.split_at(len - API_MOUNT.len());
        if tail.eq_ignore_ascii_case(API_MOUNT) {
            return Some(head);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_origin_drops_api_mount() {
        let pair = OriginPair::new("https://api.example.com/api");
        assert_eq!(pair.api(), "https://api.example.com/api");
        assert_eq!(pair.asset(), "https://api.example.com");
        assert!(!pair.is_single_origin());
    }

    #[test]
    fn api_mount_match_is_case_insensitive() {
        let pair = OriginPair::new("https://shop.example.com/API");
        assert_eq!(pair.asset(), "https://shop.example.com");
    }

    #[test]
    fn trailing_slashes_trimmed() {
        let pair = OriginPair::new("  https://shop.example.com/api//  ");
        assert_eq!(pair.api(), "https://shop.example.com/api");
        assert_eq!(pair.asset(), "https://shop.example.com");
    }

    #[test]
    fn no_mount_means_single_origin() {
        let pair = OriginPair::new("http://localhost:8000");
        assert_eq!(pair.api(), "http://localhost:8000");
        assert_eq!(pair.asset(), "http://localhost:8000");
        assert!(pair.is_single_origin());
    }

    #[test]
    fn only_suffix_is_stripped() {
        let pair = OriginPair::new("https://example.com/api/v2");
        assert_eq!(pair.asset(), "https://example.com/api/v2");
        let pair = OriginPair::new("https://example.com/myapi");
        assert_eq!(pair.asset(), "https://example.com/myapi");
    }

    #[test]
    fn host_named_api_is_not_a_mount() {
        for origin in ["http://api", "http://api/", "HTTP://API"] {
            let pair = OriginPair::new(origin);
            assert_eq!(pair.asset(), pair.api(), "{origin}");
            let pair = OriginPair::from_api_origin(origin).unwrap();
            assert_eq!(pair.asset(), pair.api(), "{origin}");
            assert!(pair.is_single_origin());
        }
    }

    #[test]
    fn host_named_api_with_mount() {
        let pair = OriginPair::from_api_origin("http://api:8080/api").unwrap();
        assert_eq!(pair.api(), "http://api:8080/api");
        assert_eq!(pair.asset(), "http://api:8080");
        let pair = OriginPair::new("http://api:8080/api");
        assert_eq!(pair.asset(), "http://api:8080");
    }

    #[test]
    fn nested_mount_keeps_prefix_path() {
        let pair = OriginPair::from_api_origin("https://example.com/shop/api/").unwrap();
        assert_eq!(pair.asset(), "https://example.com/shop");
    }

    #[test]
    fn validated_constructor_rejects_garbage() {
        assert!(matches!(
            OriginPair::from_api_origin("not a url"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            OriginPair::from_api_origin("ftp://example.com/api"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
        let pair = OriginPair::from_api_origin("https://api.example.com/api/").unwrap();
        assert_eq!(pair.asset(), "https://api.example.com");
    }
}
