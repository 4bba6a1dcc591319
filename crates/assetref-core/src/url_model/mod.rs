//! Path canonicalization and URI encoding.
//!
//! Turns a sanitized reference into either an absolute pass-through URL or a
//! canonical origin-relative path that can be joined onto an origin.

mod canonical;
mod encode;

pub use canonical::{canonicalize, is_absolute_http};
pub use encode::encode_uri;

pub(crate) use canonical::starts_with_ignore_case;

/// A sanitized reference after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalRef {
    /// Already `http(s)://`; kept as-is apart from encoding.
    Absolute(String),
    /// No leading `/`, no `//`, no redundant `api/` mount.
    Relative(String),
}

/// Classifies a sanitized reference. Returns `None` for anything that does
/// not leave a usable path (empty input, only slashes, a bare `api/`).
pub fn classify(sanitized: &str) -> Option<CanonicalRef> {
    if sanitized.is_empty() {
        return None;
    }
    if is_absolute_http(sanitized) {
        return Some(CanonicalRef::Absolute(sanitized.to_string()));
    }
    let path = canonicalize(sanitized);
    if path.is_empty() {
        None
    } else {
        Some(CanonicalRef::Relative(path))
    }
}
