//! Reference sanitization.

use super::RawReference;

/// Reduces a raw reference to a trimmed, forward-slash string.
///
/// - Objects use `url` when non-empty, else `path`
/// - Surrounding whitespace is trimmed
/// - `"null"` / `"undefined"` (any case) count as absent
/// - Backslashes become forward slashes
///
/// The empty string means "no reference".
pub fn sanitize(reference: &RawReference) -> String {
    let raw = match reference {
        RawReference::Absent => return String::new(),
        RawReference::Str(s) => s.as_str(),
        RawReference::Object { url, path } => url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(path.as_deref())
            .unwrap_or(""),
    };

    let trimmed = raw.trim();
    if is_placeholder(trimmed) {
        return String::new();
    }
    trimmed.replace('\\', "/")
}

/// Upstream serializers sometimes stringify missing values.
fn is_placeholder(s: &str) -> bool {
    s.eq_ignore_ascii_case("null") || s.eq_ignore_ascii_case("undefined")
}
