//! Origin-relative path canonicalization.

const API_SEGMENT: &str = "api/";

/// True if `s` starts with `http://` or `https://` (scheme case-insensitive).
pub fn is_absolute_http(s: &str) -> bool {
    starts_with_ignore_case(s, "http://") || starts_with_ignore_case(s, "https://")
}

/// Canonicalizes an origin-relative path.
///
/// - Strips every leading `/`
/// - Strips one leading `api/` (case-insensitive)
/// - Collapses runs of `/` into one
///
/// Callers handle absolute URLs and empty input before getting here. The
/// result may be empty, which means the reference is unresolvable.
pub fn canonicalize(path: &str) -> String {
    let path = path.trim_start_matches('/');
    let path = if starts_with_ignore_case(path, API_SEGMENT) {
        &path[API_SEGMENT.len()..]
    } else {
        path
    };
    collapse_slashes(path)
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    // "api//x" only loses "api/" above; the remaining leading slash goes here.
    match out.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

pub(crate) fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
