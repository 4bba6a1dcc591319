//! Whole-URI percent-encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when encoding a full URI: everything outside the URI
/// reserved set, unreserved marks, and alphanumerics. Non-ASCII is always
/// escaped by `percent_encoding`.
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes `uri` so a browser's location parser accepts it.
///
/// Reserved characters (`;,/?:@&=+$#`) pass through, so the URL keeps its
/// structure. Existing `%XX` escapes are left alone, making this idempotent;
/// a stray `%` becomes `%25`.
pub fn encode_uri(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    let mut rest = uri;
    while let Some(idx) = rest.find('%') {
        let (head, tail) = rest.split_at(idx);
        out.extend(utf8_percent_encode(head, URI));
        if is_escape(tail) {
            out.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            out.push_str("%25");
            rest = &tail[1..];
        }
    }
    out.extend(utf8_percent_encode(rest, URI));
    out
}

/// `s` starts with `%` followed by two hex digits.
fn is_escape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 3 && b[0] == b'%' && b[1].is_ascii_hexdigit() && b[2].is_ascii_hexdigit()
}
