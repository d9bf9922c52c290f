//! Strict RFC 3986 percent-encoding as mandated by OAuth 1.0a.

use percent_encoding::{percent_encode as encode_set, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the RFC 3986 unreserved set
/// (ALPHA / DIGIT / `-` / `.` / `_` / `~`) is encoded.
///
/// This is stricter than form encoding: space becomes `%20`, never `+`,
/// and `~` stays as-is.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with the strict OAuth 1.0a set.
///
/// Total over any input; unreserved characters pass through unchanged,
/// every other byte becomes uppercase `%XX`.
pub fn percent_encode(raw: &str) -> String {
    utf8_percent_encode(raw, STRICT_ENCODE_SET).to_string()
}

/// Percent-encode an arbitrary byte string with the strict OAuth 1.0a set.
pub fn percent_encode_bytes(raw: &[u8]) -> String {
    encode_set(raw, STRICT_ENCODE_SET).to_string()
}
