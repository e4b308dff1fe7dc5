//! Canonical request construction for AWS Signature Version 4.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```

use std::collections::BTreeMap;

use http::HeaderMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters is encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The header block of a canonical request together with its name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaders {
    /// `name:value` lines joined by `\n`, without a trailing newline.
    pub canonical: String,
    /// Sorted lowercase names joined by `;`.
    pub signed: String,
}

/// Assemble the canonical request from already-canonical parts.
#[must_use]
pub fn build_canonical_request(
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    headers: &CanonicalHeaders,
    payload_hash: &str,
) -> String {
    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{}\n\n{}\n{payload_hash}",
        headers.canonical, headers.signed
    )
}

/// URI-encode each path segment, keeping the `/` separators.
///
/// Segments are decoded first so an already-encoded path is not encoded twice.
///
/// ```
/// use dynamite_auth::canonical::build_canonical_uri;
///
/// assert_eq!(build_canonical_uri(""), "/");
/// assert_eq!(build_canonical_uri("/a b/c"), "/a%20b/c");
/// ```
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| uri_encode(&percent_decode_str(segment).decode_utf8_lossy()))
        .collect::<Vec<_>>()
        .join("/")
}

/// Sort query parameters by name, then value, with both sides encoded.
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    let mut params: Vec<(String, String)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| {
            let (k, v) = param.split_once('=').unwrap_or((param, ""));
            (normalize_component(k), normalize_component(v))
        })
        .collect();
    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonicalize the headers named in `signed`, or every header when `signed` is `None`.
///
/// `authorization` is never signed. Values are trimmed, inner whitespace runs
/// collapse to one space and repeated headers are joined with commas.
#[must_use]
pub fn build_canonical_headers(headers: &HeaderMap, signed: Option<&[&str]>) -> CanonicalHeaders {
    let mut map: BTreeMap<&str, String> = BTreeMap::new();
    for (name, value) in headers {
        let name = name.as_str();
        if name == http::header::AUTHORIZATION.as_str() {
            continue;
        }
        if let Some(wanted) = signed {
            if !wanted.contains(&name) {
                continue;
            }
        }
        let value = collapse_whitespace(String::from_utf8_lossy(value.as_bytes()).trim());
        map.entry(name)
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    let canonical = map
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join("\n");
    let signed = map.keys().copied().collect::<Vec<_>>().join(";");

    CanonicalHeaders { canonical, signed }
}

fn normalize_component(raw: &str) -> String {
    uri_encode(&percent_decode_str(raw).decode_utf8_lossy())
}

fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}
