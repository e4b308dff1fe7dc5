//! AWS Signature Version 4.
//!
//! [`sign_request`] is the client side: it stamps `host`, `x-amz-date` and
//! the session token onto a request, signs every header and writes the
//! `Authorization` header. [`verify_request`] recomputes a signature from the
//! receiving side and is used by the stub servers in the test suites.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use http::HeaderValue;
use http::header::{AUTHORIZATION, HOST};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{
    CanonicalHeaders, build_canonical_headers, build_canonical_query_string,
    build_canonical_request, build_canonical_uri,
};
use crate::credentials::Credentials;
use crate::error::AuthError;

/// The only algorithm this crate signs or verifies.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Timestamp header in `YYYYMMDD'T'HHMMSS'Z'` form.
pub const X_AMZ_DATE: &str = "x-amz-date";

/// Session token header for temporary credentials.
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

const LONG_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const SHORT_DATE_FORMAT: &str = "%Y%m%d";

type HmacSha256 = Hmac<Sha256>;

/// Scope and time for one signature.
#[derive(Debug, Clone, Copy)]
pub struct SigningParams<'a> {
    /// Credentials to sign with.
    pub credentials: &'a Credentials,
    /// Region in the credential scope, e.g. `us-east-1`.
    pub region: &'a str,
    /// Service in the credential scope, e.g. `dynamodb`.
    pub service: &'a str,
    /// Signing time. Also written to `x-amz-date`.
    pub time: DateTime<Utc>,
}

/// Sign `request` in place.
///
/// # Errors
///
/// Returns [`AuthError::MissingHost`] if the URI has no authority and no
/// `host` header is set, or [`AuthError::InvalidHeaderValue`] if a computed
/// value cannot be carried in a header.
pub fn sign_request(
    request: &mut http::Request<Bytes>,
    params: &SigningParams<'_>,
) -> Result<(), AuthError> {
    let amz_date = params.time.format(LONG_DATE_FORMAT).to_string();
    let short_date = params.time.format(SHORT_DATE_FORMAT).to_string();

    if !request.headers().contains_key(HOST) {
        let host = host_header_value(request.uri())?;
        request.headers_mut().insert(
            HOST,
            HeaderValue::from_str(&host).map_err(|_| AuthError::InvalidHeaderValue("host"))?,
        );
    }
    request.headers_mut().insert(
        X_AMZ_DATE,
        HeaderValue::from_str(&amz_date).map_err(|_| AuthError::InvalidHeaderValue(X_AMZ_DATE))?,
    );
    request.headers_mut().remove(X_AMZ_SECURITY_TOKEN);
    if let Some(token) = &params.credentials.session_token {
        let mut value = HeaderValue::from_str(token)
            .map_err(|_| AuthError::InvalidHeaderValue(X_AMZ_SECURITY_TOKEN))?;
        value.set_sensitive(true);
        request.headers_mut().insert(X_AMZ_SECURITY_TOKEN, value);
    }
    request.headers_mut().remove(AUTHORIZATION);

    let headers = build_canonical_headers(request.headers(), None);
    let canonical_request = build_canonical_request(
        request.method().as_str(),
        &build_canonical_uri(request.uri().path()),
        &build_canonical_query_string(request.uri().query().unwrap_or_default()),
        &headers,
        &hash_payload(request.body()),
    );

    let scope = credential_scope(&short_date, params.region, params.service);
    let string_to_sign = build_string_to_sign(
        &amz_date,
        &scope,
        &hash_payload(canonical_request.as_bytes()),
    );
    let signing_key = derive_signing_key(
        &params.credentials.secret_access_key,
        &short_date,
        params.region,
        params.service,
    );
    let signature = compute_signature(&signing_key, &string_to_sign);

    debug!(
        method = %request.method(),
        signed_headers = %headers.signed,
        scope = %scope,
        "signed request"
    );

    let authorization = authorization_header(
        &params.credentials.access_key_id,
        &scope,
        &headers,
        &signature,
    );
    let mut value = HeaderValue::from_str(&authorization)
        .map_err(|_| AuthError::InvalidHeaderValue("authorization"))?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

/// `AWS4-HMAC-SHA256\n<timestamp>\n<scope>\n<hex(sha256(canonical request))>`.
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// `<date>/<region>/<service>/aws4_request`.
#[must_use]
pub fn credential_scope(short_date: &str, region: &str, service: &str) -> String {
    format!("{short_date}/{region}/{service}/aws4_request")
}

/// Derive the signing key through the HMAC-SHA256 chain.
///
/// ```text
/// DateKey              = HMAC("AWS4" + secret, date)
/// DateRegionKey        = HMAC(DateKey, region)
/// DateRegionServiceKey = HMAC(DateRegionKey, service)
/// SigningKey           = HMAC(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let date_region_key = hmac_sha256(&date_key, region.as_bytes());
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes());
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex-encoded HMAC-SHA256 of `data`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Hex-encoded SHA-256 of `payload`.
///
/// ```
/// use dynamite_auth::sigv4::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Parsed `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAuthorization {
    /// Access key id from the credential.
    pub access_key_id: String,
    /// `YYYYMMDD` from the credential scope.
    pub date: String,
    /// Region from the credential scope.
    pub region: String,
    /// Service from the credential scope.
    pub service: String,
    /// Lowercase signed header names, in header order.
    pub signed_headers: Vec<String>,
    /// Hex signature.
    pub signature: String,
}

/// Parse an `AWS4-HMAC-SHA256 Credential=..., SignedHeaders=..., Signature=...` value.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedAlgorithm`] for other algorithms and
/// [`AuthError::InvalidAuthHeader`] for anything malformed.
pub fn parse_authorization_header(header: &str) -> Result<ParsedAuthorization, AuthError> {
    let (algorithm, rest) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::InvalidAuthHeader)?;
    if algorithm != ALGORITHM {
        return Err(AuthError::UnsupportedAlgorithm(algorithm.to_owned()));
    }

    let mut credential = None;
    let mut signed_headers = None;
    let mut signature = None;
    for part in rest.split(',') {
        match part.trim().split_once('=') {
            Some(("Credential", v)) => credential = Some(v),
            Some(("SignedHeaders", v)) => signed_headers = Some(v),
            Some(("Signature", v)) => signature = Some(v),
            _ => {}
        }
    }

    let credential = credential.ok_or(AuthError::InvalidAuthHeader)?;
    let [access_key_id, date, region, service, terminator] = credential
        .split('/')
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| AuthError::InvalidAuthHeader)?;
    if terminator != "aws4_request" {
        return Err(AuthError::InvalidAuthHeader);
    }

    Ok(ParsedAuthorization {
        access_key_id: access_key_id.to_owned(),
        date: date.to_owned(),
        region: region.to_owned(),
        service: service.to_owned(),
        signed_headers: signed_headers
            .ok_or(AuthError::InvalidAuthHeader)?
            .split(';')
            .map(str::to_owned)
            .collect(),
        signature: signature.ok_or(AuthError::InvalidAuthHeader)?.to_owned(),
    })
}

/// Recompute the signature of a received request and compare it in constant time.
///
/// `secret_for` maps an access key id to its secret.
///
/// # Errors
///
/// Returns [`AuthError::SignatureDoesNotMatch`] on mismatch, or the parse
/// errors of [`parse_authorization_header`].
pub fn verify_request(
    parts: &http::request::Parts,
    body: &[u8],
    secret_for: impl Fn(&str) -> Option<String>,
) -> Result<ParsedAuthorization, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;
    let parsed = parse_authorization_header(header)?;

    let amz_date = parts
        .headers
        .get(X_AMZ_DATE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader(X_AMZ_DATE.to_owned()))?;
    for name in &parsed.signed_headers {
        if !parts.headers.contains_key(name.as_str()) {
            return Err(AuthError::MissingHeader(name.clone()));
        }
    }
    let secret = secret_for(&parsed.access_key_id).ok_or(AuthError::SignatureDoesNotMatch)?;

    let names: Vec<&str> = parsed.signed_headers.iter().map(String::as_str).collect();
    let headers = build_canonical_headers(&parts.headers, Some(&names));
    let canonical_request = build_canonical_request(
        parts.method.as_str(),
        &build_canonical_uri(parts.uri.path()),
        &build_canonical_query_string(parts.uri.query().unwrap_or_default()),
        &headers,
        &hash_payload(body),
    );
    let scope = credential_scope(&parsed.date, &parsed.region, &parsed.service);
    let string_to_sign = build_string_to_sign(
        amz_date,
        &scope,
        &hash_payload(canonical_request.as_bytes()),
    );
    let key = derive_signing_key(&secret, &parsed.date, &parsed.region, &parsed.service);
    let expected = compute_signature(&key, &string_to_sign);

    if bool::from(expected.as_bytes().ct_eq(parsed.signature.as_bytes())) {
        Ok(parsed)
    } else {
        debug!(access_key_id = %parsed.access_key_id, "signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

fn authorization_header(
    access_key_id: &str,
    scope: &str,
    headers: &CanonicalHeaders,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={}, Signature={signature}",
        headers.signed
    )
}

/// The `host` header for a URI, omitting the scheme's default port.
fn host_header_value(uri: &http::Uri) -> Result<String, AuthError> {
    let host = uri.host().ok_or(AuthError::MissingHost)?;
    let default_port = match uri.scheme_str() {
        Some("https") => Some(443),
        Some("http") => Some(80),
        _ => None,
    };
    Ok(match uri.port_u16() {
        Some(port) if Some(port) != default_port => format!("{host}:{port}"),
        _ => host.to_owned(),
    })
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
