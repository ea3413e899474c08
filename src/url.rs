//! Lexical URL stripping.
//!
//! Only enough of a URL is understood to isolate its hostname: scheme,
//! userinfo, path and query are cut off by plain substring search. Nothing
//! here validates URL syntax.

use std::borrow::Cow;

use crate::error::{DomainError, Result};

const SCHEME_DELIMITER: &str = "://";

/// Marker of a punycode-encoded label
const ACE_PREFIX: &str = "xn--";

/// Lowercase `raw` and strip scheme, userinfo, path and query.
///
/// Internationalized labels are left in their `xn--` form.
pub fn strip_url_parts(raw: &str) -> String {
    let url = raw.to_lowercase();
    let mut host = url.as_str();

    if let Some(index) = host.find(SCHEME_DELIMITER) {
        host = &host[index + SCHEME_DELIMITER.len()..];
    }

    if let Some(index) = host.find('@') {
        host = &host[index + 1..];
    }

    // Path takes the query with it
    if let Some(index) = host.find('/') {
        host = &host[..index];
    } else if let Some(index) = host.find('?') {
        host = &host[..index];
    }

    host.to_string()
}

/// Decode `xn--` labels of an already stripped hostname to Unicode.
///
/// Fails for the whole hostname if any label does not decode.
pub fn decode_labels(host: &str) -> Result<Cow<'_, str>> {
    if !host.contains(ACE_PREFIX) {
        return Ok(Cow::Borrowed(host));
    }

    let (decoded, result) = idna::domain_to_unicode(host);
    match result {
        Ok(()) => Ok(Cow::Owned(decoded)),
        Err(_) => {
            tracing::trace!(host, "failed to decode internationalized labels");
            Err(DomainError::IdnaDecode(host.to_string()))
        }
    }
}

/// Drop the single trailing dot of a fully qualified name.
///
/// A name ending in `..` is left alone; it has an empty label and is not a
/// valid hostname either way.
pub fn trim_root_dot(host: &str) -> &str {
    if host.ends_with("..") {
        return host;
    }
    host.strip_suffix('.').unwrap_or(host)
}

/// Reduce a URL to its bare lowercase hostname.
///
/// A single trailing dot is dropped. Returns an empty string when an
/// internationalized label cannot be decoded.
pub fn normalize(raw: &str) -> String {
    let host = strip_url_parts(raw);
    match decode_labels(&host) {
        Ok(decoded) => trim_root_dot(&decoded).to_string(),
        Err(_) => String::new(),
    }
}

/// Scheme of `url`, or an empty string if it has none.
pub fn protocol(url: &str) -> String {
    url.find(SCHEME_DELIMITER)
        .map(|index| url[..index].to_string())
        .unwrap_or_default()
}

/// Userinfo of `url` (text between the scheme and `@`), or an empty string.
pub fn credentials(url: &str) -> String {
    let Some(index) = url.find('@') else {
        return String::new();
    };

    let userinfo = &url[..index];
    match userinfo.find(SCHEME_DELIMITER) {
        Some(start) => userinfo[start + SCHEME_DELIMITER.len()..].to_string(),
        None => userinfo.to_string(),
    }
}

/// User name part of the credentials in `url`.
pub fn username(url: &str) -> String {
    let credentials = credentials(url);
    match credentials.split_once(':') {
        Some((user, _)) => user.to_string(),
        None => credentials,
    }
}

/// Password part of the credentials in `url`.
pub fn password(url: &str) -> String {
    credentials(url)
        .split_once(':')
        .map(|(_, password)| password.to_string())
        .unwrap_or_default()
}
