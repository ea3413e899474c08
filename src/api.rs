//! Free functions over the embedded public suffix list.
//!
//! None of these fail: an unusable input yields an empty string, an empty
//! vector or `false`. Use [`parse_domain`] to see why a URL was rejected.

use crate::domain::DomainParser;
use crate::error::Result;
use crate::types::DomainParts;

/// Decompose `url` with the embedded public suffix list.
pub fn parse_domain(url: &str) -> Result<DomainParts> {
    DomainParser::global().parse(url)
}

/// Registrable domain of `url` (`keep.google.com` -> `google.com`).
pub fn domain(url: &str) -> String {
    DomainParser::global().domain(url)
}

/// Label left of the public suffix (`keep.google.co.uk` -> `google`).
pub fn domain_prefix(url: &str) -> String {
    DomainParser::global().domain_prefix(url)
}

/// Public suffix of `url` (`keep.google.co.uk` -> `co.uk`).
pub fn domain_suffix(url: &str) -> String {
    DomainParser::global().domain_suffix(url)
}

/// Everything left of the registrable domain (`a.b.google.com` -> `a.b`).
pub fn subdomain(url: &str) -> String {
    DomainParser::global().subdomain(url)
}

/// True when `url` has labels left of its registrable domain.
pub fn has_subdomain(url: &str) -> bool {
    DomainParser::global().has_subdomain(url)
}

/// See [`DomainParser::has_subdomain_quantity`].
pub fn has_subdomain_quantity(url: &str, quantity: usize) -> bool {
    DomainParser::global().has_subdomain_quantity(url, quantity)
}

/// Hostname labels with the public suffix kept as one element
/// (`www.google.co.uk` -> `["www", "google", "co.uk"]`).
pub fn split_domain(url: &str) -> Vec<String> {
    DomainParser::global().split_domain(url)
}
