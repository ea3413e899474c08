//! Decomposition of a hostname around its public suffix.

use crate::error::{DomainError, Result};
use crate::host::validate_hostname;
use crate::suffix::{public_suffixes, SuffixTrie};
use crate::types::DomainParts;
use crate::url::{decode_labels, strip_url_parts, trim_root_dot};

/// Splits URLs into [`DomainParts`] against a suffix trie.
///
/// The parser only borrows the trie, so it is `Copy` and can be created per
/// call or shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct DomainParser<'a> {
    suffixes: &'a SuffixTrie,
}

impl Default for DomainParser<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl DomainParser<'static> {
    /// Parser backed by the embedded public suffix list
    pub fn global() -> Self {
        Self::new(public_suffixes())
    }
}

impl<'a> DomainParser<'a> {
    pub fn new(suffixes: &'a SuffixTrie) -> Self {
        Self { suffixes }
    }

    /// Decompose `url` into subdomain, prefix and public suffix.
    ///
    /// The hostname is validated after stripping scheme, userinfo, path and
    /// query, and before `xn--` labels are decoded. A single trailing dot is
    /// ignored.
    pub fn parse(&self, url: &str) -> Result<DomainParts> {
        let stripped = strip_url_parts(url);
        validate_hostname(&stripped).map_err(|kind| DomainError::InvalidHostname {
            kind,
            host: stripped.clone(),
        })?;

        let decoded = decode_labels(&stripped)?;
        let host = trim_root_dot(&decoded);

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 2 {
            return Err(DomainError::SingleLabel(host.to_string()));
        }

        let suffix_len = self.suffixes.longest_suffix(&labels);
        if suffix_len == 0 {
            tracing::trace!(host, "no public suffix");
            return Err(DomainError::NoPublicSuffix(host.to_string()));
        }
        if suffix_len == labels.len() {
            return Err(DomainError::NotRegistrable(host.to_string()));
        }

        let boundary = labels.len() - suffix_len;
        Ok(DomainParts {
            subdomain: labels[..boundary - 1].join("."),
            prefix: labels[boundary - 1].to_string(),
            suffix: labels[boundary..].join("."),
        })
    }

    pub fn domain(&self, url: &str) -> String {
        self.parse(url).map(|parts| parts.domain()).unwrap_or_default()
    }

    pub fn domain_prefix(&self, url: &str) -> String {
        self.parse(url).map(|parts| parts.prefix).unwrap_or_default()
    }

    pub fn domain_suffix(&self, url: &str) -> String {
        self.parse(url).map(|parts| parts.suffix).unwrap_or_default()
    }

    pub fn subdomain(&self, url: &str) -> String {
        self.parse(url).map(|parts| parts.subdomain).unwrap_or_default()
    }

    pub fn has_subdomain(&self, url: &str) -> bool {
        self.parse(url).is_ok_and(|parts| parts.has_subdomain())
    }

    /// Check whether the hostname has `quantity` labels beyond two.
    ///
    /// Counts every label of the hostname, so a multi-label suffix such as
    /// `co.uk` still only accounts for one of the two subtracted labels.
    pub fn has_subdomain_quantity(&self, url: &str, quantity: usize) -> bool {
        self.parse(url)
            .is_ok_and(|parts| parts.label_count() - 2 == quantity)
    }

    pub fn split_domain(&self, url: &str) -> Vec<String> {
        self.parse(url).map(|parts| parts.labels()).unwrap_or_default()
    }
}
