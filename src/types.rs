#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hostname split around its public suffix.
///
/// For `beta.gama.google.co.uk` this is subdomain `beta.gama`, prefix
/// `google` and suffix `co.uk`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainParts {
    /// Labels left of the registrable domain, dot-joined (may be empty)
    pub subdomain: String,
    /// Label immediately left of the suffix
    pub prefix: String,
    /// Public suffix as matched in the suffix list (e.g. `co.uk`)
    pub suffix: String,
}

impl DomainParts {
    pub fn new(
        subdomain: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Registrable domain: prefix and suffix, or empty if there is none
    pub fn domain(&self) -> String {
        if self.prefix.is_empty() || self.suffix.is_empty() {
            return String::new();
        }
        format!("{}.{}", self.prefix, self.suffix)
    }

    /// Full hostname the parts were taken from (without trailing dot)
    pub fn host(&self) -> String {
        let domain = self.domain();
        if self.subdomain.is_empty() || domain.is_empty() {
            return domain;
        }
        format!("{}.{}", self.subdomain, domain)
    }

    pub fn has_subdomain(&self) -> bool {
        !self.subdomain.is_empty() && !self.domain().is_empty()
    }

    /// Number of labels in the full hostname
    pub fn label_count(&self) -> usize {
        if self.prefix.is_empty() {
            return 0;
        }
        let count = |s: &str| if s.is_empty() { 0 } else { s.split('.').count() };
        count(&self.subdomain) + 1 + count(&self.suffix)
    }

    /// Labels in order: each subdomain label, the prefix, then the suffix as
    /// a single element.
    pub fn labels(&self) -> Vec<String> {
        if self.domain().is_empty() {
            return Vec::new();
        }

        let mut labels: Vec<String> = if self.subdomain.is_empty() {
            Vec::new()
        } else {
            self.subdomain.split('.').map(String::from).collect()
        };
        labels.push(self.prefix.clone());
        labels.push(self.suffix.clone());
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_and_host() {
        let parts = DomainParts::new("beta.gama", "google", "co.uk");
        assert_eq!(parts.domain(), "google.co.uk");
        assert_eq!(parts.host(), "beta.gama.google.co.uk");
        assert!(parts.has_subdomain());
    }

    #[test]
    fn test_without_subdomain() {
        let parts = DomainParts::new("", "google", "com");
        assert_eq!(parts.host(), "google.com");
        assert!(!parts.has_subdomain());
        assert_eq!(parts.labels(), vec!["google", "com"]);
    }

    #[test]
    fn test_empty_parts() {
        let parts = DomainParts::default();
        assert_eq!(parts.domain(), "");
        assert_eq!(parts.host(), "");
        assert_eq!(parts.label_count(), 0);
        assert!(parts.labels().is_empty());
        assert!(!parts.has_subdomain());
    }

    #[test]
    fn test_label_count() {
        assert_eq!(DomainParts::new("", "google", "com").label_count(), 2);
        assert_eq!(DomainParts::new("gama", "google", "co.uk").label_count(), 4);
        assert_eq!(DomainParts::new("a.b", "google", "com").label_count(), 4);
    }

    #[test]
    fn test_labels_keep_suffix_whole() {
        let parts = DomainParts::new("www", "google", "co.uk");
        assert_eq!(parts.labels(), vec!["www", "google", "co.uk"]);
    }
}
