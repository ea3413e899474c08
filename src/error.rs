use thiserror::Error;

/// Classifies hostname validation failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostnameErrorKind {
    /// Nothing left after stripping the URL parts
    Empty,
    /// Longer than 253 bytes, or 254 bytes without a trailing dot
    TooLong,
    /// Character outside `[A-Za-z0-9_-.]`
    InvalidCharacter,
    /// Two consecutive dots or a leading dot
    EmptyLabel,
    /// Label longer than 63 bytes
    LabelTooLong,
    /// Label starting with `-`
    LeadingHyphen,
    /// Label ending with `-`
    TrailingHyphen,
    /// No letter, hyphen or underscore anywhere in the name
    AllNumeric,
}

/// Domain decomposition error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname {host:?}: {kind:?}")]
    InvalidHostname {
        kind: HostnameErrorKind,
        host: String,
    },

    #[error("Failed to decode internationalized labels in {0:?}")]
    IdnaDecode(String),

    #[error("Hostname has a single label: {0:?}")]
    SingleLabel(String),

    #[error("No public suffix found for {0:?}")]
    NoPublicSuffix(String),

    #[error("Hostname is itself a public suffix: {0:?}")]
    NotRegistrable(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },
}

impl DomainError {
    /// Returns the validation failure kind, if this is a hostname error.
    pub fn hostname_kind(&self) -> Option<HostnameErrorKind> {
        match self {
            DomainError::InvalidHostname { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_error_kind_is_matchable() {
        let err = DomainError::InvalidHostname {
            kind: HostnameErrorKind::LabelTooLong,
            host: "a".repeat(64),
        };
        assert_eq!(err.hostname_kind(), Some(HostnameErrorKind::LabelTooLong));
    }

    #[test]
    fn test_non_hostname_error_has_no_kind() {
        let err = DomainError::NoPublicSuffix("example.invalid".into());
        assert_eq!(err.hostname_kind(), None);
    }

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = DomainError::ParseErrorAtLine {
            line: 12,
            message: "empty label in rule \"a..b\"".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 12"), "got: {}", display);
        assert!(display.contains("a..b"), "got: {}", display);
    }
}
