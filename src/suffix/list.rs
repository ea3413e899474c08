use super::trie::{SuffixTrie, SuffixTrieBuilder};
use crate::error::{DomainError, Result};

/// Outcome of parsing a suffix list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStats {
    /// Rules inserted into the trie
    pub rules: usize,
    /// Wildcard (`*.`) and exception (`!`) rules that were skipped
    pub skipped: usize,
}

impl SuffixTrie {
    /// Parse a suffix list in the Public Suffix List `.dat` format.
    ///
    /// Lines starting with `//` and blank lines are ignored. The first
    /// whitespace-separated token of every other line is a rule. Wildcard
    /// and exception rules are skipped.
    pub fn from_rules(text: &str) -> Result<Self> {
        parse_rules(text).map(|(trie, _)| trie)
    }
}

/// Parse a suffix list, also returning what was inserted and skipped.
pub fn parse_rules(text: &str) -> Result<(SuffixTrie, ListStats)> {
    let mut builder = SuffixTrieBuilder::new();
    let mut stats = ListStats::default();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let Some(rule) = line.split_whitespace().next() else {
            continue;
        };

        if rule.starts_with('!') || rule.contains('*') {
            stats.skipped += 1;
            continue;
        }

        if rule.split('.').any(str::is_empty) {
            return Err(DomainError::ParseErrorAtLine {
                line: line_num,
                message: format!("empty label in rule {:?}", rule),
            });
        }

        if builder.insert(rule) {
            stats.rules += 1;
        }
    }

    Ok((builder.finish(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_list() {
        let text = r#"
// ===BEGIN ICANN DOMAINS===
com
uk
co.uk

// ===BEGIN PRIVATE DOMAINS===
blogspot.com
"#;
        let (trie, stats) = parse_rules(text).unwrap();
        assert_eq!(stats.rules, 4);
        assert_eq!(stats.skipped, 0);
        assert_eq!(trie.len(), 4);
        assert!(trie.contains("blogspot.com"));
    }

    #[test]
    fn test_parse_skips_wildcards_and_exceptions() {
        let text = "ck\n*.ck\n!www.ck\n";
        let (trie, stats) = parse_rules(text).unwrap();
        assert_eq!(stats.rules, 1);
        assert_eq!(stats.skipped, 2);
        assert!(!trie.contains("www.ck"));
    }

    #[test]
    fn test_parse_takes_first_token() {
        let trie = SuffixTrie::from_rules("co.uk   trailing text\n").unwrap();
        assert!(trie.contains("co.uk"));
        assert!(!trie.contains("text"));
    }

    #[test]
    fn test_parse_lowercases_rules() {
        let trie = SuffixTrie::from_rules("CO.UK\n").unwrap();
        assert!(trie.contains("co.uk"));
    }

    #[test]
    fn test_parse_duplicate_rule_counted_once() {
        let (_, stats) = parse_rules("com\ncom\n").unwrap();
        assert_eq!(stats.rules, 1);
    }

    #[test]
    fn test_parse_error_has_line_number() {
        let err = SuffixTrie::from_rules("com\n\nbad..rule\n").unwrap_err();
        match err {
            DomainError::ParseErrorAtLine { line, .. } => assert_eq!(line, 3),
            _ => panic!("expected ParseErrorAtLine"),
        }
    }

    #[test]
    fn test_parse_empty_text() {
        let (trie, stats) = parse_rules("").unwrap();
        assert!(trie.is_empty());
        assert_eq!(stats, ListStats::default());
    }
}
