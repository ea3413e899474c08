//! Label trie for public suffix lookup.
//!
//! Suffixes are stored with their labels reversed (`co.uk` is the path
//! `uk -> co`), so a hostname is walked from its rightmost label. Nodes live
//! in a flat arena and refer to their children by index; the structure is
//! never mutated after [`SuffixTrieBuilder::finish`].

use std::collections::HashMap;

const ROOT: usize = 0;

/// A trie node. A node without children is a leaf: no suffix continues
/// below it.
#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<Box<str>, usize>,
    /// Inserted as a suffix of its own, not only as a parent of one
    rule: bool,
}

impl Node {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable public suffix trie
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    nodes: Vec<Node>,
    /// Number of distinct suffixes inserted
    rules: usize,
}

impl Default for SuffixTrie {
    fn default() -> Self {
        SuffixTrieBuilder::new().finish()
    }
}

impl SuffixTrie {
    /// Build a trie from dot-separated suffixes (e.g. `"com"`, `"co.uk"`).
    ///
    /// Suffixes are lowercased; empty entries are ignored.
    pub fn from_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SuffixTrieBuilder::new();
        for suffix in suffixes {
            builder.insert(suffix.as_ref());
        }
        builder.finish()
    }

    /// Number of suffixes in the trie
    pub fn len(&self) -> usize {
        self.rules
    }

    /// Check if the trie holds no suffix
    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    /// Check if `suffix` (dot-separated, lowercase) is a key of the trie.
    ///
    /// Intermediate labels of a longer suffix are keys too.
    pub fn contains(&self, suffix: &str) -> bool {
        if suffix.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for label in suffix.rsplit('.') {
            match self.nodes[node].children.get(label) {
                Some(&child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Find the longest public suffix at the right end of `labels`.
    ///
    /// Returns the number of trailing labels that form the suffix, or 0 when
    /// the rightmost label is not a known suffix at all. The walk stops when
    /// it reaches a leaf (everything further left is private) or the first
    /// label that does not continue a match; in both cases the labels matched
    /// so far are kept.
    pub fn longest_suffix(&self, labels: &[&str]) -> usize {
        let mut current = Some(ROOT);
        let mut matched = 0;

        for label in labels.iter().rev() {
            // Leaf reached on the previous label
            let Some(node) = current else {
                break;
            };

            match self.nodes[node].children.get(*label) {
                Some(&child) => {
                    current = (!self.nodes[child].is_leaf()).then_some(child);
                    matched += 1;
                }
                // Either nothing matched yet (0) or the suffix boundary was
                // crossed; keep what matched.
                None => break,
            }
        }

        matched
    }
}

/// Builder for SuffixTrie
#[derive(Debug)]
pub struct SuffixTrieBuilder {
    nodes: Vec<Node>,
    rules: usize,
}

impl Default for SuffixTrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            rules: 0,
        }
    }

    /// Insert a dot-separated suffix. Returns `false` if it was empty or
    /// already present.
    pub fn insert(&mut self, suffix: &str) -> bool {
        let suffix = suffix.trim().trim_matches('.').to_lowercase();
        if suffix.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for label in suffix.rsplit('.') {
            node = match self.nodes[node].children.get(label) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(label.into(), child);
                    child
                }
            };
        }

        if self.nodes[node].rule {
            return false;
        }
        self.nodes[node].rule = true;
        self.rules += 1;
        true
    }

    pub fn finish(mut self) -> SuffixTrie {
        for node in &mut self.nodes {
            node.children.shrink_to_fit();
        }
        self.nodes.shrink_to_fit();

        SuffixTrie {
            nodes: self.nodes,
            rules: self.rules,
        }
    }
}
