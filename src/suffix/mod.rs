//! Public suffix reference structure.
//!
//! The embedded list is parsed into a [`SuffixTrie`] on first use and shared
//! read-only by every caller afterwards.
//!
//! ## Example
//!
//! ```
//! use domainutil_r::suffix::SuffixTrie;
//!
//! let trie = SuffixTrie::from_suffixes(["com", "uk", "co.uk"]);
//!
//! assert_eq!(trie.longest_suffix(&["google", "co", "uk"]), 2);
//! assert_eq!(trie.longest_suffix(&["keep", "google", "com"]), 1);
//! assert_eq!(trie.longest_suffix(&["google", "invalid"]), 0);
//! ```

mod list;
mod trie;

pub use list::{parse_rules, ListStats};
pub use trie::{SuffixTrie, SuffixTrieBuilder};

use once_cell::sync::Lazy;

/// Public suffix list compiled into the crate
pub const EMBEDDED_LIST: &str = include_str!("public_suffix_list.dat");

static PUBLIC_SUFFIXES: Lazy<SuffixTrie> = Lazy::new(|| {
    let (trie, stats) =
        parse_rules(EMBEDDED_LIST).expect("EMBEDDED_LIST: bundled suffix list is invalid");
    tracing::debug!(
        rules = stats.rules,
        skipped = stats.skipped,
        "built public suffix trie"
    );
    trie
});

/// The process-wide trie built from [`EMBEDDED_LIST`].
pub fn public_suffixes() -> &'static SuffixTrie {
    &PUBLIC_SUFFIXES
}
