//! Shortcut optimization: keep only substitutions that shrink the string.

use super::ReverseIndex;
use smallvec::SmallVec;

/// One optimized entry: a normalization output (`long`) and the shortest
/// known producers for it.
///
/// Every shortcut is strictly shorter than `long` (in chars), and all
/// shortcuts in the list share the same minimal length. Ties are kept in
/// first-seen order; only the first is consulted when building the
/// rewrite graph, but the full list is retained as observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ShortcutEntry {
    /// The output string to be replaced.
    pub long: String,
    /// Minimal-length producers, first-seen order.
    pub shortcuts: SmallVec<[String; 2]>,
}

/// Optimized index driving the rewrite: output strings mapped to the
/// shortest code points that produce them.
///
/// Entries are sorted by `long`, so iteration (and with it rewrite graph
/// construction) is deterministic regardless of hash map iteration order.
/// The index is immutable once built and can be shared across any number
/// of shortening requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ShortcutIndex {
    entries: Vec<ShortcutEntry>,
}

impl ShortcutIndex {
    /// Filter a reverse index down to shrinking substitutions.
    ///
    /// For each output string, producers strictly shorter than the output
    /// are narrowed to the minimal length (all ties kept); outputs with no
    /// shorter producer are dropped entirely.
    pub fn from_reverse(reverse: &ReverseIndex) -> Self {
        let mut entries = Vec::new();

        for (long, producers) in reverse.iter() {
            let long_len = long.chars().count();
            let mut best_len = usize::MAX;
            let mut shortcuts: SmallVec<[String; 2]> = SmallVec::new();

            for producer in producers {
                let len = producer.chars().count();
                if len >= long_len {
                    continue;
                }
                if len < best_len {
                    best_len = len;
                    shortcuts.clear();
                    shortcuts.push(producer.clone());
                } else if len == best_len {
                    shortcuts.push(producer.clone());
                }
            }

            if !shortcuts.is_empty() {
                entries.push(ShortcutEntry {
                    long: long.to_string(),
                    shortcuts,
                });
            }
        }

        entries.sort_by(|a, b| a.long.cmp(&b.long));
        Self { entries }
    }

    /// Build an index directly from explicit entries.
    ///
    /// Intended for tests and deserialization; entries are re-sorted to
    /// restore the deterministic iteration order.
    pub fn from_entries(mut entries: Vec<ShortcutEntry>) -> Self {
        entries.sort_by(|a, b| a.long.cmp(&b.long));
        Self { entries }
    }

    /// All entries, sorted by `long`.
    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    /// Shortcuts for an output string, if it survived optimization.
    pub fn get(&self, long: &str) -> Option<&[String]> {
        self.entries
            .binary_search_by(|entry| entry.long.as_str().cmp(long))
            .ok()
            .map(|i| self.entries[i].shortcuts.as_slice())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no substitution survived.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
