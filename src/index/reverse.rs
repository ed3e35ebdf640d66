//! Reverse index construction: normalization output to producing code points.

use crate::mapping::MappingEntry;
use rustc_hash::FxHashMap;

/// Inverted mapping table: an output string to the single-code-point
/// strings that expand into it.
///
/// Producers are recorded in first-seen (file) order per output string,
/// which later determines the optimizer's tie order. Duplicate producers
/// for the same output are dropped on insertion.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    producers: FxHashMap<String, Vec<String>>,
}

impl ReverseIndex {
    /// Fold parsed entries into a reverse index.
    pub fn from_entries(entries: &[MappingEntry]) -> Self {
        let mut producers: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for entry in entries {
            let source = entry.codepoint.to_string();
            let list = producers.entry(entry.output.clone()).or_default();
            if !list.contains(&source) {
                list.push(source);
            }
        }
        Self { producers }
    }

    /// Producers recorded for an output string, in first-seen order.
    pub fn producers(&self, output: &str) -> Option<&[String]> {
        self.producers.get(output).map(Vec::as_slice)
    }

    /// Number of distinct output strings.
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// Check whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Iterate over `(output, producers)` pairs.
    ///
    /// Iteration order is unspecified; consumers that need determinism
    /// must impose their own order (see [`super::ShortcutIndex`]).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.producers
            .iter()
            .map(|(output, list)| (output.as_str(), list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(codepoint: char, output: &str) -> MappingEntry {
        MappingEntry {
            codepoint,
            output: output.to_string(),
        }
    }

    #[test]
    fn test_groups_producers_by_output() {
        let index = ReverseIndex::from_entries(&[
            entry('A', "a"),
            entry('ᴬ', "a"),
            entry('ẞ', "ss"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.producers("a"),
            Some(["A".to_string(), "ᴬ".to_string()].as_slice())
        );
        assert_eq!(index.producers("ss"), Some(["ẞ".to_string()].as_slice()));
    }

    #[test]
    fn test_first_seen_order_preserved() {
        // U+2126 OHM SIGN and U+03A9 GREEK CAPITAL OMEGA share an output.
        let index = ReverseIndex::from_entries(&[
            entry('\u{2126}', "\u{3C9}"),
            entry('\u{3A9}', "\u{3C9}"),
        ]);
        let producers = index.producers("\u{3C9}").expect("key exists");
        assert_eq!(producers.len(), 2);
        assert_eq!(producers[0], "\u{2126}");
        assert_eq!(producers[1], "\u{3A9}");
    }

    #[test]
    fn test_duplicate_producer_dropped() {
        let index = ReverseIndex::from_entries(&[entry('A', "a"), entry('A', "a")]);
        assert_eq!(index.producers("a"), Some(["A".to_string()].as_slice()));
    }

    #[test]
    fn test_missing_output() {
        let index = ReverseIndex::from_entries(&[]);
        assert!(index.is_empty());
        assert_eq!(index.producers("a"), None);
    }
}
