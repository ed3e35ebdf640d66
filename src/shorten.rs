//! Shortening pipeline: table text in, shortest equivalent string out.

use crate::graph::{build_rewrite_graph, shortest_path, SearchError};
use crate::index::{ReverseIndex, ShortcutIndex};
use crate::mapping::{parse_table, TableError};

/// Outcome of shortening one target string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorteningReport {
    /// The winning source string.
    pub shortened: String,
    /// Target length in chars.
    pub original_chars: usize,
    /// Result length in chars.
    pub shortened_chars: usize,
}

impl ShorteningReport {
    /// Characters saved by the rewrite.
    pub fn saved_chars(&self) -> usize {
        self.original_chars - self.shortened_chars
    }
}

/// Shortener over a prepared shortcut index.
///
/// The index is built once and read-only afterwards, so one `Shortener`
/// can serve any number of shortening requests; each request builds and
/// discards its own rewrite graph.
///
/// # Example
///
/// ```rust,ignore
/// use idna_shorten::prelude::*;
///
/// let table_text = std::fs::read_to_string("IdnaMappingTable.txt")?;
/// let shortener = Shortener::from_table_text(&table_text)?;
/// let short = shortener.shorten("weibo.com/u/3193477200")?;
/// assert!(short.chars().count() <= 22);
/// ```
#[derive(Debug, Clone)]
pub struct Shortener {
    index: ShortcutIndex,
}

impl Shortener {
    /// Create a shortener over an existing index.
    pub fn new(index: ShortcutIndex) -> Self {
        Self { index }
    }

    /// Run the full preparation pipeline on raw table text:
    /// parse, invert, optimize.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the table text is malformed.
    pub fn from_table_text(text: &str) -> Result<Self, TableError> {
        let entries = parse_table(text)?;
        let reverse = ReverseIndex::from_entries(&entries);
        Ok(Self::new(ShortcutIndex::from_reverse(&reverse)))
    }

    /// The underlying index.
    pub fn index(&self) -> &ShortcutIndex {
        &self.index
    }

    /// Compute the shortest equivalent source string for `target`.
    ///
    /// Pure function of the index and the target: the same inputs always
    /// produce the same output. Targets with no matching substring come
    /// back unchanged; the empty target shortens to itself.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] only on an internal invariant violation
    /// (the pass-through chain makes the search infallible by design).
    pub fn shorten(&self, target: &str) -> Result<String, SearchError> {
        let graph = build_rewrite_graph(target, &self.index);
        shortest_path(&graph)
    }

    /// Shorten `target` and report the character savings.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Shortener::shorten`].
    pub fn report(&self, target: &str) -> Result<ShorteningReport, SearchError> {
        let shortened = self.shorten(target)?;
        Ok(ShorteningReport {
            original_chars: target.chars().count(),
            shortened_chars: shortened.chars().count(),
            shortened,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ShortcutEntry;
    use smallvec::smallvec;

    fn shortener(entries: &[(&str, &str)]) -> Shortener {
        Shortener::new(ShortcutIndex::from_entries(
            entries
                .iter()
                .map(|&(long, shortcut)| ShortcutEntry {
                    long: long.to_string(),
                    shortcuts: smallvec![shortcut.to_string()],
                })
                .collect(),
        ))
    }

    #[test]
    fn test_report_counts_chars() {
        let report = shortener(&[("ab", "x")]).report("cabcabc").expect("report");
        assert_eq!(report.shortened, "cxcxc");
        assert_eq!(report.original_chars, 7);
        assert_eq!(report.shortened_chars, 5);
        assert_eq!(report.saved_chars(), 2);
    }

    #[test]
    fn test_from_table_text_pipeline() {
        // 'x' (synthetic U+0078 stand-in) maps to "ab"; shortening inverts it.
        let table = "0078 ; mapped ; 0061 0062 # x -> ab\n";
        let shortener = Shortener::from_table_text(table).expect("table");
        assert_eq!(shortener.shorten("cab").expect("path"), "cx");
    }

    #[test]
    fn test_shortener_is_reusable() {
        let shortener = shortener(&[("ab", "x")]);
        assert_eq!(shortener.shorten("ab").expect("path"), "x");
        assert_eq!(shortener.shorten("abab").expect("path"), "xx");
        assert_eq!(shortener.shorten("nope").expect("path"), "nope");
    }
}
