//! REPL state management

use crate::index::{ReverseIndex, ShortcutIndex};
use crate::mapping::{parse_table, MappingTable};
use crate::shorten::Shortener;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Mutable session state: the loaded table, the shortener built from it,
/// and the output toggles.
#[derive(Debug, Default)]
pub struct ReplState {
    shortener: Option<Shortener>,
    table: Option<MappingTable>,
    table_path: Option<PathBuf>,
    /// Print the percent-encoded result after each shortening.
    pub show_encoded: bool,
    /// Round-trip every result through the forward table.
    pub verify: bool,
}

impl ReplState {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current shortener, if a table has been loaded.
    pub fn shortener(&self) -> Option<&Shortener> {
        self.shortener.as_ref()
    }

    /// Number of entries in the current shortcut index.
    pub fn index_len(&self) -> usize {
        self.shortener
            .as_ref()
            .map_or(0, |shortener| shortener.index().len())
    }

    /// Load a mapping table file, replacing any previous one.
    pub fn load_table(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping table: {}", path.display()))?;
        let entries = parse_table(&text)
            .with_context(|| format!("Failed to parse mapping table: {}", path.display()))?;

        let reverse = ReverseIndex::from_entries(&entries);
        self.shortener = Some(Shortener::new(ShortcutIndex::from_reverse(&reverse)));
        self.table = Some(MappingTable::from_entries(&entries));
        self.table_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Check that `shortened` expands back into `target`.
    pub fn check_round_trip(&self, target: &str, shortened: &str) -> Result<()> {
        let table = self
            .table
            .as_ref()
            .context("No forward table available for verification")?;
        let expanded = table.normalize(shortened);
        let normalized_target = table.normalize(target);
        if expanded != normalized_target {
            bail!("verification failed: result expands to {expanded:?}, not {normalized_target:?}");
        }
        Ok(())
    }

    /// Print session statistics.
    pub fn print_info(&self) {
        match (&self.table_path, &self.shortener) {
            (Some(path), Some(shortener)) => {
                println!("{} {}", "Table:".cyan().bold(), path.display());
                println!(
                    "  Mapped code points:  {}",
                    self.table.as_ref().map_or(0, MappingTable::len)
                );
                println!("  Shrinking outputs:   {}", shortener.index().len());
            }
            _ => println!("No mapping table loaded (use `table <path>`)"),
        }
        println!("  encoded output:      {}", self.show_encoded);
        println!("  verification:        {}", self.verify);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_table_builds_shortener() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "0078 ; mapped ; 0061 0062 # x -> ab").expect("write");

        let mut state = ReplState::new();
        state.load_table(file.path()).expect("load");
        assert_eq!(state.index_len(), 1);

        let shortener = state.shortener().expect("loaded");
        assert_eq!(shortener.shorten("cab").expect("path"), "cx");
        state.check_round_trip("cab", "cx").expect("round trip");
    }

    #[test]
    fn test_load_missing_table_fails() {
        let mut state = ReplState::new();
        assert!(state.load_table(Path::new("/no/such/table.txt")).is_err());
    }
}
