//! Unicode IDNA mapping table model.
//!
//! This module provides the parsed representation of the IDNA compatibility
//! mapping table: per-code-point mapping entries and the forward mapping
//! table built from them. The forward direction is what Unicode-aware
//! software applies during normalization; the rest of this crate inverts it.

pub mod parser;

pub use parser::{parse_table, TableError};

use rustc_hash::FxHashMap;

/// Status column of a mapping table line.
///
/// Only [`MappingStatus::Mapped`] entries participate in shortening; the
/// other statuses are recognized so their lines can be skipped rather than
/// treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStatus {
    /// Code point is used as-is.
    Valid,
    /// Code point is removed during normalization.
    Ignored,
    /// Code point is replaced by its mapping output.
    Mapped,
    /// Valid or mapped depending on the processing profile.
    Deviation,
    /// Code point is not allowed.
    Disallowed,
    /// Disallowed under STD3, valid otherwise.
    DisallowedStd3Valid,
    /// Disallowed under STD3, mapped otherwise.
    DisallowedStd3Mapped,
}

impl MappingStatus {
    /// Parse the status field of a table line.
    ///
    /// Returns `None` for unrecognized statuses, which callers treat as a
    /// non-matching line.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "valid" => Some(Self::Valid),
            "ignored" => Some(Self::Ignored),
            "mapped" => Some(Self::Mapped),
            "deviation" => Some(Self::Deviation),
            "disallowed" => Some(Self::Disallowed),
            "disallowed_STD3_valid" => Some(Self::DisallowedStd3Valid),
            "disallowed_STD3_mapped" => Some(Self::DisallowedStd3Mapped),
            _ => None,
        }
    }
}

/// A single `mapped` fact from the table: one source code point and the
/// output sequence it expands into during normalization.
///
/// Ranges in the table are expanded to one entry per code point by the
/// parser, so `codepoint` uniquely identifies at most one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Source code point.
    pub codepoint: char,
    /// Output sequence the source expands into.
    pub output: String,
}

/// Forward mapping table: source code point to its normalization output.
///
/// Built once from parsed entries and immutable thereafter. Used to apply
/// the mapped relation in the forward direction, which is how shortened
/// strings are verified to expand back into their targets.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    forward: FxHashMap<char, String>,
}

impl MappingTable {
    /// Build the forward table from parsed entries.
    pub fn from_entries(entries: &[MappingEntry]) -> Self {
        let mut forward =
            FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for entry in entries {
            forward.insert(entry.codepoint, entry.output.clone());
        }
        Self { forward }
    }

    /// Look up the mapping output for a code point.
    pub fn get(&self, codepoint: char) -> Option<&str> {
        self.forward.get(&codepoint).map(String::as_str)
    }

    /// Number of mapped code points.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Apply the mapped relation once: every mapped code point is replaced
    /// by its output, unmapped code points pass through.
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match self.forward.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Apply the mapped relation until fixpoint.
    ///
    /// Terminates only if the mapped relation is acyclic, which holds for
    /// the published IDNA table. This models just the single-step mapping
    /// rule, not the full normalization algorithm.
    pub fn normalize(&self, input: &str) -> String {
        let mut current = input.to_string();
        loop {
            let next = self.apply(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}
