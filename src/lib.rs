//! # idna-shorten
//!
//! Shorten strings by inverting Unicode IDNA compatibility mappings.
//!
//! Many Unicode code points are defined to *map* (expand) into a longer
//! sequence of code points during IDNA normalization: `ẞ` becomes `ss`,
//! `㎭` becomes `rad`, `Ⅷ` becomes `viii`. Inverting that relation lets a
//! shorter source string stand in for a longer target: any software that
//! normalizes its input will expand the source right back into the target.
//!
//! The pipeline has two stages:
//!
//! 1. **Index**: parse the IDNA mapping table, invert it into a map from
//!    normalization outputs to the code points producing them, and keep
//!    only the substitutions that actually shrink the string.
//! 2. **Search**: for a concrete target, build a DAG whose start-to-end
//!    paths enumerate every way of rewriting substrings of the target via
//!    the index, then BFS for the path with the fewest emitted fragments.
//!
//! ## Example
//!
//! ```rust,ignore
//! use idna_shorten::prelude::*;
//!
//! let table_text = std::fs::read_to_string("IdnaMappingTable.txt")?;
//! let shortener = Shortener::from_table_text(&table_text)?;
//!
//! let report = shortener.report("https://example.com/viii/rad")?;
//! println!("{} -> {}", report.original_chars, report.shortened_chars);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod index;
pub mod mapping;
pub mod shorten;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for exploring shortenings
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::graph::{build_rewrite_graph, shortest_path, RewriteGraph, SearchError};
    pub use crate::index::{ReverseIndex, ShortcutEntry, ShortcutIndex};
    pub use crate::mapping::{parse_table, MappingEntry, MappingStatus, MappingTable, TableError};
    pub use crate::shorten::{Shortener, ShorteningReport};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, IndexSerializer, JsonSerializer, PlainTextSerializer,
    };
}
