//! Reverse and optimized shortcut indexes.
//!
//! Shortening inverts the mapping table: instead of asking what a code
//! point expands into, it asks which code points expand into a given
//! output string. [`ReverseIndex`] holds the full inversion;
//! [`ShortcutIndex`] is the filtered form that only keeps substitutions
//! which actually shrink the string.

pub mod optimize;
pub mod reverse;

pub use optimize::{ShortcutEntry, ShortcutIndex};
pub use reverse::ReverseIndex;
