//! Shortcut index serialization support.
//!
//! Parsing and inverting the full mapping table is by far the most
//! expensive part of a run, and the resulting [`ShortcutIndex`] is small
//! and immutable, so the CLI caches it on disk between runs. Three
//! formats are provided: bincode (compact, default), JSON, and a plain
//! text dump for inspection.
//!
//! This persists the index, never shortening results.

use crate::index::{ShortcutEntry, ShortcutIndex};
use smallvec::SmallVec;
use std::io::{BufRead, BufReader, Read, Write};

/// Trait for serializing and deserializing shortcut indexes.
pub trait IndexSerializer {
    /// Serialize an index to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(index: &ShortcutIndex, writer: W) -> Result<(), SerializationError>;

    /// Deserialize an index from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding or reading fails.
    fn deserialize<R: Read>(reader: R) -> Result<ShortcutIndex, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode encoding/decoding.
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON encoding/decoding.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// A plain text line did not match the expected shape.
    #[error("malformed index line: {0}")]
    MalformedLine(String),
}

/// Bincode binary serializer (compact, fast).
pub struct BincodeSerializer;

impl IndexSerializer for BincodeSerializer {
    fn serialize<W: Write>(index: &ShortcutIndex, writer: W) -> Result<(), SerializationError> {
        bincode::serialize_into(writer, index)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<ShortcutIndex, SerializationError> {
        Ok(bincode::deserialize_from(reader)?)
    }
}

/// JSON serializer (human-readable, interoperable).
pub struct JsonSerializer;

impl IndexSerializer for JsonSerializer {
    fn serialize<W: Write>(index: &ShortcutIndex, writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(writer, index)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<ShortcutIndex, SerializationError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Plain text serializer: one entry per line, tab-separated.
///
/// ```text
/// <long>\t<shortcut>[\t<shortcut>...]
/// ```
pub struct PlainTextSerializer;

impl IndexSerializer for PlainTextSerializer {
    fn serialize<W: Write>(
        index: &ShortcutIndex,
        mut writer: W,
    ) -> Result<(), SerializationError> {
        for entry in index.entries() {
            write!(writer, "{}", entry.long)?;
            for shortcut in &entry.shortcuts {
                write!(writer, "\t{shortcut}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<ShortcutIndex, SerializationError> {
        let reader = BufReader::new(reader);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let long = fields
                .next()
                .filter(|f| !f.is_empty())
                .ok_or_else(|| SerializationError::MalformedLine(line.clone()))?
                .to_string();
            let shortcuts: SmallVec<[String; 2]> = fields.map(str::to_string).collect();
            if shortcuts.is_empty() {
                return Err(SerializationError::MalformedLine(line.clone()));
            }
            entries.push(ShortcutEntry { long, shortcuts });
        }

        Ok(ShortcutIndex::from_entries(entries))
    }
}
