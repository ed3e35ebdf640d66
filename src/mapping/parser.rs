//! Line parser for the IDNA mapping table text format.
//!
//! The table is a plain-text file of lines shaped like:
//!
//! ```text
//! 0041          ; mapped     ; 0061        # LATIN CAPITAL LETTER A
//! 2165          ; mapped     ; 0076 0069   # ROMAN NUMERAL SIX
//! 002D          ; valid                    # HYPHEN-MINUS
//! ```
//!
//! The source column may also be an inclusive range `A..B`, in which case
//! every code point in the range shares the same output.
//!
//! Only `mapped` lines are retained. Lines that do not match the format
//! (headers, blanks, comments, other statuses) are skipped silently; a
//! `mapped` line whose output field cannot be decoded aborts the whole
//! parse, because the table is trusted all-or-nothing input.

use super::{MappingEntry, MappingStatus};
use thiserror::Error;

/// Errors raised while decoding the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// An output code point of a `mapped` line is not valid hexadecimal.
    #[error("invalid code point `{field}` on line {line}")]
    InvalidCodePoint {
        /// The offending field text.
        field: String,
        /// 1-based line number.
        line: usize,
    },

    /// A decoded value is not a Unicode scalar value (e.g. a surrogate).
    #[error("U+{value:04X} on line {line} is not a Unicode scalar value")]
    NotAScalarValue {
        /// The decoded numeric value.
        value: u32,
        /// 1-based line number.
        line: usize,
    },

    /// A `mapped` line carries no output field.
    #[error("mapped entry without an output sequence on line {line}")]
    MissingOutput {
        /// 1-based line number.
        line: usize,
    },
}

/// Parse raw table text into `mapped` entries, in file order.
///
/// Ranges (`A..B`) expand to one entry per code point, all sharing the
/// same output sequence.
///
/// # Errors
///
/// Returns [`TableError`] if a `mapped` line has a missing or malformed
/// output field, or if any decoded value is not a Unicode scalar value.
/// Non-`mapped` and non-matching lines never error.
pub fn parse_table(text: &str) -> Result<Vec<MappingEntry>, TableError> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;

        // Strip trailing comment, then split the data fields.
        let data = raw.split('#').next().unwrap_or("");
        let mut fields = data.split(';');

        let source_field = match fields.next() {
            Some(f) if !f.trim().is_empty() => f.trim(),
            _ => continue,
        };
        let status_field = match fields.next() {
            Some(f) => f.trim(),
            None => continue,
        };
        match MappingStatus::parse(status_field) {
            Some(MappingStatus::Mapped) => {}
            _ => continue,
        }

        // A source field that is not hex means the line does not match
        // the table shape at all; treat it like any other non-entry line.
        let Some((start, end)) = parse_source(source_field) else {
            continue;
        };

        let output_field = fields
            .next()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .ok_or(TableError::MissingOutput { line: line_no })?;
        let output = decode_output(output_field, line_no)?;

        for value in start..=end {
            let codepoint = scalar(value, line_no)?;
            entries.push(MappingEntry {
                codepoint,
                output: output.clone(),
            });
        }
    }

    Ok(entries)
}

/// Decode the source field: a single code point or an inclusive `A..B` range.
fn parse_source(field: &str) -> Option<(u32, u32)> {
    match field.split_once("..") {
        Some((lo, hi)) => Some((parse_hex(lo)?, parse_hex(hi)?)),
        None => {
            let value = parse_hex(field)?;
            Some((value, value))
        }
    }
}

/// Decode the output field: whitespace-separated hex code points,
/// concatenated into a string.
fn decode_output(field: &str, line: usize) -> Result<String, TableError> {
    let mut output = String::new();
    for token in field.split_whitespace() {
        let value = decode_hex(token, line)?;
        output.push(scalar(value, line)?);
    }
    Ok(output)
}

fn parse_hex(field: &str) -> Option<u32> {
    u32::from_str_radix(field.trim(), 16).ok()
}

fn decode_hex(field: &str, line: usize) -> Result<u32, TableError> {
    parse_hex(field).ok_or_else(|| TableError::InvalidCodePoint {
        field: field.trim().to_string(),
        line,
    })
}

fn scalar(value: u32, line: usize) -> Result<char, TableError> {
    char::from_u32(value).ok_or(TableError::NotAScalarValue { value, line })
}
