//! Index file format auto-detection

use super::args::IndexFormat;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Detect the serialization format of an index file.
///
/// A user-specified format always wins. Otherwise the file extension is
/// tried first, then a small content sniff: JSON starts with `{` or `[`,
/// the plain text dump is valid UTF-8 with tab separators, anything else
/// is assumed to be bincode.
pub fn detect_index_format(path: &Path, user_format: Option<IndexFormat>) -> Result<IndexFormat> {
    if let Some(format) = user_format {
        return Ok(format);
    }

    if let Some(format) = detect_by_extension(path) {
        return Ok(format);
    }

    detect_by_content(path)
}

fn detect_by_extension(path: &Path) -> Option<IndexFormat> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "txt" | "text" => Some(IndexFormat::Text),
        "bin" | "bincode" => Some(IndexFormat::Bincode),
        "json" => Some(IndexFormat::Json),
        _ => None,
    }
}

fn detect_by_content(path: &Path) -> Result<IndexFormat> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open index file: {}", path.display()))?;

    let mut header = [0u8; 256];
    let bytes_read = file
        .read(&mut header)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    let header = &header[..bytes_read];

    match header.first() {
        Some(b'{') | Some(b'[') => Ok(IndexFormat::Json),
        _ if std::str::from_utf8(header)
            .map(|text| text.contains('\t'))
            .unwrap_or(false) =>
        {
            Ok(IndexFormat::Text)
        }
        _ => Ok(IndexFormat::Bincode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_detection() {
        assert_eq!(
            detect_by_extension(Path::new("index.json")),
            Some(IndexFormat::Json)
        );
        assert_eq!(
            detect_by_extension(Path::new("index.bin")),
            Some(IndexFormat::Bincode)
        );
        assert_eq!(detect_by_extension(Path::new("index.dat")), None);
    }

    #[test]
    fn test_user_format_wins() {
        let format = detect_index_format(Path::new("whatever.json"), Some(IndexFormat::Bincode))
            .expect("detect");
        assert_eq!(format, IndexFormat::Bincode);
    }

    #[test]
    fn test_content_sniff_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".dat").expect("tempfile");
        write!(file, "[{{\"long\":\"ab\"}}]").expect("write");
        let format = detect_index_format(file.path(), None).expect("detect");
        assert_eq!(format, IndexFormat::Json);
    }

    #[test]
    fn test_content_sniff_text() {
        let mut file = tempfile::NamedTempFile::with_suffix(".dat").expect("tempfile");
        writeln!(file, "ab\tx").expect("write");
        let format = detect_index_format(file.path(), None).expect("detect");
        assert_eq!(format, IndexFormat::Text);
    }
}
