//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

use crate::index::{ReverseIndex, ShortcutIndex};
use crate::mapping::{parse_table, MappingEntry, MappingTable};
use crate::serialization::{
    BincodeSerializer, IndexSerializer, JsonSerializer, PlainTextSerializer,
};
use crate::shorten::Shortener;

use super::args::{Commands, IndexFormat};
use super::detect::detect_index_format;
use super::paths::{default_table_path, PersistentConfig};

/// Characters left intact by the display encoding: unreserved URL
/// characters plus `/`, matching what URL bars keep readable.
const DISPLAY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a shortened string for transport display.
pub fn percent_encode_display(s: &str) -> String {
    utf8_percent_encode(s, DISPLAY_ENCODE_SET).to_string()
}

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Repl { .. } => {
            // Handled in main.rs
            unreachable!("REPL command should be handled in main");
        }
        Commands::Shorten {
            target,
            table,
            index,
            format,
            encoded,
            verify,
            quiet,
        } => cmd_shorten(&target, table, index, format, encoded, verify, quiet),
        Commands::Info { table } => cmd_info(table),
        Commands::BuildIndex {
            output,
            table,
            format,
        } => cmd_build_index(&output, table, format),
        #[cfg(feature = "fetch")]
        Commands::Fetch { output, force } => cmd_fetch(output, force),
        Commands::Settings {
            set_table,
            set_index,
            reset,
        } => cmd_settings(set_table, set_index, reset),
    }
}

/// Shorten command
fn cmd_shorten(
    target: &str,
    table_path: Option<PathBuf>,
    index_path: Option<PathBuf>,
    format: Option<IndexFormat>,
    encoded: bool,
    verify: bool,
    quiet: bool,
) -> Result<()> {
    let (shortener, table) = load_shortener(table_path, index_path, format)?;

    if verify && table.is_none() {
        bail!("--verify needs the forward mapping table; pass --table instead of --index");
    }

    let report = shortener
        .report(target)
        .context("Shortest-path search failed")?;

    if verify {
        if let Some(table) = &table {
            let expanded = table.normalize(&report.shortened);
            let normalized_target = table.normalize(target);
            if expanded != normalized_target {
                bail!(
                    "verification failed: result expands to {expanded:?}, not {normalized_target:?}"
                );
            }
        }
    }

    if quiet {
        println!("{}", report.shortened);
        return Ok(());
    }

    println!(
        "{} {} chars -> {} chars (saved {})",
        "Shortened:".green().bold(),
        report.original_chars,
        report.shortened_chars,
        report.saved_chars()
    );
    println!("{} {}", "Result: ".cyan(), report.shortened);
    if encoded {
        println!(
            "{} {}",
            "Encoded:".cyan(),
            percent_encode_display(&report.shortened)
        );
    }
    if verify {
        println!("{} result expands back to the target", "Verified:".green());
    }

    Ok(())
}

/// Info command
fn cmd_info(table_path: Option<PathBuf>) -> Result<()> {
    let (path, entries) = load_table_entries(table_path)?;
    let reverse = ReverseIndex::from_entries(&entries);
    let index = ShortcutIndex::from_reverse(&reverse);

    println!("{} {}", "Table:".cyan().bold(), path.display());
    println!("  Mapped code points:   {}", entries.len());
    println!("  Distinct outputs:     {}", reverse.len());
    println!("  Shrinking outputs:    {}", index.len());

    if let Some(best) = index
        .entries()
        .iter()
        .max_by_key(|entry| entry.long.chars().count() - entry.shortcuts[0].chars().count())
    {
        let saved = best.long.chars().count() - best.shortcuts[0].chars().count();
        println!(
            "  Best single rewrite:  {:?} -> {:?} (saves {} chars)",
            best.long, best.shortcuts[0], saved
        );
    }

    Ok(())
}

/// Build-index command
fn cmd_build_index(output: &Path, table_path: Option<PathBuf>, format: IndexFormat) -> Result<()> {
    let (path, entries) = load_table_entries(table_path)?;
    let reverse = ReverseIndex::from_entries(&entries);
    let index = ShortcutIndex::from_reverse(&reverse);

    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create index file: {}", output.display()))?;
    let writer = std::io::BufWriter::new(file);
    write_index(&index, writer, format)?;

    println!(
        "{} {} entries from {} -> {} ({format})",
        "Indexed:".green().bold(),
        index.len(),
        path.display(),
        output.display()
    );
    Ok(())
}

/// Fetch command
#[cfg(feature = "fetch")]
fn cmd_fetch(output: Option<PathBuf>, force: bool) -> Result<()> {
    const TABLE_URL: &str = "https://www.unicode.org/Public/idna/latest/IdnaMappingTable.txt";

    let path = match output {
        Some(path) => path,
        None => default_table_path()?,
    };
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    println!("{} {}", "Fetching:".cyan().bold(), TABLE_URL);
    let text = reqwest::blocking::get(TABLE_URL)
        .and_then(reqwest::blocking::Response::error_for_status)
        .context("Failed to download mapping table")?
        .text()
        .context("Failed to read mapping table body")?;

    // Refuse to cache a table the parser cannot use.
    let entries = parse_table(&text).context("Downloaded table failed to parse")?;

    std::fs::write(&path, &text)
        .with_context(|| format!("Failed to write table: {}", path.display()))?;
    println!(
        "{} {} mapped entries -> {}",
        "Saved:".green().bold(),
        entries.len(),
        path.display()
    );
    Ok(())
}

/// Settings command
fn cmd_settings(
    set_table: Option<PathBuf>,
    set_index: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        PersistentConfig::default()
    } else {
        PersistentConfig::load()?
    };

    let changed = reset || set_table.is_some() || set_index.is_some();
    if let Some(path) = set_table {
        config.table_path = Some(path);
    }
    if let Some(path) = set_index {
        config.index_path = Some(path);
    }
    if changed {
        config.save()?;
    }

    println!("{}", "Settings:".cyan().bold());
    println!(
        "  table: {}",
        config
            .table_path
            .as_deref()
            .map_or_else(|| "(default cache)".to_string(), |p| p.display().to_string())
    );
    println!(
        "  index: {}",
        config
            .index_path
            .as_deref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
    );
    Ok(())
}

/// Resolve and read the mapping table, returning parsed entries.
pub(crate) fn load_table_entries(
    table_path: Option<PathBuf>,
) -> Result<(PathBuf, Vec<MappingEntry>)> {
    let path = resolve_table_path(table_path)?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read mapping table: {}", path.display()))?;
    let entries = parse_table(&text)
        .with_context(|| format!("Failed to parse mapping table: {}", path.display()))?;
    Ok((path, entries))
}

fn resolve_table_path(table_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = table_path {
        return Ok(path);
    }
    let config = PersistentConfig::load().unwrap_or_default();
    if let Some(path) = config.table_path {
        return Ok(path);
    }
    let path = default_table_path()?;
    if !path.exists() {
        bail!(
            "No mapping table found at {} (run `idna-shorten fetch` or pass --table)",
            path.display()
        );
    }
    Ok(path)
}

/// Build a shortener from either a serialized index or a mapping table.
///
/// The forward table is only available when loading from table text.
fn load_shortener(
    table_path: Option<PathBuf>,
    index_path: Option<PathBuf>,
    format: Option<IndexFormat>,
) -> Result<(Shortener, Option<MappingTable>)> {
    let index_path = match index_path {
        Some(path) => Some(path),
        None if table_path.is_none() => PersistentConfig::load().unwrap_or_default().index_path,
        None => None,
    };

    if let Some(path) = index_path {
        let format = detect_index_format(&path, format)?;
        let file = std::fs::File::open(&path)
            .with_context(|| format!("Failed to open index file: {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        let index = read_index(reader, format)
            .with_context(|| format!("Failed to load index: {}", path.display()))?;
        return Ok((Shortener::new(index), None));
    }

    let (_, entries) = load_table_entries(table_path)?;
    let table = MappingTable::from_entries(&entries);
    let reverse = ReverseIndex::from_entries(&entries);
    let index = ShortcutIndex::from_reverse(&reverse);
    Ok((Shortener::new(index), Some(table)))
}

fn write_index<W: std::io::Write>(
    index: &ShortcutIndex,
    writer: W,
    format: IndexFormat,
) -> Result<()> {
    match format {
        IndexFormat::Text => PlainTextSerializer::serialize(index, writer)?,
        IndexFormat::Bincode => BincodeSerializer::serialize(index, writer)?,
        IndexFormat::Json => JsonSerializer::serialize(index, writer)?,
    }
    Ok(())
}

fn read_index<R: std::io::Read>(reader: R, format: IndexFormat) -> Result<ShortcutIndex> {
    let index = match format {
        IndexFormat::Text => PlainTextSerializer::deserialize(reader)?,
        IndexFormat::Bincode => BincodeSerializer::deserialize(reader)?,
        IndexFormat::Json => JsonSerializer::deserialize(reader)?,
    };
    Ok(index)
}
