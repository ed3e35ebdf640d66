//! Default paths and configuration directory management

use super::args::IndexFormat;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the configuration directory for idna-shorten
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("idna-shorten"))
}

/// Get the default cached mapping table path
pub fn default_table_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("IdnaMappingTable.txt"))
}

/// Get the user config file path
fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get file extension for an index format
pub fn file_extension(format: IndexFormat) -> &'static str {
    match format {
        IndexFormat::Text => "txt",
        IndexFormat::Bincode => "bin",
        IndexFormat::Json => "json",
    }
}

/// User configuration stored in the config file
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default mapping table path (if set by user)
    pub table_path: Option<PathBuf>,
    /// Default serialized index path (if set by user)
    pub index_path: Option<PathBuf>,
}

impl PersistentConfig {
    /// Load configuration from the config file, falling back to defaults
    /// if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save configuration to the config file
    pub fn save(&self) -> Result<()> {
        let path = config_file_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
