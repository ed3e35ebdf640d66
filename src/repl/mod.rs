//! Interactive REPL for idna-shorten
//!
//! A small read-eval-print loop for exploring shortenings against a loaded
//! mapping table: paste a target, get the shortest equivalent back.

pub mod command;
pub mod state;

pub use command::Command;
pub use state::ReplState;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "idna-shorten> ".to_string(),
            history_file: crate::cli::config_dir()
                .ok()
                .map(|dir| dir.join("history.txt")),
        }
    }
}

/// Run the REPL until the user quits.
///
/// Loads `table` at startup when given; otherwise falls back to the
/// configured or cached table if one exists on disk.
pub fn run(table: Option<PathBuf>) -> Result<()> {
    let config = ReplConfig::default();
    let mut state = ReplState::new();

    print_banner();

    if let Some(path) = resolve_startup_table(table) {
        match state.load_table(&path) {
            Ok(()) => println!(
                "{} {} ({} shrinking outputs)",
                "Loaded:".green().bold(),
                path.display(),
                state.index_len()
            ),
            Err(e) => eprintln!("{}: {e:#}", "Warning".yellow().bold()),
        }
    } else {
        println!("No mapping table loaded; use `table <path>` to load one.");
    }

    let mut editor = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        let _ = editor.load_history(history);
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let Some(command) = Command::parse(&line) else {
                    continue;
                };
                let _ = editor.add_history_entry(line.as_str());
                match command.execute(&mut state) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("{}: {e:#}", "Error".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(history) = &config.history_file {
        let _ = editor.save_history(history);
    }
    Ok(())
}

fn resolve_startup_table(table: Option<PathBuf>) -> Option<PathBuf> {
    if table.is_some() {
        return table;
    }
    let config = crate::cli::paths::PersistentConfig::load().unwrap_or_default();
    if let Some(path) = config.table_path {
        return Some(path);
    }
    crate::cli::default_table_path()
        .ok()
        .filter(|path| path.exists())
}

fn print_banner() {
    println!(
        "{} {}",
        "idna-shorten".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Type a string to shorten it, or `help` for commands.\n");
}
