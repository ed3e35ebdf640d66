//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::ReplState;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::commands::percent_encode_display;

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shorten a target: shorten <target> (or just type the target)
    Shorten {
        /// Target string to shorten
        target: String,
    },
    /// Load a mapping table: table <path>
    Table {
        /// Path to the mapping table file
        path: PathBuf,
    },
    /// Show table/index statistics: info
    Info,
    /// Toggle percent-encoded output: encoded [on|off]
    Encoded {
        /// Enable or disable encoded output
        enable: Option<bool>,
    },
    /// Toggle round-trip verification: verify [on|off]
    Verify {
        /// Enable or disable verification
        enable: Option<bool>,
    },
    /// Show help: help
    Help,
    /// Exit the REPL: quit | exit
    Quit,
}

impl Command {
    /// Parse a REPL input line.
    ///
    /// A line whose first word is not a known command is treated as a
    /// target to shorten, so URLs can be pasted directly.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "shorten" if !rest.is_empty() => Some(Self::Shorten {
                target: rest.to_string(),
            }),
            "table" if !rest.is_empty() => Some(Self::Table {
                path: PathBuf::from(rest),
            }),
            "info" | "stats" if rest.is_empty() => Some(Self::Info),
            "encoded" => Some(Self::Encoded {
                enable: parse_toggle(rest),
            }),
            "verify" => Some(Self::Verify {
                enable: parse_toggle(rest),
            }),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => Some(Self::Shorten {
                target: line.to_string(),
            }),
        }
    }

    /// Execute the command against the session state.
    ///
    /// Returns `false` when the REPL should exit.
    pub fn execute(self, state: &mut ReplState) -> Result<bool> {
        match self {
            Self::Shorten { target } => {
                let shortener = state
                    .shortener()
                    .context("No mapping table loaded (use `table <path>`)")?;
                let report = shortener.report(&target)?;

                println!(
                    "{} {} chars -> {} chars (saved {})",
                    "Shortened:".green().bold(),
                    report.original_chars,
                    report.shortened_chars,
                    report.saved_chars()
                );
                println!("{} {}", "Result: ".cyan(), report.shortened);
                if state.show_encoded {
                    println!(
                        "{} {}",
                        "Encoded:".cyan(),
                        percent_encode_display(&report.shortened)
                    );
                }
                if state.verify {
                    state.check_round_trip(&target, &report.shortened)?;
                    println!("{} result expands back to the target", "Verified:".green());
                }
            }
            Self::Table { path } => {
                state.load_table(&path)?;
                println!(
                    "{} {} ({} shrinking outputs)",
                    "Loaded:".green().bold(),
                    path.display(),
                    state.index_len()
                );
            }
            Self::Info => state.print_info(),
            Self::Encoded { enable } => {
                state.show_encoded = enable.unwrap_or(!state.show_encoded);
                println!("encoded output: {}", on_off(state.show_encoded));
            }
            Self::Verify { enable } => {
                state.verify = enable.unwrap_or(!state.verify);
                println!("verification: {}", on_off(state.verify));
            }
            Self::Help => print_help(),
            Self::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_toggle(rest: &str) -> Option<bool> {
    match rest {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn print_help() {
    println!("{}", "Commands:".cyan().bold());
    println!("  shorten <target>   shorten a string (or just paste it)");
    println!("  table <path>       load a mapping table file");
    println!("  info               show table and index statistics");
    println!("  encoded [on|off]   toggle percent-encoded output");
    println!("  verify [on|off]    toggle round-trip verification");
    println!("  help               show this help");
    println!("  quit               exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("info"), Some(Command::Info));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("table /tmp/t.txt"),
            Some(Command::Table {
                path: PathBuf::from("/tmp/t.txt")
            })
        );
        assert_eq!(
            Command::parse("encoded on"),
            Some(Command::Encoded { enable: Some(true) })
        );
    }

    #[test]
    fn test_bare_line_is_a_target() {
        assert_eq!(
            Command::parse("example.com/viii"),
            Some(Command::Shorten {
                target: "example.com/viii".to_string()
            })
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(Command::parse("   "), None);
    }
}
