//! Command-line parsing and environment configuration for the `scrabble` binary.

use std::env;
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use duplicate_scrabble::types::Direction;

const ENV_HELP: &str = "\
Environment:
  SCRABBLE_DICTIONARY   default dictionary payload (JSON)
  SCRABBLE_MOVE_LIMIT   default candidate limit for `best` (20)
  SCRABBLE_QUIET        set to 1 to silence progress on stderr";

/// Settings read from the environment. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub dictionary: Option<PathBuf>,
    pub move_limit: usize,
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            move_limit: 20,
            quiet: false,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let dictionary = var("SCRABBLE_DICTIONARY")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let move_limit = var("SCRABBLE_MOVE_LIMIT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.move_limit);

        let quiet = var("SCRABBLE_QUIET")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            dictionary,
            move_limit,
            quiet,
        }
    }

    /// Progress line on stderr, tagged by component.
    pub fn log(&self, tag: &str, message: impl fmt::Display) {
        if !self.quiet {
            eprintln!("[{tag}] {message}");
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scrabble")]
#[command(about = "Duplicate Scrabble engine: dictionary builder, move scorer and best-move finder")]
#[command(after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Build a dictionary payload from a word list
    Build {
        /// Word list, one word per line; `#` starts a comment line
        words: PathBuf,
        /// Where to write the payload (JSON)
        out: PathBuf,
        /// Version label stored in the payload
        #[arg(long, default_value = "dev")]
        version: String,
    },
    /// Check words against the dictionary
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
        /// Dictionary payload (overrides SCRABBLE_DICTIONARY)
        #[arg(long)]
        dict: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Validate and score one move
    Score {
        /// Board file (15 rows, `.` for empty); empty board if omitted
        #[arg(long)]
        board: Option<PathBuf>,
        #[arg(long)]
        rack: String,
        /// Tiles covering the cells from the start, board tiles included
        #[arg(long)]
        word: String,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        /// h or v
        #[arg(long = "dir", value_parser = parse_direction)]
        direction: Direction,
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Accept every word when no dictionary is configured
        #[arg(long)]
        accept_all: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the best moves for a rack
    Best {
        #[arg(long)]
        board: Option<PathBuf>,
        #[arg(long)]
        rack: String,
        /// Maximum candidates; 0 for all (overrides SCRABBLE_MOVE_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        dict: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Show the unseen tiles, optionally dealing a refill for the first rack
    Bag {
        #[arg(long)]
        board: Option<PathBuf>,
        /// A rack in play; repeat for several
        #[arg(long = "rack")]
        racks: Vec<String>,
        /// Seed for dealing a refill
        #[arg(long)]
        deal: Option<u32>,
        #[arg(long)]
        json: bool,
    },
}

fn parse_direction(text: &str) -> Result<Direction, String> {
    Direction::from_str(text).ok_or_else(|| format!("invalid direction {text:?}, expected h or v"))
}
