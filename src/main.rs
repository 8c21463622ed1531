//! Host CLI for the duplicate Scrabble engine (default binary).
//!
//! Builds dictionary payloads from word lists, checks words, scores a move and lists the
//! best moves for a rack. Results go to stdout; progress and failures go to stderr.

mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

use duplicate_scrabble::core::{Bag, BagEntry, Board, DealRng, MissingDictionary, Rack, ScoringRules, Validator};
use duplicate_scrabble::dict::{Dictionary, DictionaryHandle, DictionaryPayload, TrieBuilder};
use duplicate_scrabble::engine::{find_best_moves_with, SearchConfig};
use duplicate_scrabble::types::parse_word;

use cli::{Cli, CliConfig, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();
    run(cli.command, &config)
}

fn run(command: Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Build {
            words,
            out,
            version,
        } => build(&words, &out, &version, config),
        Command::Lookup { words, dict, json } => {
            let dictionary = require_dictionary(dict, config)?;
            lookup(&dictionary, &words, json)
        }
        Command::Score {
            board,
            rack,
            word,
            row,
            col,
            direction,
            dict,
            accept_all,
            json,
        } => {
            let board = read_board(board.as_deref())?;
            let rack = Rack::parse(&rack).with_context(|| format!("invalid rack {rack:?}"))?;
            let tiles = parse_word(&word).with_context(|| format!("invalid word {word:?}"))?;
            let rules = ScoringRules {
                missing_dictionary: if accept_all {
                    MissingDictionary::AcceptAll
                } else {
                    MissingDictionary::Reject
                },
                ..ScoringRules::default()
            };

            let dictionary = optional_dictionary(dict, config)?;
            let validator = Validator::new(dictionary.as_deref(), rules);
            let candidate = validator.candidate(&board, tiles, &rack, row, col, direction);
            if json {
                println!("{}", serde_json::to_string_pretty(&candidate)?);
            } else {
                match &candidate.error {
                    None => println!("{candidate}"),
                    Some(error) => println!("rejected ({}): {error}", error.code()),
                }
            }
            Ok(())
        }
        Command::Best {
            board,
            rack,
            limit,
            dict,
            json,
        } => {
            let board = read_board(board.as_deref())?;
            let rack = Rack::parse(&rack).with_context(|| format!("invalid rack {rack:?}"))?;
            let dictionary = require_dictionary(dict, config)?;
            let search = SearchConfig::with_limit(limit.unwrap_or(config.move_limit));

            let moves = find_best_moves_with(&board, &rack, Some(dictionary.as_ref()), &search);
            config.log("best", format_args!("{} candidates for rack {rack}", moves.len()));
            if json {
                println!("{}", serde_json::to_string_pretty(&moves)?);
            } else {
                for candidate in &moves {
                    println!("{candidate}");
                }
            }
            Ok(())
        }
        Command::Bag {
            board,
            racks,
            deal,
            json,
        } => {
            let board = read_board(board.as_deref())?;
            let racks = racks
                .iter()
                .map(|r| Rack::parse(r).with_context(|| format!("invalid rack {r:?}")))
                .collect::<Result<Vec<_>>>()?;
            let mut bag = Bag::unseen(&board, &racks)?;

            let dealt = match deal {
                Some(seed) => {
                    let current = racks.first().cloned().unwrap_or_default();
                    let rack = bag.refill(&current, &mut DealRng::new(seed))?;
                    Some(rack.to_string())
                }
                None => None,
            };

            let report = BagReport {
                total: bag.total(),
                tiles: bag.entries(),
                dealt,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for entry in &report.tiles {
                    println!("{:<4}{}", entry.symbol.display(), entry.count);
                }
                println!("total {}", report.total);
                if let Some(rack) = &report.dealt {
                    println!("dealt {rack}");
                }
            }
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct BagReport {
    total: usize,
    tiles: Vec<BagEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dealt: Option<String>,
}

#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    word: &'a str,
    found: bool,
}

fn build(words: &Path, out: &Path, version: &str, config: &CliConfig) -> Result<()> {
    let text = fs::read_to_string(words).with_context(|| format!("reading {}", words.display()))?;

    let mut builder = TrieBuilder::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(err) = builder.insert_text(line) {
            config.log("build", format_args!("skipping line {}: {err}", line_no + 1));
        }
    }

    let payload = builder.encode(version);
    fs::write(out, payload.to_json()).with_context(|| format!("writing {}", out.display()))?;
    config.log(
        "build",
        format_args!(
            "{} words, {} nodes -> {} (version {version})",
            builder.word_count(),
            payload.node_count,
            out.display()
        ),
    );
    Ok(())
}

fn lookup(dictionary: &Dictionary, words: &[String], json: bool) -> Result<()> {
    let results: Vec<LookupResult<'_>> = words
        .iter()
        .map(|word| LookupResult {
            word,
            found: dictionary.contains_word(word),
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}\t{}", result.word, if result.found { "yes" } else { "no" });
        }
    }
    Ok(())
}

fn dictionary_path(flag: Option<PathBuf>, config: &CliConfig) -> Option<PathBuf> {
    flag.or_else(|| config.dictionary.clone())
}

/// Load the payload at `path` into the process-wide handle.
fn load_dictionary(path: &Path, config: &CliConfig) -> Result<Arc<Dictionary>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let handle = DictionaryHandle::global();
    let loaded = DictionaryPayload::from_json(&text).and_then(|payload| handle.load(&payload));
    match loaded {
        Ok(dictionary) => {
            config.log(
                "dict",
                format_args!(
                    "loaded version {} ({} nodes)",
                    dictionary.version(),
                    dictionary.node_count()
                ),
            );
            Ok(dictionary)
        }
        Err(err) => {
            config.log("dict", format_args!("load failed: {err}"));
            Err(err).with_context(|| format!("loading {}", path.display()))
        }
    }
}

fn require_dictionary(flag: Option<PathBuf>, config: &CliConfig) -> Result<Arc<Dictionary>> {
    let path = dictionary_path(flag, config)
        .ok_or_else(|| anyhow!("no dictionary: pass --dict or set SCRABBLE_DICTIONARY"))?;
    load_dictionary(&path, config)
}

fn optional_dictionary(flag: Option<PathBuf>, config: &CliConfig) -> Result<Option<Arc<Dictionary>>> {
    match dictionary_path(flag, config) {
        Some(path) => load_dictionary(&path, config).map(Some),
        None => {
            config.log("dict", "no dictionary configured");
            Ok(None)
        }
    }
}

fn read_board(path: Option<&Path>) -> Result<Board> {
    match path {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Board::parse(&text).with_context(|| format!("parsing board {}", path.display()))
        }
        None => Ok(Board::new()),
    }
}
