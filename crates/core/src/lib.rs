//! Core game logic - board, rack, bag and the move validator
//!
//! Everything here is a pure function of its inputs: no I/O, no global state, no clocks.
//! The same board, tiles, rack and dictionary always produce the same score.
//!
//! # Module Structure
//!
//! - [`board`]: 15x15 grid with premium lookup and the board text format
//! - [`rack`]: fixed-capacity rack and per-symbol counts
//! - [`bag`]: unseen-tile accounting and deterministic dealing
//! - [`validate`]: placement rules, dictionary checks and scoring
//! - [`candidate`]: the [`MoveCandidate`] record shared with the finder
//!
//! # Rules
//!
//! - **First move**: must cover the center cell and form a word of two or more letters
//! - **Later moves**: at least one new tile must touch a tile already on the board
//! - **Words**: the main word and every cross word of length > 1 must be in the dictionary
//! - **Blanks**: score 0; a wildcard stands in for any letter missing from the rack
//! - **Bingo**: playing all seven rack tiles adds 50
//!
//! # Example
//!
//! ```
//! use duplicate_scrabble_core::dict::Dictionary;
//! use duplicate_scrabble_core::types::{parse_word, Direction};
//! use duplicate_scrabble_core::{Board, Rack, ScoringRules, Validator};
//!
//! let dict = Dictionary::from_words("demo", ["CASA", "CASAS"]).unwrap();
//! let validator = Validator::new(Some(&dict), ScoringRules::default());
//!
//! let mut board = Board::new();
//! let first = validator.candidate(
//!     &board, parse_word("CASA").unwrap(), &Rack::parse("CASA").unwrap(),
//!     7, 7, Direction::Horizontal,
//! );
//! assert_eq!(first.score, 10);
//! assert!(board.apply_move(&first));
//!
//! let second = validator.candidate(
//!     &board, parse_word("S").unwrap(), &Rack::parse("S").unwrap(),
//!     7, 11, Direction::Horizontal,
//! );
//! assert_eq!(second.score, 7);
//! assert_eq!(second.word_text(), "CASAS");
//! assert_eq!((second.row, second.col), (7, 7));
//! ```

pub mod bag;
pub mod board;
pub mod candidate;
pub mod rack;
pub mod validate;

pub use duplicate_scrabble_dict as dict;
pub use duplicate_scrabble_types as types;

// Re-export commonly used types for convenience
pub use bag::{Bag, BagEntry, BagError, DealRng};
pub use board::{Board, BoardParseError, Cell};
pub use candidate::MoveCandidate;
pub use rack::{Rack, RackCounts, RackError};
pub use validate::{score_move, MissingDictionary, MoveError, MoveScore, ScoringRules, Validator};
