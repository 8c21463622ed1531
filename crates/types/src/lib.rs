//! Core types module - alphabet, tiles and board geometry
//!
//! This crate defines the vocabulary shared by the dictionary, the validator and the
//! move finder. Everything here is plain data: no dictionary, no board state.
//!
//! # Alphabet
//!
//! The game uses the Catalan tile set. The alphabet has 29 symbols: 25 ordinary letters
//! (A-Z without a bare Q), the merged graphemes `QU`, `L·L` and `NY`, and `Ç`. A 30th
//! value, [`Symbol::WILDCARD`] (`?`), marks an unassigned blank in a rack.
//!
//! # Board Dimensions
//!
//! - **Size**: 15 x 15 cells, rows and columns indexed 0-14
//! - **Center**: (7, 7), must be covered by the first move
//!
//! # Premium Squares
//!
//! | Kind | Count | Effect |
//! |------|-------|--------|
//! | `TripleWord` | 8 | word x3 |
//! | `DoubleWord` | 16 | word x2 |
//! | `Center` | 1 | word x2 |
//! | `TripleLetter` | 12 | letter x3 |
//! | `DoubleLetter` | 24 | letter x2 |
//!
//! # Examples
//!
//! ```
//! use duplicate_scrabble_types::{parse_word, premium_at, Multiplier, Symbol, BOARD_SIZE};
//!
//! let tiles = parse_word("PAL·LA").unwrap();
//! assert_eq!(tiles.len(), 4);
//! assert_eq!(tiles[2].symbol, Symbol::L_L);
//!
//! assert_eq!(premium_at(7, 7), Multiplier::Center);
//! assert_eq!(premium_at(0, 0), Multiplier::TripleWord);
//! assert_eq!(BOARD_SIZE, 15);
//! ```

use serde::{Deserialize, Serialize};

mod alphabet;
mod tiles;

pub use alphabet::Symbol;
pub use tiles::{
    parse_rack, parse_word, tile_indices, tiles_to_string, toggle_blank, word_to_string, Tile,
    TileParseError,
};

/// Board width and height in cells
pub const BOARD_SIZE: usize = 15;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Row and column of the center cell
pub const CENTER: usize = 7;

/// Maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// Bonus for playing a full rack in one move
pub const BINGO_BONUS: u32 = 50;

/// Direction a word is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Row/column step for one cell along this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "horizontal" | "h", "vertical" | "v"
    ///
    /// # Examples
    ///
    /// ```
    /// use duplicate_scrabble_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("h"), Some(Direction::Horizontal));
    /// assert_eq!(Direction::from_str("Vertical"), Some(Direction::Vertical));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Some(Direction::Horizontal),
            "vertical" | "v" => Some(Direction::Vertical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

/// Premium kind of a board cell.
///
/// Fixed at board creation from [`premium_at`]; never changes during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplier {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The starting cell; doubles the word like `DoubleWord`.
    Center,
}

impl Multiplier {
    pub fn letter_factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter => 2,
            Multiplier::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_factor(self) -> u32 {
        match self {
            Multiplier::DoubleWord | Multiplier::Center => 2,
            Multiplier::TripleWord => 3,
            _ => 1,
        }
    }
}

// Premium coordinates of the top-left quadrant (rows and columns 0-7). The board is
// mirrored on both axes, so `premium_at` folds every coordinate into this quadrant.
const TRIPLE_WORD: [(usize, usize); 3] = [(0, 0), (0, 7), (7, 0)];
const DOUBLE_WORD: [(usize, usize); 4] = [(1, 1), (2, 2), (3, 3), (4, 4)];
const TRIPLE_LETTER: [(usize, usize); 3] = [(1, 5), (5, 1), (5, 5)];
const DOUBLE_LETTER: [(usize, usize); 7] =
    [(0, 3), (3, 0), (2, 6), (6, 2), (3, 7), (7, 3), (6, 6)];

/// Premium kind of the cell at (row, col).
///
/// Coordinates outside the board are `Normal`.
pub fn premium_at(row: usize, col: usize) -> Multiplier {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Multiplier::Normal;
    }
    if row == CENTER && col == CENTER {
        return Multiplier::Center;
    }

    let folded = (row.min(BOARD_SIZE - 1 - row), col.min(BOARD_SIZE - 1 - col));
    if TRIPLE_WORD.contains(&folded) {
        Multiplier::TripleWord
    } else if DOUBLE_WORD.contains(&folded) {
        Multiplier::DoubleWord
    } else if TRIPLE_LETTER.contains(&folded) {
        Multiplier::TripleLetter
    } else if DOUBLE_LETTER.contains(&folded) {
        Multiplier::DoubleLetter
    } else {
        Multiplier::Normal
    }
}
