//! Move candidates produced by validation and search.

use serde::Serialize;

use crate::types::{tiles_to_string, word_to_string, Direction, Symbol, Tile};
use crate::validate::{MoveError, MoveScore};

/// One scored placement.
///
/// `tiles` cover consecutive cells from `(row, col)` along `direction`, including cells
/// that were already occupied, so the candidate can be previewed or applied as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCandidate {
    pub word: Vec<Symbol>,
    pub tiles: Vec<Tile>,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: u32,
    pub is_valid: bool,
    pub error: Option<MoveError>,
}

impl MoveCandidate {
    pub fn new(tiles: Vec<Tile>, row: usize, col: usize, direction: Direction, scored: MoveScore) -> Self {
        Self {
            word: tiles.iter().map(|t| t.symbol).collect(),
            tiles,
            row,
            col,
            direction,
            score: scored.score,
            is_valid: scored.is_valid,
            error: scored.error,
        }
    }

    /// Word in display form, e.g. `PAL·LA`.
    pub fn word_text(&self) -> String {
        word_to_string(&self.word)
    }

    /// Tiles in tile notation, blanks in lower case.
    pub fn tiles_text(&self) -> String {
        tiles_to_string(&self.tiles)
    }

    /// Cells covered by the candidate, in order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..self.tiles.len()).map(move |i| (self.row + dr * i, self.col + dc * i))
    }

    /// Ordering key for the finder: score descending, then row, col, direction, word.
    pub fn rank_key(&self) -> (std::cmp::Reverse<u32>, usize, usize, Direction, Vec<u8>) {
        (
            std::cmp::Reverse(self.score),
            self.row,
            self.col,
            self.direction,
            self.word.iter().map(|s| s.code()).collect(),
        )
    }
}

impl std::fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4}  {} @ ({},{}) {}",
            self.score,
            self.tiles_text(),
            self.row,
            self.col,
            self.direction.as_str()
        )
    }
}
