//! Board module - the 15x15 grid
//!
//! Each cell is empty or holds one tile. Uses a flat array for cache locality.
//! Coordinates: (row, col), both 0..14, row 0 at the top. Premium kinds are not stored;
//! they are a pure function of the coordinates (see [`premium_at`]).
//!
//! The board itself does not forbid overwriting a tile; the validator guarantees that
//! official moves only fill empty cells.

use std::fmt;

use serde::Serialize;

use crate::types::{
    parse_word, premium_at, Multiplier, Tile, TileParseError, BOARD_CELLS, BOARD_SIZE, CENTER,
};
use crate::MoveCandidate;

/// Marker for an empty cell in the board text format.
pub const EMPTY_MARK: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 15 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 15")]
    RowLength { row: usize, len: usize },
    #[error("row {row}: {source}")]
    Tile {
        row: usize,
        #[source]
        source: TileParseError,
    },
}

/// A view of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub multiplier: Multiplier,
    pub tile: Option<Tile>,
}

/// The game board - 15 x 15 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Option<Tile>; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Tile at (row, col); `None` if empty or out of bounds
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Full cell view at (row, col); `None` if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| Cell {
            row,
            col,
            multiplier: premium_at(row, col),
            tile: self.cells[idx],
        })
    }

    pub fn multiplier(&self, row: usize, col: usize) -> Multiplier {
        premium_at(row, col)
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Option<Tile>) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.tile(row, col).is_some()
    }

    /// Whether any orthogonal neighbour of (row, col) holds a tile
    pub fn has_neighbor(&self, row: usize, col: usize) -> bool {
        (row > 0 && self.is_occupied(row - 1, col))
            || self.is_occupied(row + 1, col)
            || (col > 0 && self.is_occupied(row, col - 1))
            || self.is_occupied(row, col + 1)
    }

    /// True when no tile has been placed yet
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(idx, &tile)| {
            let (row, col) = (idx / BOARD_SIZE, idx % BOARD_SIZE);
            Cell {
                row,
                col,
                multiplier: premium_at(row, col),
                tile,
            }
        })
    }

    /// Iterate placed tiles
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Mirror along the main diagonal, so column plays become row plays.
    ///
    /// The premium layout is symmetric under this mirror, so multipliers still line up.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                out.cells[col * BOARD_SIZE + row] = self.cells[row * BOARD_SIZE + col];
            }
        }
        out
    }

    /// Whether the center cell is covered
    pub fn center_covered(&self) -> bool {
        self.is_occupied(CENTER, CENTER)
    }

    /// Write a validated move onto the board.
    ///
    /// Only empty cells are filled; existing tiles are never overwritten. Returns false
    /// (leaving the board untouched) for a move the validator rejected.
    pub fn apply_move(&mut self, candidate: &MoveCandidate) -> bool {
        if !candidate.is_valid {
            return false;
        }
        let (dr, dc) = candidate.direction.delta();
        let last = candidate.tiles.len().saturating_sub(1);
        if !Self::in_bounds(candidate.row + dr * last, candidate.col + dc * last) {
            return false;
        }
        for (i, tile) in candidate.tiles.iter().enumerate() {
            let (row, col) = (candidate.row + dr * i, candidate.col + dc * i);
            if !self.is_occupied(row, col) {
                self.set(row, col, Some(*tile));
            }
        }
        true
    }

    /// Parse the board text format: 15 rows of 15 cells, `.` for empty, tiles in tile
    /// notation (lower case = blank).
    ///
    /// # Examples
    ///
    /// ```
    /// use duplicate_scrabble_core::Board;
    ///
    /// let mut rows = vec!["..............."; 15];
    /// rows[7] = ".......PAL·LA....";
    /// let board = Board::from_rows(&rows).unwrap();
    /// assert_eq!(board.tile_count(), 4);
    /// assert!(board.center_covered());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let cells = parse_row(line.as_ref().trim())
                .map_err(|source| BoardParseError::Tile { row, source })?;
            if cells.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, tile) in cells.into_iter().enumerate() {
                board.set(row, col, tile);
            }
        }
        Ok(board)
    }

    /// Parse the board text format from a single string of newline-separated rows.
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        Self::from_rows(&rows)
    }

    /// Render in the board text format.
    pub fn to_rows(&self) -> Vec<String> {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| match self.tile(row, col) {
                        Some(tile) => tile.display(),
                        None => EMPTY_MARK.to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Split a row into cells: `.` is one empty cell, runs between dots are tile notation.
fn parse_row(line: &str) -> Result<Vec<Option<Tile>>, TileParseError> {
    let mut cells = Vec::with_capacity(BOARD_SIZE);
    let mut rest = line;
    let mut offset = 0;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(EMPTY_MARK) {
            cells.push(None);
            rest = after;
            offset += EMPTY_MARK.len_utf8();
            continue;
        }
        let run_len = rest.find(EMPTY_MARK).unwrap_or(rest.len());
        let tiles = parse_word(&rest[..run_len]).map_err(|e| shift_offset(e, offset))?;
        cells.extend(tiles.into_iter().map(Some));
        rest = &rest[run_len..];
        offset += run_len;
    }
    Ok(cells)
}

fn shift_offset(err: TileParseError, by: usize) -> TileParseError {
    match err {
        TileParseError::UnknownCharacter { ch, offset } => TileParseError::UnknownCharacter {
            ch,
            offset: offset + by,
        },
        TileParseError::UnassignedWildcard { offset } => TileParseError::UnassignedWildcard {
            offset: offset + by,
        },
        other => other,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_rows() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
