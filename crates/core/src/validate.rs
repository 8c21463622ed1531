//! Move validation and scoring
//!
//! A move is a run of tiles covering consecutive cells from `(row, col)` along a
//! direction, cells that already hold a tile included. Checks run in a fixed order and the
//! first violation is reported:
//!
//! 1. bounds and the presence of at least one new tile
//! 2. placement: center coverage and length on an empty board, adjacency otherwise
//! 3. per-cell consistency with the board and the rack
//! 4. dictionary membership of the main word and every cross word
//!
//! Scoring: new tiles take their cell's letter multiplier, existing tiles count face
//! value, and the word multipliers of the new cells are applied once per word. Cross words
//! only see the multipliers of the one new tile they contain.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::dict::Dictionary;
use crate::types::{word_to_string, Direction, Symbol, Tile, BINGO_BONUS, BOARD_SIZE, CENTER, RACK_SIZE};
use crate::{Board, MoveCandidate, Rack};

/// What to do when no dictionary is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDictionary {
    /// Reject every move with [`MoveError::DictionaryUnavailable`].
    #[default]
    Reject,
    /// Skip word checks and score on placement rules alone.
    AcceptAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    pub bingo_bonus: u32,
    /// Tiles that must leave the rack for the bingo bonus.
    pub rack_size: usize,
    pub missing_dictionary: MissingDictionary,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            bingo_bonus: BINGO_BONUS,
            rack_size: RACK_SIZE,
            missing_dictionary: MissingDictionary::Reject,
        }
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveError {
    #[error("no dictionary loaded")]
    DictionaryUnavailable,
    #[error("move leaves the board")]
    OutOfBounds,
    #[error("move places no new tile")]
    NoNewTiles,
    #[error("wildcard has no letter assigned")]
    UnassignedBlank,
    #[error("cell ({row},{col}) holds {expected}, move has {got}")]
    CellConflict {
        row: usize,
        col: usize,
        expected: Symbol,
        got: Symbol,
    },
    #[error("rack has no {symbol} and no wildcard")]
    MissingRackLetter { symbol: Symbol },
    #[error("rack has no wildcard for a blank tile")]
    MissingBlank,
    #[error("move does not touch any tile on the board")]
    NotConnected,
    #[error("first move must cover the center cell")]
    MissingCenter,
    #[error("first move must form a word of at least two letters")]
    TooShortFirstMove,
    #[error("{word} is not in the dictionary")]
    InvalidWord { word: String },
}

impl MoveError {
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::DictionaryUnavailable => "dictionary_unavailable",
            MoveError::OutOfBounds => "out_of_bounds",
            MoveError::NoNewTiles => "no_new_tiles",
            MoveError::UnassignedBlank => "unassigned_blank",
            MoveError::CellConflict { .. } => "cell_conflict",
            MoveError::MissingRackLetter { .. } => "missing_rack_letter",
            MoveError::MissingBlank => "missing_blank",
            MoveError::NotConnected => "not_connected",
            MoveError::MissingCenter => "missing_center",
            MoveError::TooShortFirstMove => "too_short_first_move",
            MoveError::InvalidWord { .. } => "invalid_word",
        }
    }
}

/// Outcome of scoring one move. A rejected move always scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveScore {
    pub score: u32,
    pub is_valid: bool,
    pub error: Option<MoveError>,
}

impl MoveScore {
    pub fn valid(score: u32) -> Self {
        Self {
            score,
            is_valid: true,
            error: None,
        }
    }

    pub fn rejected(error: MoveError) -> Self {
        Self {
            score: 0,
            is_valid: false,
            error: Some(error),
        }
    }
}

impl From<Result<u32, MoveError>> for MoveScore {
    fn from(result: Result<u32, MoveError>) -> Self {
        match result {
            Ok(score) => MoveScore::valid(score),
            Err(error) => MoveScore::rejected(error),
        }
    }
}

/// Score a move with the given rules.
///
/// # Examples
///
/// ```
/// use duplicate_scrabble_core::dict::Dictionary;
/// use duplicate_scrabble_core::types::{parse_word, Direction};
/// use duplicate_scrabble_core::{score_move, Board, Rack, ScoringRules};
///
/// let dict = Dictionary::from_words("demo", ["CASA"]).unwrap();
/// let tiles = parse_word("CASA").unwrap();
/// let rack = Rack::parse("CASAXYZ").unwrap();
///
/// let result = score_move(
///     &Board::new(), &tiles, &rack, 7, 7, Direction::Horizontal,
///     Some(&dict), &ScoringRules::default(),
/// );
/// assert!(result.is_valid);
/// assert_eq!(result.score, 10);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn score_move(
    board: &Board,
    tiles: &[Tile],
    rack: &Rack,
    row: usize,
    col: usize,
    direction: Direction,
    dictionary: Option<&Dictionary>,
    rules: &ScoringRules,
) -> MoveScore {
    Validator::new(dictionary, *rules).score(board, tiles, rack, row, col, direction)
}

/// Scores moves against one dictionary and rule set.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'d> {
    dictionary: Option<&'d Dictionary>,
    rules: ScoringRules,
}

/// A covered cell after the per-cell checks.
#[derive(Debug, Clone, Copy)]
struct Placed {
    row: usize,
    col: usize,
    tile: Tile,
    is_new: bool,
}

type Run = ArrayVec<Placed, BOARD_SIZE>;

impl<'d> Validator<'d> {
    pub fn new(dictionary: Option<&'d Dictionary>, rules: ScoringRules) -> Self {
        Self { dictionary, rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn score(
        &self,
        board: &Board,
        tiles: &[Tile],
        rack: &Rack,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> MoveScore {
        self.evaluate(board, tiles, rack, row, col, direction)
            .map(|(score, _)| score)
            .into()
    }

    /// Score a move and wrap it as a [`MoveCandidate`].
    ///
    /// On success the candidate describes the whole main word, starting at its first
    /// letter, with board tiles included. A letter covered by a wildcard becomes a blank.
    /// A rejected move keeps the tiles and position it was given.
    pub fn candidate(
        &self,
        board: &Board,
        tiles: Vec<Tile>,
        rack: &Rack,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> MoveCandidate {
        match self.evaluate(board, &tiles, rack, row, col, direction) {
            Ok((score, word)) => {
                let (start_row, start_col) = word.first().map_or((row, col), |p| (p.row, p.col));
                let tiles = word.iter().map(|p| p.tile).collect();
                MoveCandidate::new(tiles, start_row, start_col, direction, MoveScore::valid(score))
            }
            Err(error) => MoveCandidate::new(tiles, row, col, direction, MoveScore::rejected(error)),
        }
    }

    fn evaluate(
        &self,
        board: &Board,
        tiles: &[Tile],
        rack: &Rack,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<(u32, Run), MoveError> {
        if tiles.is_empty() {
            return Err(MoveError::NoNewTiles);
        }
        let (dr, dc) = direction.delta();
        let last = tiles.len() - 1;
        if !Board::in_bounds(row, col) || !Board::in_bounds(row + dr * last, col + dc * last) {
            return Err(MoveError::OutOfBounds);
        }
        if tiles.iter().any(|t| t.symbol.is_wildcard()) {
            return Err(MoveError::UnassignedBlank);
        }

        let span = || (0..tiles.len()).map(move |i| (row + dr * i, col + dc * i));
        let new_cells: ArrayVec<(usize, usize), BOARD_SIZE> =
            span().filter(|&(r, c)| !board.is_occupied(r, c)).collect();
        if new_cells.is_empty() {
            return Err(MoveError::NoNewTiles);
        }

        // Placement
        if board.is_empty() {
            if !span().any(|cell| cell == (CENTER, CENTER)) {
                return Err(MoveError::MissingCenter);
            }
            if tiles.len() < 2 {
                return Err(MoveError::TooShortFirstMove);
            }
        } else if !new_cells.iter().any(|&(r, c)| board.has_neighbor(r, c)) {
            return Err(MoveError::NotConnected);
        }

        // Per-cell consistency, consuming the rack
        let mut counts = rack.counts();
        let mut covered = Run::new();
        for ((r, c), &tile) in span().zip(tiles) {
            let placed = match board.tile(r, c) {
                Some(existing) => {
                    if existing.symbol != tile.symbol {
                        return Err(MoveError::CellConflict {
                            row: r,
                            col: c,
                            expected: existing.symbol,
                            got: tile.symbol,
                        });
                    }
                    Placed {
                        row: r,
                        col: c,
                        tile: existing,
                        is_new: false,
                    }
                }
                None => {
                    let tile = if tile.is_blank {
                        if !counts.take(Symbol::WILDCARD) {
                            return Err(MoveError::MissingBlank);
                        }
                        tile
                    } else if counts.take(tile.symbol) {
                        tile
                    } else if counts.take(Symbol::WILDCARD) {
                        Tile::blank(tile.symbol)
                    } else {
                        return Err(MoveError::MissingRackLetter {
                            symbol: tile.symbol,
                        });
                    };
                    Placed {
                        row: r,
                        col: c,
                        tile,
                        is_new: true,
                    }
                }
            };
            covered.push(placed);
        }

        let dictionary = match (self.dictionary, self.rules.missing_dictionary) {
            (Some(dictionary), _) => Some(dictionary),
            (None, MissingDictionary::AcceptAll) => None,
            (None, MissingDictionary::Reject) => return Err(MoveError::DictionaryUnavailable),
        };

        let mut total = 0;

        let main = main_word(board, &covered, direction);
        if main.len() >= 2 {
            check_word(dictionary, &main)?;
            total += word_score(board, &main);
        }

        let cross = direction.perpendicular();
        for placed in covered.iter().filter(|p| p.is_new) {
            let word = cross_word(board, placed, cross);
            if word.len() >= 2 {
                check_word(dictionary, &word)?;
                total += word_score(board, &word);
            }
        }

        if new_cells.len() == self.rules.rack_size {
            total += self.rules.bingo_bonus;
        }

        Ok((total, main))
    }
}

fn step_back(row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
    match direction {
        Direction::Horizontal => col.checked_sub(1).map(|c| (row, c)),
        Direction::Vertical => row.checked_sub(1).map(|r| (r, col)),
    }
}

fn step_forward(row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
    let (dr, dc) = direction.delta();
    let (r, c) = (row + dr, col + dc);
    Board::in_bounds(r, c).then_some((r, c))
}

/// Existing tiles running from (row, col) away from the word, nearest first.
fn existing_run(board: &Board, row: usize, col: usize, direction: Direction, forward: bool) -> Run {
    let mut run = Run::new();
    let mut at = (row, col);
    loop {
        let next = if forward {
            step_forward(at.0, at.1, direction)
        } else {
            step_back(at.0, at.1, direction)
        };
        let Some((r, c)) = next else { break };
        let Some(tile) = board.tile(r, c) else { break };
        run.push(Placed {
            row: r,
            col: c,
            tile,
            is_new: false,
        });
        at = (r, c);
    }
    run
}

/// The full word along `direction` through the covered cells.
fn main_word(board: &Board, covered: &Run, direction: Direction) -> Run {
    let (Some(first), Some(last)) = (covered.first(), covered.last()) else {
        return Run::new();
    };
    let mut word: Run = existing_run(board, first.row, first.col, direction, false)
        .into_iter()
        .rev()
        .collect();
    word.extend(covered.iter().copied());
    word.extend(existing_run(board, last.row, last.col, direction, true));
    word
}

/// The perpendicular word through one new tile.
fn cross_word(board: &Board, placed: &Placed, direction: Direction) -> Run {
    let mut word: Run = existing_run(board, placed.row, placed.col, direction, false)
        .into_iter()
        .rev()
        .collect();
    word.push(*placed);
    word.extend(existing_run(board, placed.row, placed.col, direction, true));
    word
}

fn check_word(dictionary: Option<&Dictionary>, word: &Run) -> Result<(), MoveError> {
    let Some(dictionary) = dictionary else {
        return Ok(());
    };
    let symbols: ArrayVec<Symbol, BOARD_SIZE> = word.iter().map(|p| p.tile.symbol).collect();
    if dictionary.lookup(&symbols) {
        Ok(())
    } else {
        Err(MoveError::InvalidWord {
            word: word_to_string(&symbols),
        })
    }
}

fn word_score(board: &Board, word: &Run) -> u32 {
    let mut letters = 0;
    let mut factor = 1;
    for placed in word {
        if placed.is_new {
            let multiplier = board.multiplier(placed.row, placed.col);
            letters += placed.tile.value() * multiplier.letter_factor();
            factor *= multiplier.word_factor();
        } else {
            letters += placed.tile.value();
        }
    }
    letters * factor
}
