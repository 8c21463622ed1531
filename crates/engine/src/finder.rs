//! Exhaustive best-move search
//!
//! Anchor-based generation over the trie: for every anchor, grow a left part from rack
//! tiles (or replay the tiles already on the board to its left), then extend right through
//! empty and occupied cells while the trie allows it. Only horizontal plays are generated
//! directly; vertical plays come from the same routine run on the transposed board.
//!
//! Every generated play is re-scored by the validator against the real board, so the
//! finder never reports a move the validator would reject.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use arrayvec::ArrayVec;

use duplicate_scrabble_core::{Board, MoveCandidate, Rack, RackCounts, ScoringRules, Validator};
use duplicate_scrabble_dict::{Dictionary, Node};
use duplicate_scrabble_types::{Direction, Symbol, Tile, BOARD_SIZE};

use crate::cross_check::{is_anchor, row_cross_checks, LetterSet};

/// Hard cap on the number of candidates returned.
pub const MAX_CANDIDATES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Maximum candidates to return; 0 means [`MAX_CANDIDATES`].
    pub limit: usize,
    pub rules: ScoringRules,
}

impl SearchConfig {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    fn cap(&self) -> usize {
        if self.limit == 0 {
            MAX_CANDIDATES
        } else {
            self.limit.min(MAX_CANDIDATES)
        }
    }
}

/// All legal plays of `rack` on `board`, best first.
///
/// Sorted by score descending, ties broken by row, column, direction and word. Returns an
/// empty list when no dictionary is loaded or the rack is empty.
///
/// # Examples
///
/// ```
/// use duplicate_scrabble_core::{Board, Rack};
/// use duplicate_scrabble_dict::Dictionary;
/// use duplicate_scrabble_engine::find_best_moves;
///
/// let dict = Dictionary::from_words("demo", ["CASA", "CA"]).unwrap();
/// let moves = find_best_moves(&Board::new(), &Rack::parse("ACSA").unwrap(), Some(&dict), 5);
/// assert_eq!(moves[0].word_text(), "CASA");
/// assert_eq!(moves[0].score, 10);
/// assert!(moves.len() <= 5);
/// ```
pub fn find_best_moves(
    board: &Board,
    rack: &Rack,
    dictionary: Option<&Dictionary>,
    limit: usize,
) -> Vec<MoveCandidate> {
    find_best_moves_with(board, rack, dictionary, &SearchConfig::with_limit(limit))
}

pub fn find_best_moves_with(
    board: &Board,
    rack: &Rack,
    dictionary: Option<&Dictionary>,
    config: &SearchConfig,
) -> Vec<MoveCandidate> {
    let Some(dictionary) = dictionary else {
        return Vec::new();
    };
    if rack.is_empty() {
        return Vec::new();
    }

    let mut plays = Vec::new();
    generate(board, rack, dictionary, Direction::Horizontal, &mut plays);
    generate(&board.transpose(), rack, dictionary, Direction::Vertical, &mut plays);

    let validator = Validator::new(Some(dictionary), config.rules);
    let mut best: HashMap<(Vec<Symbol>, usize, usize, Direction), MoveCandidate> = HashMap::new();
    for play in plays {
        let candidate = validator.candidate(board, play.tiles, rack, play.row, play.col, play.direction);
        if !candidate.is_valid || candidate.score == 0 {
            continue;
        }
        let key = (candidate.word.clone(), candidate.row, candidate.col, candidate.direction);
        match best.entry(key) {
            Entry::Occupied(mut slot) => {
                if candidate.score > slot.get().score {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }

    let mut moves: Vec<MoveCandidate> = best.into_values().collect();
    moves.sort_by_cached_key(MoveCandidate::rank_key);
    moves.truncate(config.cap());
    moves
}

/// A raw play in board coordinates, before validation.
#[derive(Debug, Clone)]
struct Play {
    tiles: Vec<Tile>,
    row: usize,
    col: usize,
    direction: Direction,
}

/// Generate every horizontal play on `board`, reporting coordinates for `direction`.
///
/// For `Direction::Vertical` the board is expected to be transposed, and (row, col) are
/// swapped back on output.
fn generate(board: &Board, rack: &Rack, dictionary: &Dictionary, direction: Direction, out: &mut Vec<Play>) {
    for row in 0..BOARD_SIZE {
        let row_anchors: ArrayVec<usize, BOARD_SIZE> =
            (0..BOARD_SIZE).filter(|&col| is_anchor(board, row, col)).collect();
        if row_anchors.is_empty() {
            continue;
        }

        let mut search = RowSearch {
            board,
            row,
            direction,
            cross: row_cross_checks(board, dictionary, row),
            rack: rack.counts(),
            tiles: Vec::with_capacity(BOARD_SIZE),
            placed: 0,
            anchor: 0,
            out: &mut *out,
        };

        for &anchor in &row_anchors {
            search.anchor = anchor;
            if anchor > 0 && board.is_occupied(row, anchor - 1) {
                let mut start = anchor;
                while start > 0 && board.is_occupied(row, start - 1) {
                    start -= 1;
                }
                let prefix: Vec<Tile> = (start..anchor).filter_map(|col| board.tile(row, col)).collect();
                let symbols: Vec<Symbol> = prefix.iter().map(|t| t.symbol).collect();
                if let Some(node) = dictionary.walk(&symbols) {
                    search.tiles = prefix;
                    search.extend_right(node, anchor);
                    search.tiles.clear();
                }
            } else {
                let mut limit = 0;
                let mut col = anchor;
                while col > 0 && !board.is_occupied(row, col - 1) && !is_anchor(board, row, col - 1) {
                    limit += 1;
                    col -= 1;
                }
                search.left_part(dictionary.root(), limit);
            }
        }
    }
}

/// Search state for one row. Recursion depth is bounded by the row length.
struct RowSearch<'a> {
    board: &'a Board,
    row: usize,
    direction: Direction,
    cross: [LetterSet; BOARD_SIZE],
    rack: RackCounts,
    /// Tiles of the word so far, existing ones included.
    tiles: Vec<Tile>,
    /// How many of `tiles` come from the rack.
    placed: usize,
    anchor: usize,
    out: &'a mut Vec<Play>,
}

impl<'a> RowSearch<'a> {
    /// Ways to lay `symbol` from the rack: as itself and/or as a blank.
    fn rack_options(&self, symbol: Symbol) -> ArrayVec<Tile, 2> {
        let mut options = ArrayVec::new();
        if self.rack.has(symbol) {
            options.push(Tile::new(symbol));
        }
        if self.rack.has(Symbol::WILDCARD) {
            options.push(Tile::blank(symbol));
        }
        options
    }

    fn push(&mut self, tile: Tile) {
        let source = if tile.is_blank { Symbol::WILDCARD } else { tile.symbol };
        self.rack.take(source);
        self.tiles.push(tile);
        self.placed += 1;
    }

    fn pop(&mut self) {
        if let Some(tile) = self.tiles.pop() {
            let source = if tile.is_blank { Symbol::WILDCARD } else { tile.symbol };
            self.rack.give(source);
            self.placed -= 1;
        }
    }

    /// Left parts only cover empty non-anchor cells, which have no cross-checks.
    fn left_part(&mut self, node: Node<'_>, limit: usize) {
        self.extend_right(node, self.anchor);
        if limit == 0 {
            return;
        }
        for child in node.children() {
            let Some(symbol) = child.symbol() else {
                continue;
            };
            for tile in self.rack_options(symbol) {
                self.push(tile);
                self.left_part(child, limit - 1);
                self.pop();
            }
        }
    }

    fn extend_right(&mut self, node: Node<'_>, col: usize) {
        let existing = self.board.tile(self.row, col);

        if existing.is_none()
            && col > self.anchor
            && node.is_terminal()
            && self.placed > 0
            && self.tiles.len() >= 2
        {
            self.emit(col);
        }
        if col >= BOARD_SIZE {
            return;
        }

        match existing {
            Some(tile) => {
                if let Some(next) = node.find_child(tile.symbol) {
                    self.tiles.push(tile);
                    self.extend_right(next, col + 1);
                    self.tiles.pop();
                }
            }
            None => {
                let allowed = self.cross[col];
                if allowed.is_empty() {
                    return;
                }
                for child in node.children() {
                    let Some(symbol) = child.symbol() else {
                        continue;
                    };
                    if !allowed.contains(symbol) {
                        continue;
                    }
                    for tile in self.rack_options(symbol) {
                        self.push(tile);
                        self.extend_right(child, col + 1);
                        self.pop();
                    }
                }
            }
        }
    }

    /// Record the word ending just before `end`.
    fn emit(&mut self, end: usize) {
        let start = end - self.tiles.len();
        let (row, col) = match self.direction {
            Direction::Horizontal => (self.row, start),
            Direction::Vertical => (start, self.row),
        };
        self.out.push(Play {
            tiles: self.tiles.clone(),
            row,
            col,
            direction: self.direction,
        });
    }
}
