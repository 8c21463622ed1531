//! Anchors and cross-check sets for one row of the board.
//!
//! The search only ever lays words out horizontally; vertical plays are found on the
//! transposed board. So a cross-check is always about the vertical word through a cell.

use arrayvec::ArrayVec;

use duplicate_scrabble_core::Board;
use duplicate_scrabble_dict::Dictionary;
use duplicate_scrabble_types::{Symbol, BOARD_SIZE, CENTER};

/// Set of alphabet symbols as a bit mask over symbol codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const ALL: LetterSet = LetterSet((1 << Symbol::COUNT) - 1);

    #[inline]
    pub fn contains(self, symbol: Symbol) -> bool {
        !symbol.is_wildcard() && self.0 & (1 << symbol.code()) != 0
    }

    #[inline]
    pub fn insert(&mut self, symbol: Symbol) {
        if !symbol.is_wildcard() {
            self.0 |= 1 << symbol.code();
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Symbol> {
        Symbol::alphabet().filter(move |&s| self.contains(s))
    }
}

/// Whether a word may start its new tiles at (row, col).
///
/// Anchors are empty cells next to a tile; on an empty board the center is the only one.
pub fn is_anchor(board: &Board, row: usize, col: usize) -> bool {
    if board.is_occupied(row, col) {
        return false;
    }
    if board.is_empty() {
        return row == CENTER && col == CENTER;
    }
    board.has_neighbor(row, col)
}

pub fn anchors(board: &Board) -> Vec<(usize, usize)> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .filter(|&(row, col)| is_anchor(board, row, col))
        .collect()
}

/// Letters that may go in each cell of `row` without breaking the vertical word there.
///
/// Occupied cells get [`LetterSet::EMPTY`]; empty cells with nothing above or below are
/// unconstrained.
pub fn row_cross_checks(board: &Board, dictionary: &Dictionary, row: usize) -> [LetterSet; BOARD_SIZE] {
    let mut checks = [LetterSet::EMPTY; BOARD_SIZE];
    for (col, check) in checks.iter_mut().enumerate() {
        if !board.is_occupied(row, col) {
            *check = cross_check(board, dictionary, row, col);
        }
    }
    checks
}

/// Letters that complete a valid vertical word through the empty cell (row, col).
pub fn cross_check(board: &Board, dictionary: &Dictionary, row: usize, col: usize) -> LetterSet {
    let above = column_run(board, row, col, false);
    let below = column_run(board, row, col, true);
    if above.is_empty() && below.is_empty() {
        return LetterSet::ALL;
    }

    let mut set = LetterSet::EMPTY;
    let Some(prefix) = dictionary.walk(&above) else {
        return set;
    };
    for child in prefix.children() {
        let Some(symbol) = child.symbol() else {
            continue;
        };
        let completes = below
            .iter()
            .try_fold(child, |node, &s| node.find_child(s))
            .is_some_and(|node| node.is_terminal());
        if completes {
            set.insert(symbol);
        }
    }
    set
}

/// Symbols of the tiles directly above or below (row, col), in reading order.
fn column_run(board: &Board, row: usize, col: usize, downward: bool) -> ArrayVec<Symbol, BOARD_SIZE> {
    let mut run = ArrayVec::new();
    if downward {
        let mut r = row + 1;
        while let Some(tile) = board.tile(r, col) {
            run.push(tile.symbol);
            r += 1;
        }
    } else {
        let mut r = row;
        while r > 0 {
            r -= 1;
            match board.tile(r, col) {
                Some(tile) => run.push(tile.symbol),
                None => break,
            }
        }
        run.reverse();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use duplicate_scrabble_types::parse_word;

    fn sym(ch: char) -> Symbol {
        Symbol::from_char(ch).unwrap()
    }

    fn board_with(row: usize, col: usize, word: &str) -> Board {
        let mut board = Board::new();
        for (i, tile) in parse_word(word).unwrap().into_iter().enumerate() {
            board.set(row, col + i, Some(tile));
        }
        board
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        set.insert(sym('A'));
        set.insert(Symbol::NY);
        set.insert(Symbol::WILDCARD);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Symbol::NY));
        assert!(!set.contains(Symbol::WILDCARD));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![sym('A'), Symbol::NY]);
        assert_eq!(LetterSet::ALL.len(), 29);
    }

    #[test]
    fn center_is_the_only_anchor_on_empty_board() {
        assert_eq!(anchors(&Board::new()), vec![(CENTER, CENTER)]);
    }

    #[test]
    fn anchors_surround_tiles() {
        let board = board_with(7, 7, "CA");
        let found = anchors(&board);
        // left, right, and above/below each of the two tiles
        assert_eq!(found.len(), 6);
        assert!(found.contains(&(7, 6)));
        assert!(found.contains(&(7, 9)));
        assert!(found.contains(&(6, 8)));
        assert!(!found.contains(&(7, 7)));
    }

    #[test]
    fn cross_check_completes_vertical_words() {
        let dict = Dictionary::from_words("t", ["AS", "ES", "SA"]).unwrap();
        let board = board_with(7, 7, "S");
        // Above the S: letters X with XS a word.
        let above = cross_check(&board, &dict, 6, 7);
        assert_eq!(above.iter().collect::<Vec<_>>(), vec![sym('A'), sym('E')]);
        // Below the S: SX.
        let below = cross_check(&board, &dict, 8, 7);
        assert_eq!(below.iter().collect::<Vec<_>>(), vec![sym('A')]);
        // Unconstrained cell
        assert_eq!(cross_check(&board, &dict, 0, 0), LetterSet::ALL);
    }

    #[test]
    fn cross_check_between_tiles() {
        let dict = Dictionary::from_words("t", ["CASA", "COSA"]).unwrap();
        let mut board = Board::new();
        board.set(5, 3, Some(parse_word("C").unwrap()[0]));
        board.set(7, 3, Some(parse_word("S").unwrap()[0]));
        board.set(8, 3, Some(parse_word("A").unwrap()[0]));
        let set = cross_check(&board, &dict, 6, 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![sym('A'), sym('O')]);

        let checks = row_cross_checks(&board, &dict, 6);
        assert_eq!(checks[3], set);
        assert_eq!(checks[0], LetterSet::ALL);
    }

    #[test]
    fn dead_prefix_allows_nothing() {
        let dict = Dictionary::from_words("t", ["AS"]).unwrap();
        let board = board_with(7, 7, "X");
        assert!(cross_check(&board, &dict, 8, 7).is_empty());
    }
}
