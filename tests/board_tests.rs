//! Board tests - grid, premium layout and the board text format

use duplicate_scrabble::core::{Board, BoardParseError};
use duplicate_scrabble::types::{
    parse_word, premium_at, Multiplier, Symbol, Tile, TileParseError, BOARD_SIZE, CENTER,
};

fn empty_rows() -> Vec<String> {
    vec![".".repeat(BOARD_SIZE); BOARD_SIZE]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert_eq!(board.tile_count(), 0);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert!(Board::in_bounds(row, col));
            assert_eq!(board.tile(row, col), None);
        }
    }
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.cell(BOARD_SIZE, 0), None);
    assert_eq!(board.cell(0, BOARD_SIZE), None);
    assert!(!board.set(BOARD_SIZE, 3, Some(Tile::new(Symbol::QU))));
    assert!(board.is_empty());
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    let ny = Tile::new(Symbol::NY);
    assert!(board.set(3, 11, Some(ny)));
    assert_eq!(board.tile(3, 11), Some(ny));
    assert!(board.is_occupied(3, 11));
    assert!(board.has_neighbor(3, 10));
    assert!(board.has_neighbor(4, 11));
    assert!(!board.has_neighbor(4, 10));

    assert!(board.set(3, 11, None));
    assert!(board.is_empty());
}

#[test]
fn test_premium_layout_counts() {
    let mut counts = [0usize; 6];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let slot = match premium_at(row, col) {
                Multiplier::Normal => 0,
                Multiplier::DoubleLetter => 1,
                Multiplier::TripleLetter => 2,
                Multiplier::DoubleWord => 3,
                Multiplier::TripleWord => 4,
                Multiplier::Center => 5,
            };
            counts[slot] += 1;
        }
    }
    assert_eq!(counts, [225 - 24 - 12 - 16 - 8 - 1, 24, 12, 16, 8, 1]);
    assert_eq!(premium_at(CENTER, CENTER), Multiplier::Center);
    assert_eq!(premium_at(0, 0), Multiplier::TripleWord);
    assert_eq!(premium_at(14, 7), Multiplier::TripleWord);
}

#[test]
fn test_cells_report_multipliers() {
    let board = Board::new();
    let cell = board.cell(1, 5).unwrap();
    assert_eq!(cell.multiplier, Multiplier::TripleLetter);
    assert_eq!(board.cells().count(), 225);
    assert_eq!(
        board
            .cells()
            .filter(|c| c.multiplier == Multiplier::DoubleWord)
            .count(),
        16
    );
}

#[test]
fn test_text_format_round_trip() {
    let mut rows = empty_rows();
    rows[7] = "....PAL·LA.......".to_string();
    rows[8] = "......quANYs.....".to_string();
    let board = Board::from_rows(&rows).unwrap();

    assert_eq!(board.tile(7, 6).map(|t| t.symbol), Some(Symbol::L_L));
    let qu = board.tile(8, 6).unwrap();
    assert_eq!(qu.symbol, Symbol::QU);
    assert!(qu.is_blank);
    assert_eq!(board.tile_count(), 4 + 4);

    assert_eq!(board.to_rows(), rows);
    assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
}

#[test]
fn test_text_format_errors() {
    assert_eq!(
        Board::from_rows(&empty_rows()[..14]),
        Err(BoardParseError::RowCount(14))
    );

    let mut rows = empty_rows();
    rows[2] = "CASA".to_string();
    assert_eq!(
        Board::from_rows(&rows),
        Err(BoardParseError::RowLength { row: 2, len: 4 })
    );

    let mut rows = empty_rows();
    rows[4] = "....CASA!......".to_string();
    assert_eq!(
        Board::from_rows(&rows),
        Err(BoardParseError::Tile {
            row: 4,
            source: TileParseError::UnknownCharacter { ch: '!', offset: 8 },
        })
    );
}

#[test]
fn test_transpose_swaps_axes() {
    let mut board = Board::new();
    for (i, tile) in parse_word("CASA").unwrap().into_iter().enumerate() {
        board.set(2, 5 + i, Some(tile));
    }
    let transposed = board.transpose();
    for i in 0..4 {
        assert_eq!(transposed.tile(5 + i, 2), board.tile(2, 5 + i));
    }
    assert_eq!(transposed.transpose(), board);
}
