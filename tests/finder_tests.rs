//! Finder tests - every candidate must be a move the validator accepts

use duplicate_scrabble::core::{score_move, Bag, Board, DealRng, MoveCandidate, Rack, ScoringRules};
use duplicate_scrabble::dict::Dictionary;
use duplicate_scrabble::engine::{find_best_moves, find_best_moves_with, SearchConfig, MAX_CANDIDATES};
use duplicate_scrabble::types::{Direction, Symbol, BOARD_SIZE};

const WORDS: &str = "
A AS ES SA SE NO NI IO OU UN EN AL LA LE LI ERA ERES SOL SOLS SAL SALS MAR MARS
CA CAS CASA CASAS CASES CASETA CASETES ACA ARA ARES ESSA ESSES ROSA ROSES
TAN TANT TOT TOTS TERRA TERRES NOU NOUS NOVA NOVES PAL·LA PAL·LES ANY ANYS
QUAN QUE QUI FAÇANA DONA DONES OLI OLIS ILLA ILLES LLOC SOTA SOTRAC
";

fn dict() -> Dictionary {
    Dictionary::from_words("test", WORDS.split_whitespace()).unwrap()
}

fn board_from(rows: &[(usize, &str)]) -> Board {
    let mut lines = vec![".".repeat(BOARD_SIZE); BOARD_SIZE];
    for &(row, text) in rows {
        lines[row] = text.to_string();
    }
    Board::from_rows(&lines).unwrap()
}

fn assert_validator_agrees(board: &Board, rack: &Rack, dictionary: &Dictionary, moves: &[MoveCandidate]) {
    for candidate in moves {
        let rescored = score_move(
            board,
            &candidate.tiles,
            rack,
            candidate.row,
            candidate.col,
            candidate.direction,
            Some(dictionary),
            &ScoringRules::default(),
        );
        assert!(rescored.is_valid, "{candidate}: {:?}", rescored.error);
        assert_eq!(rescored.score, candidate.score, "{candidate}");
        assert!(candidate.score > 0);
    }
}

#[test]
fn test_finder_moves_are_valid_on_empty_board() {
    let d = dict();
    let rack = Rack::parse("CASETES").unwrap();
    let moves = find_best_moves(&Board::new(), &rack, Some(&d), 0);
    assert!(!moves.is_empty());
    assert_validator_agrees(&Board::new(), &rack, &d, &moves);

    // Starting on a double letter doubles the C: (10 * 2) + 50. The vertical play at
    // (3,7) sorts ahead of the horizontal one at (7,3).
    let top = &moves[0];
    assert_eq!(top.word_text(), "CASETES");
    assert_eq!(top.score, 70);
    assert_eq!((top.row, top.col, top.direction), (3, 7, Direction::Vertical));
    assert_eq!(moves[1].score, 70);
}

#[test]
fn test_finder_moves_are_valid_mid_game() {
    let d = dict();
    let board = board_from(&[
        (5, ".........S....."),
        (6, ".........O....."),
        (7, ".......CASA...."),
        (8, ".........A....."),
    ]);
    let rack = Rack::parse("ERTO?NS").unwrap();
    let moves = find_best_moves(&board, &rack, Some(&d), 0);
    assert!(!moves.is_empty());
    assert_validator_agrees(&board, &rack, &d, &moves);
    assert!(moves.len() <= MAX_CANDIDATES);
}

#[test]
fn test_vertical_candidates_use_board_coordinates() {
    let d = dict();
    let board = board_from(&[(7, ".......CASA....")]);
    let rack = Rack::parse("S").unwrap();
    let moves = find_best_moves(&board, &rack, Some(&d), 0);

    let vertical: Vec<&MoveCandidate> = moves
        .iter()
        .filter(|m| m.direction == Direction::Vertical)
        .collect();
    assert!(!vertical.is_empty());
    for candidate in vertical {
        // Every occupied cell the candidate covers must agree with the board.
        for ((row, col), tile) in candidate.positions().zip(&candidate.tiles) {
            if let Some(existing) = board.tile(row, col) {
                assert_eq!(existing.symbol, tile.symbol, "{candidate}");
            }
        }
        assert!(candidate.positions().any(|(row, col)| !board.is_occupied(row, col)));
    }
}

#[test]
fn test_duplicates_collapse_to_best_score() {
    let d = dict();
    let board = board_from(&[(7, ".......CASA....")]);
    // With a wildcard and a real S, CASAS can be played two ways; only the better remains.
    let rack = Rack::parse("S?").unwrap();
    let moves = find_best_moves(&board, &rack, Some(&d), 0);
    let casas: Vec<&MoveCandidate> = moves
        .iter()
        .filter(|m| m.word_text() == "CASAS" && m.direction == Direction::Horizontal)
        .collect();
    assert_eq!(casas.len(), 1);
    assert_eq!(casas[0].score, 7);
    assert_eq!(casas[0].tiles_text(), "CASAS");
}

#[test]
fn test_limit_and_config() {
    let d = dict();
    let rack = Rack::parse("CASETES").unwrap();
    let all = find_best_moves(&Board::new(), &rack, Some(&d), 0);
    let top3 = find_best_moves_with(&Board::new(), &rack, Some(&d), &SearchConfig::with_limit(3));
    assert_eq!(top3.len(), 3);
    assert_eq!(&all[..3], top3.as_slice());
}

#[test]
fn test_simulated_game_keeps_bag_consistent() {
    let d = dict();
    let mut board = Board::new();
    let mut rng = DealRng::new(2024);
    let mut rack = Rack::new();

    for turn in 0..6 {
        let mut bag = Bag::unseen(&board, &[rack.clone()]).unwrap();
        rack = bag.refill(&rack, &mut rng).unwrap();
        assert_eq!(bag.total() + rack.len() + board.tile_count(), 100);

        let moves = find_best_moves(&board, &rack, Some(&d), 1);
        let Some(best) = moves.first() else {
            // Unplayable rack: throw it back and deal again.
            rack = Rack::new();
            continue;
        };
        assert_validator_agrees(&board, &rack, &d, &moves);

        let mut left: Vec<Symbol> = rack.symbols().to_vec();
        for (tile, (row, col)) in best.tiles.iter().zip(best.positions()) {
            if board.is_occupied(row, col) {
                continue;
            }
            let source = if tile.is_blank { Symbol::WILDCARD } else { tile.symbol };
            let at = left.iter().position(|&s| s == source).unwrap();
            left.remove(at);
        }

        let before = board.tile_count();
        assert!(board.apply_move(best), "turn {turn}: {best}");
        assert_eq!(board.tile_count() - before, rack.len() - left.len());
        rack = Rack::from_symbols(&left).unwrap();
    }

    assert!(board.center_covered());
}
