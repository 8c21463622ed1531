//! Best-move finder
//!
//! Enumerates every legal play of a rack against a board and ranks them by score. The
//! search walks the dictionary trie directly, so only prefixes of real words are ever
//! explored, and cross-check sets prune letters that would break a perpendicular word.
//!
//! # Module Structure
//!
//! - [`cross_check`]: anchors and per-cell [`LetterSet`] cross-checks
//! - [`finder`]: anchor-based generation, validation, deduplication and ranking
//!
//! The finder is a pure function of board, rack and dictionary; it keeps no state between
//! calls and never panics on an unplayable position (it returns an empty list).

pub mod cross_check;
pub mod finder;

pub use cross_check::{anchors, cross_check, is_anchor, row_cross_checks, LetterSet};
pub use finder::{find_best_moves, find_best_moves_with, SearchConfig, MAX_CANDIDATES};
