//! Tiles and the tile notation used by hosts.
//!
//! Words are written in upper case with the merged graphemes spelled out (`QU`, `NY`,
//! `L·L`). Lower case marks a blank standing in for that symbol: `"CAsA"` is CASA with a
//! blank playing the S.

use serde::{Deserialize, Serialize};

use crate::Symbol;

const MIDDLE_DOT: char = '·';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileParseError {
    #[error("unknown character {ch:?} at byte {offset}")]
    UnknownCharacter { ch: char, offset: usize },
    #[error("wildcard at byte {offset} must be assigned a letter")]
    UnassignedWildcard { offset: usize },
    #[error("tile index {index} out of range for {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A tile on the board or in a candidate move.
///
/// For a blank, `symbol` is the letter it represents once placed or previewed, and its
/// value is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub symbol: Symbol,
    pub is_blank: bool,
}

impl Tile {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            is_blank: false,
        }
    }

    pub fn blank(symbol: Symbol) -> Self {
        Self {
            symbol,
            is_blank: true,
        }
    }

    /// Points this tile is worth before any multiplier.
    pub fn value(&self) -> u32 {
        if self.is_blank {
            0
        } else {
            self.symbol.value()
        }
    }

    /// Display form; blanks are shown in lower case.
    pub fn display(&self) -> String {
        if self.is_blank {
            self.symbol.display().to_lowercase()
        } else {
            self.symbol.display().to_string()
        }
    }
}

/// One matched symbol in a piece of text.
#[derive(Debug, Clone, Copy)]
struct Token {
    symbol: Symbol,
    lower: bool,
    start: usize,
    end: usize,
}

fn eq_ignore_case(ch: Option<&(usize, char)>, upper: char) -> bool {
    matches!(ch, Some(&(_, c)) if c.to_uppercase().eq(std::iter::once(upper)))
}

/// Greedy longest-match tokenizer: ligature, then digraphs, then one character.
fn scan(text: &str) -> Result<Vec<Token>, TileParseError> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let (start, first) = chars[i];
        let lower = first.is_lowercase();

        let (symbol, width) = if eq_ignore_case(chars.get(i), 'L')
            && matches!(chars.get(i + 1), Some(&(_, MIDDLE_DOT)))
            && eq_ignore_case(chars.get(i + 2), 'L')
        {
            (Symbol::L_L, 3)
        } else if eq_ignore_case(chars.get(i), 'Q') && eq_ignore_case(chars.get(i + 1), 'U') {
            (Symbol::QU, 2)
        } else if eq_ignore_case(chars.get(i), 'N') && eq_ignore_case(chars.get(i + 1), 'Y') {
            (Symbol::NY, 2)
        } else {
            let symbol = Symbol::from_char(first).ok_or(TileParseError::UnknownCharacter {
                ch: first,
                offset: start,
            })?;
            (symbol, 1)
        };

        let end = chars
            .get(i + width)
            .map(|&(offset, _)| offset)
            .unwrap_or(text.len());
        tokens.push(Token {
            symbol,
            lower,
            start,
            end,
        });
        i += width;
    }

    Ok(tokens)
}

/// Parse a word into tiles. Lower case marks a blank.
///
/// # Examples
///
/// ```
/// use duplicate_scrabble_types::{parse_word, Symbol};
///
/// let tiles = parse_word("quaNYs").unwrap();
/// assert_eq!(tiles.len(), 4);
/// assert_eq!(tiles[0].symbol, Symbol::QU);
/// assert!(tiles[0].is_blank);
/// assert_eq!(tiles[2].symbol, Symbol::NY);
/// assert!(!tiles[2].is_blank);
/// assert_eq!(tiles[0].value(), 0);
/// ```
pub fn parse_word(text: &str) -> Result<Vec<Tile>, TileParseError> {
    scan(text)?
        .into_iter()
        .map(|token| {
            if token.symbol.is_wildcard() {
                Err(TileParseError::UnassignedWildcard {
                    offset: token.start,
                })
            } else {
                Ok(Tile {
                    symbol: token.symbol,
                    is_blank: token.lower,
                })
            }
        })
        .collect()
}

/// Byte spans of each tile in `text`, matching [`parse_word`]'s tokenization.
///
/// # Examples
///
/// ```
/// use duplicate_scrabble_types::tile_indices;
///
/// assert_eq!(tile_indices("PAL·LA").unwrap(), vec![(0, 1), (1, 2), (2, 6), (6, 7)]);
/// ```
pub fn tile_indices(text: &str) -> Result<Vec<(usize, usize)>, TileParseError> {
    Ok(scan(text)?.into_iter().map(|t| (t.start, t.end)).collect())
}

/// Parse rack text into symbols. Case is ignored; `?` is a wildcard.
pub fn parse_rack(text: &str) -> Result<Vec<Symbol>, TileParseError> {
    Ok(scan(text)?.into_iter().map(|t| t.symbol).collect())
}

/// Flip the blank status of tile `index` by splicing its span's case.
///
/// # Examples
///
/// ```
/// use duplicate_scrabble_types::toggle_blank;
///
/// assert_eq!(toggle_blank("CAQUA", 2).unwrap(), "CAquA");
/// assert_eq!(toggle_blank("CAquA", 2).unwrap(), "CAQUA");
/// ```
pub fn toggle_blank(text: &str, index: usize) -> Result<String, TileParseError> {
    let tokens = scan(text)?;
    let token = tokens.get(index).ok_or(TileParseError::IndexOutOfRange {
        index,
        len: tokens.len(),
    })?;

    let span = &text[token.start..token.end];
    let replaced = if token.lower {
        span.to_uppercase()
    } else {
        span.to_lowercase()
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(&text[..token.start]);
    out.push_str(&replaced);
    out.push_str(&text[token.end..]);
    Ok(out)
}

/// Render symbols in upper-case display form.
pub fn word_to_string(word: &[Symbol]) -> String {
    word.iter().map(|s| s.display()).collect()
}

/// Render tiles in tile notation (blanks in lower case).
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles.iter().map(Tile::display).collect()
}
