//! The 29-symbol alphabet and the wildcard marker.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display forms, indexed by symbol code.
const DISPLAY: [&str; 30] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "Ç", "L·L", "NY", "?",
];

/// Face values, indexed by symbol code. K, W and Y have no tiles in the bag; they are
/// only reachable through a blank, which scores 0 anyway.
const VALUES: [u8; 30] = [
    1, 3, 2, 2, 1, 4, 3, 8, 1, 8, 10, 1, 2, 1, 1, 3, 8, 1, 1, 1, 1, 4, 10, 10, 10, 8, 10, 10, 10,
    0,
];

/// Tiles per symbol in a fresh bag (100 tiles, 2 of them blanks).
const DISTRIBUTION: [u8; 30] = [
    12, 2, 3, 3, 13, 1, 2, 1, 8, 1, 0, 4, 3, 6, 5, 2, 1, 8, 8, 5, 4, 1, 0, 1, 0, 1, 1, 1, 1, 2,
];

/// One alphabet symbol, or the wildcard marker.
///
/// Codes `0..=25` follow A-Z, where code 16 (Q's slot) is the `QU` digraph. Then
/// `26 = Ç`, `27 = L·L`, `28 = NY`. Code 29 is the wildcard and never appears in a
/// dictionary. Codes fit in the 5 bits the trie stores per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Number of real alphabet symbols (wildcard excluded).
    pub const COUNT: usize = 29;

    pub const QU: Symbol = Symbol(16);
    pub const C_CEDILLA: Symbol = Symbol(26);
    pub const L_L: Symbol = Symbol(27);
    pub const NY: Symbol = Symbol(28);

    /// Unassigned blank. Only meaningful in a rack.
    pub const WILDCARD: Symbol = Symbol(29);

    /// Symbol for a 5-bit code. Returns `None` for codes above the wildcard.
    pub const fn from_code(code: u8) -> Option<Symbol> {
        if code <= 29 {
            Some(Symbol(code))
        } else {
            None
        }
    }

    /// Symbol for a single upper- or lower-case character.
    ///
    /// A bare `Q` is promoted to `QU`; it never appears alone in this alphabet.
    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            'A'..='Z' => Some(Symbol(ch as u8 - b'A')),
            'a'..='z' => Some(Symbol(ch as u8 - b'a')),
            'Ç' | 'ç' => Some(Symbol::C_CEDILLA),
            '?' => Some(Symbol::WILDCARD),
            _ => None,
        }
    }

    /// Parse exactly one symbol from its text form (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use duplicate_scrabble_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_text("ny"), Some(Symbol::NY));
    /// assert_eq!(Symbol::from_text("L·L"), Some(Symbol::L_L));
    /// assert_eq!(Symbol::from_text("Q"), Some(Symbol::QU));
    /// assert_eq!(Symbol::from_text("?"), Some(Symbol::WILDCARD));
    /// assert_eq!(Symbol::from_text("AB"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Symbol> {
        let upper = text.to_uppercase();
        match upper.as_str() {
            "QU" => Some(Symbol::QU),
            "NY" => Some(Symbol::NY),
            "L·L" => Some(Symbol::L_L),
            _ => {
                let mut chars = upper.chars();
                let first = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Symbol::from_char(first)
            }
        }
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// Position of this symbol in per-symbol tables (`0..30`).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_wildcard(self) -> bool {
        self == Symbol::WILDCARD
    }

    /// Upper-case display form (`"QU"`, `"L·L"`, `"?"`, ...).
    pub fn display(self) -> &'static str {
        DISPLAY[self.index()]
    }

    /// Face value of a lettered tile showing this symbol.
    pub fn value(self) -> u32 {
        VALUES[self.index()] as u32
    }

    /// Number of tiles of this symbol in a fresh bag.
    pub fn initial_count(self) -> u8 {
        DISTRIBUTION[self.index()]
    }

    /// All 29 alphabet symbols in code order (wildcard excluded).
    pub fn alphabet() -> impl Iterator<Item = Symbol> {
        (0..Symbol::COUNT as u8).map(Symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Symbol::from_text(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown symbol: {text}")))
    }
}
