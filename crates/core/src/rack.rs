//! Player rack: up to seven symbols, wildcards included.

use arrayvec::ArrayVec;

use crate::types::{parse_rack, word_to_string, Symbol, TileParseError, RACK_SIZE};

/// Slots in a per-symbol count table (29 symbols plus the wildcard).
pub const SYMBOL_SLOTS: usize = Symbol::COUNT + 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RackError {
    #[error("rack holds at most 7 tiles, got {0}")]
    TooManyTiles(usize),
    #[error(transparent)]
    Parse(#[from] TileParseError),
}

/// The host's rack, read-only input to the validator and the finder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    symbols: ArrayVec<Symbol, RACK_SIZE>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, RackError> {
        let symbols = ArrayVec::try_from(symbols).map_err(|_| RackError::TooManyTiles(symbols.len()))?;
        Ok(Self { symbols })
    }

    /// Parse rack text; `?` is a wildcard and case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplicate_scrabble_core::Rack;
    ///
    /// let rack = Rack::parse("CASA?").unwrap();
    /// assert_eq!(rack.len(), 5);
    /// assert_eq!(rack.blanks(), 1);
    /// assert!(Rack::parse("ABCDEFGH").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, RackError> {
        Self::from_symbols(&parse_rack(text.trim())?)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn blanks(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_wildcard()).count()
    }

    pub fn counts(&self) -> RackCounts {
        let mut counts = RackCounts::default();
        for &symbol in &self.symbols {
            counts.give(symbol);
        }
        counts
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&word_to_string(&self.symbols))
    }
}

/// Per-symbol multiset used while consuming rack tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RackCounts {
    counts: [u8; SYMBOL_SLOTS],
}

impl Default for RackCounts {
    fn default() -> Self {
        Self {
            counts: [0; SYMBOL_SLOTS],
        }
    }
}

impl RackCounts {
    pub fn count(&self, symbol: Symbol) -> u8 {
        self.counts[symbol.index()]
    }

    pub fn has(&self, symbol: Symbol) -> bool {
        self.count(symbol) > 0
    }

    /// Remove one `symbol`; false if none is left.
    #[inline]
    pub fn take(&mut self, symbol: Symbol) -> bool {
        let slot = &mut self.counts[symbol.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    #[inline]
    pub fn give(&mut self, symbol: Symbol) {
        self.counts[symbol.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }
}
