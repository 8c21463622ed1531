//! Tile bag accounting
//!
//! The bag is never stored; it is whatever the distribution leaves after the tiles on the
//! board and in the racks are taken out. A blank on the board uses up a wildcard, not the
//! letter it shows.
//!
//! Also provides a small LCG so hosts can deal racks deterministically.

use serde::Serialize;

use crate::rack::{Rack, RackError, SYMBOL_SLOTS};
use crate::types::{Symbol, Tile, RACK_SIZE};
use crate::Board;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BagError {
    #[error("more {symbol} tiles in play than the bag holds ({available})")]
    Overdrawn { symbol: Symbol, available: u8 },
}

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would repeat forever
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = (self.next_u32() % (i as u32 + 1)) as usize;
            slice.swap(i, j);
        }
    }
}

/// Multiset of unseen tiles, wildcards included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    counts: [u8; SYMBOL_SLOTS],
}

impl Default for Bag {
    fn default() -> Self {
        Self::full()
    }
}

impl Bag {
    /// A fresh bag: all 100 tiles.
    pub fn full() -> Self {
        let mut counts = [0; SYMBOL_SLOTS];
        for symbol in Symbol::alphabet().chain(std::iter::once(Symbol::WILDCARD)) {
            counts[symbol.index()] = symbol.initial_count();
        }
        Self { counts }
    }

    /// Tiles not on `board` and not in any of `racks`.
    ///
    /// # Examples
    ///
    /// ```
    /// use duplicate_scrabble_core::{Bag, Board, Rack};
    ///
    /// let rack = Rack::parse("AAE??").unwrap();
    /// let bag = Bag::unseen(&Board::new(), &[rack]).unwrap();
    /// assert_eq!(bag.total(), 95);
    /// assert_eq!(bag.blanks(), 0);
    /// ```
    pub fn unseen(board: &Board, racks: &[Rack]) -> Result<Self, BagError> {
        let mut bag = Self::full();
        for tile in board.tiles() {
            bag.remove_tile(tile)?;
        }
        for rack in racks {
            for &symbol in rack.symbols() {
                bag.remove(symbol)?;
            }
        }
        Ok(bag)
    }

    pub fn count(&self, symbol: Symbol) -> u8 {
        self.counts[symbol.index()]
    }

    pub fn blanks(&self) -> u8 {
        self.count(Symbol::WILDCARD)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Take one `symbol` out of the bag.
    pub fn remove(&mut self, symbol: Symbol) -> Result<(), BagError> {
        let slot = &mut self.counts[symbol.index()];
        if *slot == 0 {
            return Err(BagError::Overdrawn {
                symbol,
                available: symbol.initial_count(),
            });
        }
        *slot -= 1;
        Ok(())
    }

    /// Take a placed tile out of the bag; blanks count against the wildcards.
    pub fn remove_tile(&mut self, tile: Tile) -> Result<(), BagError> {
        if tile.is_blank {
            self.remove(Symbol::WILDCARD)
        } else {
            self.remove(tile.symbol)
        }
    }

    /// Every unseen tile, in symbol code order.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut out = Vec::with_capacity(self.total());
        for (code, &count) in self.counts.iter().enumerate() {
            if let Some(symbol) = Symbol::from_code(code as u8) {
                out.extend(std::iter::repeat(symbol).take(count as usize));
            }
        }
        out
    }

    /// Non-zero `(symbol, count)` pairs in code order.
    pub fn entries(&self) -> Vec<BagEntry> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .filter_map(|(code, &count)| {
                Symbol::from_code(code as u8).map(|symbol| BagEntry { symbol, count })
            })
            .collect()
    }

    /// Draw up to `n` random tiles.
    pub fn draw(&mut self, n: usize, rng: &mut DealRng) -> Vec<Symbol> {
        let mut pool = self.symbols();
        rng.shuffle(&mut pool);
        pool.truncate(n);
        for &symbol in &pool {
            self.counts[symbol.index()] -= 1;
        }
        pool
    }

    /// Top `rack` up to seven tiles from the bag.
    pub fn refill(&mut self, rack: &Rack, rng: &mut DealRng) -> Result<Rack, RackError> {
        let missing = RACK_SIZE.saturating_sub(rack.len());
        let mut symbols = rack.symbols().to_vec();
        symbols.extend(self.draw(missing, rng));
        Rack::from_symbols(&symbols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BagEntry {
    pub symbol: Symbol,
    pub count: u8,
}
