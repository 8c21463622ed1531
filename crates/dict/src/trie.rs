//! Frozen succinct trie: level-order unary degree sequence plus per-node records.
//!
//! Tape layout for `n` nodes:
//!
//! ```text
//! [ 10 | 1..10 per node (one 1 per child, then 0) ]  2n+1 structural bits
//! [ terminal:1 symbol:5 ] x n                         node records, level order
//! ```
//!
//! Node `i`'s children are the contiguous run starting at `select0(i + 1) - i`; no child
//! pointers are stored.

use duplicate_scrabble_types::{parse_word, Symbol};

use crate::bits::{encoded_len, BitString};
use crate::rank::RankDirectory;
use crate::{DictionaryError, DictionaryPayload, TrieBuilder};

/// Bits per node record.
const NODE_BITS: usize = 6;

/// An immutable word list, loaded once from a payload.
#[derive(Debug, Clone)]
pub struct Dictionary {
    data: BitString,
    directory: RankDirectory,
    node_count: usize,
    letter_start: usize,
    version: String,
}

impl Dictionary {
    /// Decode and validate a payload.
    pub fn load(payload: &DictionaryPayload) -> Result<Self, DictionaryError> {
        let n = payload.node_count;
        if n == 0 {
            return Err(invalid("node count must be at least 1"));
        }

        let sizes = n
            .checked_mul(2)
            .and_then(|edges| edges.checked_add(1))
            .and_then(|structural| {
                n.checked_mul(NODE_BITS)
                    .and_then(|records| records.checked_add(structural))
                    .map(|total| (structural, total))
            });
        let Some((structural_bits, total_bits)) = sizes else {
            return Err(invalid("node count too large"));
        };
        let expected_trie = encoded_len(total_bits);
        if payload.trie.len() != expected_trie {
            return Err(invalid(format!(
                "trie is {} characters, {} nodes need {}",
                payload.trie.len(),
                n,
                expected_trie
            )));
        }
        let expected_dir = encoded_len(RankDirectory::encoded_bits(structural_bits));
        if payload.directory.len() != expected_dir {
            return Err(invalid(format!(
                "directory is {} characters, {} nodes need {}",
                payload.directory.len(),
                n,
                expected_dir
            )));
        }

        let data = BitString::decode(&payload.trie)?;
        if payload.directory != RankDirectory::build(&data, structural_bits) {
            return Err(invalid("directory does not match the degree sequence"));
        }
        let directory = RankDirectory::new(BitString::decode(&payload.directory)?, structural_bits);

        if data.get(0, 2) != 0b10 {
            return Err(invalid("degree sequence must start with the root marker"));
        }
        let ones = directory.rank(&data, true, structural_bits - 1);
        if ones != n {
            return Err(invalid(format!("degree sequence has {ones} edges for {n} nodes")));
        }

        let dictionary = Self {
            data,
            directory,
            node_count: n,
            letter_start: structural_bits,
            version: payload.version.clone(),
        };

        for index in 1..n {
            let code = dictionary.symbol_code(index);
            if code as usize >= Symbol::COUNT {
                return Err(invalid(format!("node {index} has symbol code {code}")));
            }
        }

        Ok(dictionary)
    }

    /// Build a dictionary straight from a word list.
    pub fn from_words<I, S>(version: &str, words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.insert_text(word.as_ref())?;
        }
        Self::load(&builder.encode(version))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn root(&self) -> Node<'_> {
        self.node(0)
    }

    fn symbol_code(&self, index: usize) -> u8 {
        self.data.get(self.letter_start + index * NODE_BITS + 1, 5) as u8
    }

    fn node(&self, index: usize) -> Node<'_> {
        let record = self.letter_start + index * NODE_BITS;
        let terminal = self.data.get(record, 1) == 1;
        let symbol = if index == 0 {
            None
        } else {
            Symbol::from_code(self.data.get(record + 1, 5) as u8)
        };

        // Validated at load: zero number `index + 2` always exists.
        let first_child = self
            .directory
            .select(&self.data, false, index + 1)
            .map_or(0, |p| p - index);
        let next_first_child = self
            .directory
            .select(&self.data, false, index + 2)
            .map_or(first_child, |p| p - index - 1);

        Node {
            trie: self,
            index,
            symbol,
            terminal,
            first_child,
            child_count: next_first_child.saturating_sub(first_child),
        }
    }

    /// Follow `prefix` from the root.
    pub fn walk(&self, prefix: &[Symbol]) -> Option<Node<'_>> {
        prefix
            .iter()
            .try_fold(self.root(), |node, &symbol| node.find_child(symbol))
    }

    /// Whether `word` is a complete word of the list.
    pub fn lookup(&self, word: &[Symbol]) -> bool {
        self.walk(word).is_some_and(|node| node.is_terminal())
    }

    /// [`lookup`](Self::lookup) on tile notation; unparseable text is never a word.
    pub fn contains_word(&self, text: &str) -> bool {
        match parse_word(text) {
            Ok(tiles) => {
                let word: Vec<Symbol> = tiles.iter().map(|t| t.symbol).collect();
                self.lookup(&word)
            }
            Err(_) => false,
        }
    }
}

fn invalid(reason: impl Into<String>) -> DictionaryError {
    DictionaryError::InvalidPayload(reason.into())
}

/// A trie position. Cheap to copy; children are decoded on demand.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    trie: &'a Dictionary,
    index: usize,
    symbol: Option<Symbol>,
    terminal: bool,
    first_child: usize,
    child_count: usize,
}

impl<'a> Node<'a> {
    /// Symbol on the edge into this node; `None` for the root.
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Whether the path to this node spells a complete word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// The `i`-th child in symbol order.
    pub fn child(&self, i: usize) -> Node<'a> {
        debug_assert!(i < self.child_count);
        self.trie.node(self.first_child + i)
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let (trie, first) = (self.trie, self.first_child);
        (first..first + self.child_count).map(move |index| trie.node(index))
    }

    /// Linear scan of the (at most 29) children. Only the matching child is decoded.
    pub fn find_child(&self, symbol: Symbol) -> Option<Node<'a>> {
        (self.first_child..self.first_child + self.child_count)
            .find(|&index| self.trie.symbol_code(index) == symbol.code())
            .map(|index| self.trie.node(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words("sample", ["CASA", "CAS", "CASES", "ACA", "QUAN", "PAL·LA"]).unwrap()
    }

    fn sym(text: &str) -> Vec<Symbol> {
        parse_word(text).unwrap().iter().map(|t| t.symbol).collect()
    }

    #[test]
    fn lookup_finds_words_only() {
        let dict = sample();
        for word in ["CASA", "CAS", "CASES", "ACA", "QUAN", "PAL·LA"] {
            assert!(dict.contains_word(word), "{word}");
        }
        for word in ["C", "CA", "CASAS", "CASE", "QUA", "PALLA", "", "ZZ"] {
            assert!(!dict.contains_word(word), "{word}");
        }
        assert!(dict.lookup(&sym("quan")));
        // A bare Q reads as QU.
        assert!(dict.contains_word("QAN"));
    }

    #[test]
    fn root_children_in_symbol_order() {
        let dict = sample();
        let root = dict.root();
        assert_eq!(root.symbol(), None);
        assert!(!root.is_terminal());
        let firsts: Vec<Symbol> = root.children().filter_map(|c| c.symbol()).collect();
        assert_eq!(firsts, sym("ACPQU"));
        assert_eq!(root.child_count(), 4);
        assert_eq!(root.child(1).symbol(), Some(sym("C")[0]));
    }

    #[test]
    fn walk_reaches_inner_nodes() {
        let dict = sample();
        let node = dict.walk(&sym("CAS")).unwrap();
        assert!(node.is_terminal());
        let next: Vec<Symbol> = node.children().filter_map(|c| c.symbol()).collect();
        assert_eq!(next, sym("AE"));
        assert!(dict.walk(&sym("CAX")).is_none());
    }

    #[test]
    fn load_rejects_inconsistent_payloads() {
        let mut builder = TrieBuilder::new();
        builder.insert_text("CASA").unwrap();
        let good = builder.encode("v");

        let mut truncated = good.clone();
        truncated.trie.pop();
        assert!(matches!(
            Dictionary::load(&truncated),
            Err(DictionaryError::InvalidPayload(_))
        ));

        let mut wrong_count = good.clone();
        wrong_count.node_count += 3;
        assert!(Dictionary::load(&wrong_count).is_err());

        let mut zero = good.clone();
        zero.node_count = 0;
        assert!(Dictionary::load(&zero).is_err());

        let mut garbage = good.clone();
        garbage.trie = "*".repeat(good.trie.len());
        assert!(Dictionary::load(&garbage).is_err());

        let mut no_root = good;
        no_root.trie.replace_range(0..1, "A");
        assert!(Dictionary::load(&no_root).is_err());
    }

    #[test]
    fn load_rejects_tampered_directory() {
        let letters = "ABCDEFGH";
        let mut builder = TrieBuilder::new();
        for a in letters.chars() {
            for b in letters.chars() {
                for c in letters.chars() {
                    builder.insert_text(&format!("{a}{b}{c}")).unwrap();
                }
            }
        }
        let good = builder.encode("grid");
        assert_eq!(good.node_count, 585);
        assert!(Dictionary::load(&good).unwrap().contains_word("ABC"));

        let mut tampered = good;
        tampered.directory.replace_range(0..1, "_");
        assert!(matches!(
            Dictionary::load(&tampered),
            Err(DictionaryError::InvalidPayload(_))
        ));
    }

    #[test]
    fn load_rejects_oversized_node_count() {
        let mut builder = TrieBuilder::new();
        builder.insert_text("CASA").unwrap();
        let mut huge = builder.encode("v");
        huge.node_count = usize::MAX / 4;
        assert!(matches!(
            Dictionary::load(&huge),
            Err(DictionaryError::InvalidPayload(_))
        ));
    }
}
