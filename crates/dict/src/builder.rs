//! Pointer-based trie used only to produce payloads.
//!
//! Words go in one at a time; `encode` lays the nodes out in level order and emits the
//! tape and rank directory that [`Dictionary::load`](crate::Dictionary::load) reads back.

use std::collections::{BTreeMap, VecDeque};

use duplicate_scrabble_types::{parse_word, Symbol, TileParseError};

use crate::bits::{BitString, BitWriter};
use crate::rank::RankDirectory;
use crate::DictionaryPayload;

#[derive(Debug, Clone, Default)]
struct BuilderNode {
    /// Children keyed by symbol code, so iteration follows symbol order.
    children: BTreeMap<u8, usize>,
    terminal: bool,
}

/// A mutable, in-memory trie optimized for insertion.
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    nodes: Vec<BuilderNode>,
    words: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuilderNode::default()],
            words: 0,
        }
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word. Empty words and words containing the wildcard are ignored;
    /// returns whether the word was new.
    pub fn insert(&mut self, word: &[Symbol]) -> bool {
        if word.is_empty() || word.iter().any(|s| s.is_wildcard()) {
            return false;
        }

        let mut node_idx = 0;
        for symbol in word {
            let code = symbol.code();
            node_idx = match self.nodes[node_idx].children.get(&code) {
                Some(&id) => id,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(BuilderNode::default());
                    self.nodes[node_idx].children.insert(code, id);
                    id
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        let is_new = !node.terminal;
        node.terminal = true;
        if is_new {
            self.words += 1;
        }
        is_new
    }

    /// Insert a word in tile notation. Case is ignored; blank marks mean nothing here.
    pub fn insert_text(&mut self, text: &str) -> Result<bool, TileParseError> {
        let word: Vec<Symbol> = parse_word(text.trim())?.iter().map(|t| t.symbol).collect();
        Ok(self.insert(&word))
    }

    /// Node ids in level order, each with its symbol code.
    fn level_order(&self) -> Vec<(usize, u8)> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([(0usize, 0u8)]);
        while let Some((id, code)) = queue.pop_front() {
            order.push((id, code));
            for (&child_code, &child) in &self.nodes[id].children {
                queue.push_back((child, child_code));
            }
        }
        order
    }

    /// Serialize into a loadable payload.
    pub fn encode(&self, version: &str) -> DictionaryPayload {
        let order = self.level_order();
        let mut bits = BitWriter::new();

        bits.write(0b10, 2);
        for &(id, _) in &order {
            for _ in 0..self.nodes[id].children.len() {
                bits.write(1, 1);
            }
            bits.write(0, 1);
        }
        let structural_bits = bits.len();

        for &(id, code) in &order {
            let terminal = if self.nodes[id].terminal { 0x20 } else { 0 };
            bits.write(terminal | code as u32, 6);
        }

        let trie = bits.finish();
        // The tape was just produced by BitWriter, so it always decodes.
        let directory = BitString::decode(&trie)
            .map(|data| RankDirectory::build(&data, structural_bits))
            .unwrap_or_default();

        DictionaryPayload {
            trie,
            directory,
            node_count: order.len(),
            version: version.to_string(),
        }
    }
}
