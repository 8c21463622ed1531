//! Succinct trie dictionary
//!
//! The word list is stored as two bit tapes instead of a node graph:
//!
//! - **data**: the level-order unary degree sequence of the trie (2n+1 bits) followed by
//!   one 6-bit record per node (terminal flag + 5-bit symbol code)
//! - **directory**: a two-level rank index (1024-bit outer blocks, 32-bit inner blocks)
//!   over the structural bits, so `rank` and `select` never scan the tape
//!
//! Navigation is pure index arithmetic: a node's children are a contiguous run located
//! with `select`. This keeps a dictionary of hundreds of thousands of words small and
//! fast to load, and lookups cheap enough for a best-move search that issues them by
//! the hundred thousand.
//!
//! # Module Structure
//!
//! - [`bits`]: 6-bit encoded bit tapes
//! - [`rank`]: rank/select directory
//! - [`trie`]: the frozen [`Dictionary`] and its [`Node`] cursor
//! - [`builder`]: [`TrieBuilder`], word list to payload
//! - [`payload`]: the serialized [`DictionaryPayload`]
//! - [`handle`]: process-wide [`DictionaryHandle`] with atomic hot-swap
//!
//! # Example
//!
//! ```
//! use duplicate_scrabble_dict::{Dictionary, DictionaryHandle, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! for word in ["CASA", "CASES", "PAL·LA"] {
//!     builder.insert_text(word).unwrap();
//! }
//! let payload = builder.encode("demo-1");
//!
//! let handle = DictionaryHandle::new();
//! let dict = handle.load(&payload).unwrap();
//! assert!(dict.contains_word("PAL·LA"));
//! assert!(!dict.contains_word("PALLA"));
//! assert_eq!(handle.version().as_deref(), Some("demo-1"));
//! ```

pub mod bits;
pub mod builder;
pub mod handle;
pub mod payload;
pub mod rank;
pub mod trie;

pub use duplicate_scrabble_types as types;

pub use builder::TrieBuilder;
pub use handle::{DictionaryHandle, LoadState};
pub use payload::DictionaryPayload;
pub use trie::{Dictionary, Node};

use duplicate_scrabble_types::TileParseError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("invalid dictionary payload: {0}")]
    InvalidPayload(String),
    #[error("invalid word in word list: {0}")]
    InvalidWord(#[from] TileParseError),
}
