//! Serialized dictionary payload as shipped by the host.

use serde::{Deserialize, Serialize};

use crate::DictionaryError;

/// The four fields a host ships to load a dictionary.
///
/// `trie` and `directory` are 6-bit encoded bit tapes. They must be byte-exact with what
/// [`TrieBuilder`](crate::TrieBuilder) produced; any reformatting shifts the offsets the
/// rank directory relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryPayload {
    pub trie: String,
    pub directory: String,
    pub node_count: usize,
    pub version: String,
}

impl DictionaryPayload {
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(json)
            .map_err(|e| DictionaryError::InvalidPayload(format!("malformed payload json: {e}")))
    }

    pub fn to_json(&self) -> String {
        // Plain strings and integers; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
