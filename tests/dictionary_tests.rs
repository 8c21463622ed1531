//! Dictionary tests - builder, payload, loader and handle through the facade crate

use std::sync::Arc;

use duplicate_scrabble::dict::{
    Dictionary, DictionaryError, DictionaryHandle, DictionaryPayload, LoadState, TrieBuilder,
};
use duplicate_scrabble::types::{parse_word, Symbol};

const WORDS: [&str; 12] = [
    "CASA", "CASES", "CAS", "ACA", "AS", "QUAN", "PAL·LA", "ANYS", "FAÇANA", "COL·LECCIÓ", "ESSA",
    "SA",
];

fn symbols(text: &str) -> Vec<Symbol> {
    parse_word(text).unwrap().iter().map(|t| t.symbol).collect()
}

fn payload(version: &str, words: &[&str]) -> DictionaryPayload {
    let mut builder = TrieBuilder::new();
    for word in words {
        let _ = builder.insert_text(word);
    }
    builder.encode(version)
}

#[test]
fn test_built_words_are_found() {
    let dict = Dictionary::load(&payload("v1", &WORDS[..9])).unwrap();
    for word in &WORDS[..9] {
        assert!(dict.contains_word(word), "{word} should be found");
    }
    for word in ["CASAS", "CA", "PALLA", "ANY", "QUA", "FACANA", ""] {
        assert!(!dict.contains_word(word), "{word} should not be found");
    }
}

#[test]
fn test_unparseable_words_are_skipped_by_builder() {
    // Ó is not in the alphabet, so COL·LECCIÓ is rejected at insert time.
    let mut builder = TrieBuilder::new();
    assert!(builder.insert_text("COL·LECCIÓ").is_err());
    assert!(builder.insert_text("COL·LECCIO").unwrap());
    let dict = Dictionary::load(&builder.encode("v")).unwrap();
    assert!(dict.contains_word("col·leccio"));
}

#[test]
fn test_digraphs_are_single_trie_edges() {
    let dict = Dictionary::from_words("v", ["ANYS", "PAL·LA"]).unwrap();
    let any = dict.walk(&symbols("ANY")).unwrap();
    assert_eq!(any.symbol(), Some(Symbol::NY));
    assert!(!any.is_terminal());
    // root -> A -> NY: two steps, not three
    assert!(dict.walk(&[Symbol::from_char('A').unwrap(), Symbol::NY]).is_some());
    assert!(dict.walk(&symbols("AN")).is_none());
}

#[test]
fn test_children_are_in_symbol_order() {
    let dict = Dictionary::from_words("v", ["SA", "AS", "NY", "ÇA", "QUE"]).unwrap();
    let root = dict.root();
    assert_eq!(root.symbol(), None);
    assert_eq!(root.child_count(), 5);
    let codes: Vec<u8> = (0..root.child_count())
        .map(|i| root.child(i).symbol().unwrap().code())
        .collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
    assert_eq!(root.child(4).symbol(), Some(Symbol::NY));
    assert_eq!(root.children().count(), 5);
}

#[test]
fn test_payload_json_round_trip() {
    let original = payload("2024-06", &WORDS[..9]);
    let json = serde_json::to_string(&original).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["nodeCount"], original.node_count);
    assert_eq!(value["version"], "2024-06");

    let back = DictionaryPayload::from_json(&json).unwrap();
    let dict = Dictionary::load(&back).unwrap();
    assert_eq!(dict.version(), "2024-06");
    assert!(dict.contains_word("FAÇANA"));
}

#[test]
fn test_corrupt_payloads_are_rejected() {
    let good = payload("v", &WORDS[..6]);

    let mut bad_char = good.clone();
    bad_char.trie.replace_range(0..1, "!");
    assert!(matches!(
        Dictionary::load(&bad_char),
        Err(DictionaryError::InvalidPayload(_))
    ));

    let mut short = good.clone();
    short.trie.pop();
    assert!(Dictionary::load(&short).is_err());

    let mut wrong_count = good.clone();
    wrong_count.node_count += 1;
    assert!(Dictionary::load(&wrong_count).is_err());

    let mut bad_directory = good.clone();
    bad_directory.directory.push('A');
    assert!(Dictionary::load(&bad_directory).is_err());

    let mut zero = good;
    zero.node_count = 0;
    assert!(Dictionary::load(&zero).is_err());
}

#[test]
fn test_handle_hot_swap_keeps_readers_consistent() {
    let handle = DictionaryHandle::new();
    assert_eq!(handle.state(), LoadState::Unloaded);

    let first = handle.load(&payload("v1", &["CASA"])).unwrap();
    assert_eq!(
        handle.state(),
        LoadState::Loaded {
            version: "v1".into()
        }
    );

    let reader = Arc::clone(&first);
    handle.load(&payload("v2", &["ESSA"])).unwrap();
    assert!(reader.contains_word("CASA"));
    assert!(!reader.contains_word("ESSA"));
    assert!(handle.current().unwrap().contains_word("ESSA"));

    let mut broken = payload("v3", &["SA"]);
    broken.trie.clear();
    assert!(handle.load(&broken).is_err());
    assert_eq!(handle.version().as_deref(), Some("v2"));
    assert!(handle.last_error().is_some());
}

#[test]
fn test_handle_shared_across_threads() {
    let handle = Arc::new(DictionaryHandle::new());
    handle.load(&payload("v1", &["CASA", "CASES"])).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            std::thread::spawn(move || {
                let dict = handle.current().unwrap();
                (0..100).all(|_| dict.contains_word("CASA") && !dict.contains_word("CASO"))
            })
        })
        .collect();

    handle.load(&payload("v2", &["CASA"])).unwrap();
    for reader in readers {
        assert!(reader.join().unwrap());
    }
}
