//! Unit tests for the keyword store.

use super::trie::{KeywordStore, RESERVED, RESERVED_WORDS};
use crate::errors::errors::ErrorImpl;

fn small_store() -> KeywordStore {
    KeywordStore::from_words(["for", "if", "else"])
}

#[test]
fn test_contains_complete_words() {
    let store = small_store();

    assert!(store.contains("for"));
    assert!(store.contains("if"));
    assert!(store.contains("else"));
}

#[test]
fn test_prefix_is_not_contained() {
    let store = small_store();

    assert!(!store.contains("fo"));
    assert!(!store.contains("f"));
    assert!(!store.contains("els"));
    assert!(!store.contains(""));
}

#[test]
fn test_extension_is_not_contained() {
    let store = small_store();

    assert!(!store.contains("fore"));
    assert!(!store.contains("iff"));
    assert!(!store.contains("x"));
}

#[test]
fn test_kth_word_in_order() {
    let store = small_store();

    assert_eq!(store.kth_word(1).unwrap(), "else");
    assert_eq!(store.kth_word(2).unwrap(), "for");
    assert_eq!(store.kth_word(3).unwrap(), "if");
}

#[test]
fn test_kth_word_out_of_range() {
    let store = small_store();

    let err = store.kth_word(4).unwrap_err();
    assert_eq!(
        err.get_kind(),
        &ErrorImpl::KeywordIndexOutOfRange { index: 4, len: 3 }
    );

    let err = store.kth_word(0).unwrap_err();
    assert_eq!(
        err.get_kind(),
        &ErrorImpl::KeywordIndexOutOfRange { index: 0, len: 3 }
    );
}

#[test]
fn test_kth_word_on_empty_store() {
    let store = KeywordStore::new();

    assert!(store.is_empty());
    assert!(store.kth_word(1).is_err());
    assert!(store.words().is_empty());
}

#[test]
fn test_duplicate_insert_is_idempotent() {
    let mut store = small_store();

    assert!(!store.insert("if"));
    assert!(!store.insert("if"));

    assert!(store.contains("if"));
    assert_eq!(store.len(), 3);
    assert_eq!(store.kth_word(3).unwrap(), "if");
    assert!(store.kth_word(4).is_err());
}

#[test]
fn test_insert_reports_new_words() {
    let mut store = KeywordStore::new();

    assert!(store.insert("while"));
    assert!(store.insert("whi"));
    assert!(!store.insert("while"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_word_that_is_prefix_of_another() {
    let store = KeywordStore::from_words(["case", "cases", "ca"]);

    assert!(store.contains("ca"));
    assert!(store.contains("case"));
    assert!(!store.contains("cas"));

    assert_eq!(store.kth_word(1).unwrap(), "ca");
    assert_eq!(store.kth_word(2).unwrap(), "case");
    assert_eq!(store.kth_word(3).unwrap(), "cases");
}

#[test]
fn test_empty_word_counts_once() {
    let mut store = KeywordStore::new();

    assert!(store.insert(""));
    assert!(!store.insert(""));
    store.insert("a");

    assert!(store.contains(""));
    assert_eq!(store.len(), 2);
    assert_eq!(store.kth_word(1).unwrap(), "");
    assert_eq!(store.kth_word(2).unwrap(), "a");
}

#[test]
fn test_reserved_store_matches_word_list() {
    assert_eq!(RESERVED.len(), RESERVED_WORDS.len());

    for word in RESERVED_WORDS {
        assert!(RESERVED.contains(word), "missing reserved word {word}");
    }

    let mut sorted = RESERVED_WORDS.map(String::from).to_vec();
    sorted.sort();
    assert_eq!(RESERVED.words(), sorted);
}

#[test]
fn test_reserved_store_edges() {
    assert_eq!(RESERVED.kth_word(1).unwrap(), "break");
    assert_eq!(RESERVED.kth_word(13).unwrap(), "while");
    assert!(RESERVED.kth_word(14).is_err());
    assert!(!RESERVED.contains("int"));
}

#[test]
fn test_collect_and_extend() {
    let mut store: KeywordStore = ["void", "return"].into_iter().collect();
    store.extend(["void", "const"]);

    assert_eq!(store.words(), vec!["const", "return", "void"]);
}
