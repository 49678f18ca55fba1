use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::errors::{Error, ErrorImpl};

pub const RESERVED_WORDS: [&str; 13] = [
    "if", "else", "case", "switch", "break", "continue", "const", "while", "for", "return", "void",
    "true", "false",
];

lazy_static! {
    pub static ref RESERVED: KeywordStore = KeywordStore::from_words(RESERVED_WORDS);
}

const ROOT: usize = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    children: BTreeMap<char, usize>,
    // Terminal nodes at or below this one, itself included.
    subtree_terminal_count: usize,
    is_terminal: bool,
}

/// A prefix tree over reserved words.
///
/// Nodes live in a flat arena and refer to their children by index. Every
/// node tracks how many stored words end at or below it, which lets
/// [`KeywordStore::kth_word`] skip whole subtrees while descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordStore {
    nodes: Vec<Node>,
}

impl Default for KeywordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordStore {
    pub fn new() -> KeywordStore {
        KeywordStore {
            nodes: vec![Node::default()],
        }
    }

    pub fn from_words<'a, I>(words: I) -> KeywordStore
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = KeywordStore::new();
        for word in words {
            store.insert(word);
        }

        debug!("built keyword store with {} words", store.len());
        store
    }

    /// Inserts `word`, returning `false` if it was already stored.
    ///
    /// Repeated insertions leave the subtree counts untouched.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let mut current = ROOT;
        self.nodes[current].subtree_terminal_count += 1;

        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
            self.nodes[current].subtree_terminal_count += 1;
        }

        self.nodes[current].is_terminal = true;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .map(|node| self.nodes[node].is_terminal)
            .unwrap_or(false)
    }

    /// Returns the `k`-th stored word (1-indexed) in ascending order.
    pub fn kth_word(&self, k: usize) -> Result<String, Error> {
        let len = self.len();
        if k == 0 || k > len {
            return Err(Error::new(
                ErrorImpl::KeywordIndexOutOfRange { index: k, len },
                None,
            ));
        }

        let mut remaining = k;
        let mut current = ROOT;
        let mut word = String::new();

        loop {
            let node = &self.nodes[current];
            if node.is_terminal {
                remaining -= 1;
                if remaining == 0 {
                    return Ok(word);
                }
            }

            let mut next = None;
            for (&ch, &child) in &node.children {
                let count = self.nodes[child].subtree_terminal_count;
                if remaining > count {
                    remaining -= count;
                } else {
                    next = Some((ch, child));
                    break;
                }
            }

            // The bounds check above guarantees some child holds the word.
            let (ch, child) = next.ok_or_else(|| {
                Error::new(ErrorImpl::KeywordIndexOutOfRange { index: k, len }, None)
            })?;
            word.push(ch);
            current = child;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes[ROOT].subtree_terminal_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored words in ascending lexicographic order.
    pub fn words(&self) -> Vec<String> {
        (1..=self.len())
            .filter_map(|k| self.kth_word(k).ok())
            .collect()
    }

    fn find_node(&self, word: &str) -> Option<usize> {
        let mut current = ROOT;
        for ch in word.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }

        Some(current)
    }
}

impl<'a> FromIterator<&'a str> for KeywordStore {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        KeywordStore::from_words(iter)
    }
}

impl<'a> Extend<&'a str> for KeywordStore {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
