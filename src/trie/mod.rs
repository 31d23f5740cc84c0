// see https://en.wikipedia.org/wiki/Trie
// and https://github.com/miedzinski/prefix-tree

mod iteration;


use std::collections::{btree_map, BTreeMap};
use std::fmt::Display;
use std::str::FromStr;

pub use iteration::Iter;

/// A prefix tree over words, i.e., sequences of symbols `K` (by default `char`s).
///
/// Each node owns its children, keyed by the next symbol. Words that share a prefix share the
/// nodes of that prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trie<K = char> {
    root: TrieNode<K>,

    /// Number of distinct words, i.e., terminal nodes. Cached, such that `len()` is O(1).
    len: usize,
}

impl<K: Ord + Clone> Trie<K> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::empty_root(),
            len: 0,
        }
    }

    pub fn root(&self) -> &TrieNode<K> {
        &self.root
    }

    /// Returns the number of distinct words in the trie.
    /// O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, not counting the root.
    /// O(n), where n is the number of nodes in the trie.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    // Inserting and searching words:

    /// Inserts `word`, creating nodes for all symbols that are not yet on the path from the root.
    ///
    /// Inserting the empty word marks the root as terminal. Inserting a word again does not
    /// change the trie, only `InsertResult::AlreadyPresent` is returned.
    pub fn insert<W>(&mut self, word: W) -> InsertResult
    where
        W: IntoIterator<Item = K>,
    {
        let mut cur_node = &mut self.root;
        for symbol in word {
            cur_node = cur_node
                .children
                .entry(symbol)
                .or_insert_with_key(|symbol| TrieNode::new(symbol.clone()));
        }

        if cur_node.is_terminal {
            InsertResult::AlreadyPresent
        } else {
            cur_node.is_terminal = true;
            self.len += 1;
            InsertResult::Inserted
        }
    }

    /// Searches for `word` with the default `MatchPolicy::Terminal`, see `search_with`.
    pub fn search<W>(&self, word: W) -> SearchResult<K>
    where
        W: IntoIterator<Item = K>,
    {
        self.search_with(word, MatchPolicy::Terminal)
    }

    /// Walks down the trie along the symbols of `word`, until either all symbols are consumed or
    /// the current node has no child for the next symbol.
    ///
    /// Returns the longest prefix of `word` that exists as a path in the trie (regardless of
    /// whether it ends at a terminal node) and whether `word` counts as matched under `policy`.
    pub fn search_with<W>(&self, word: W, policy: MatchPolicy) -> SearchResult<K>
    where
        W: IntoIterator<Item = K>,
    {
        let mut matched_prefix = Vec::new();
        let mut cur_node = &self.root;
        let mut word = word.into_iter();

        // Do not consume the remaining symbols after the first miss.
        let exhausted = loop {
            let Some(symbol) = word.next() else {
                break true;
            };
            match cur_node.children.get(&symbol) {
                Some(child) => {
                    cur_node = child;
                    matched_prefix.push(symbol);
                }
                None => break false,
            }
        };

        let matched = match policy {
            MatchPolicy::Terminal => exhausted && cur_node.is_terminal,
            MatchPolicy::Path => exhausted,
        };
        SearchResult {
            matched,
            matched_prefix,
        }
    }

    /// Returns `true` if exactly `word` was inserted before.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = K>,
    {
        self.subtrie(word).is_some_and(TrieNode::is_terminal)
    }

    // Prefix queries:

    /// Returns the node at the end of the path spelled by `prefix`, i.e., the subtrie of all words
    /// that start with `prefix`, or `None` if no such path exists.
    pub fn subtrie<W>(&self, prefix: W) -> Option<&TrieNode<K>>
    where
        W: IntoIterator<Item = K>,
    {
        prefix
            .into_iter()
            .try_fold(&self.root, |node, symbol| node.child(&symbol))
    }

    /// Returns `true` if `prefix` exists as a path in the trie, i.e., if it is a prefix of (or
    /// equal to) some inserted word.
    pub fn starts_with<W>(&self, prefix: W) -> bool
    where
        W: IntoIterator<Item = K>,
    {
        self.subtrie(prefix).is_some()
    }

    /// Returns all words that start with `prefix` (including `prefix` itself, if it was inserted),
    /// in symbol order.
    pub fn words_with_prefix<W>(&self, prefix: W) -> Vec<Vec<K>>
    where
        W: IntoIterator<Item = K>,
    {
        let prefix: Vec<K> = prefix.into_iter().collect();
        let mut words = Vec::new();
        if let Some(subtrie) = self.subtrie(prefix.iter().cloned()) {
            // The key parts yielded by the traversal start at `subtrie`, so prepend the prefix.
            subtrie.internal_iter_words(|key_parts| {
                let mut word = prefix.clone();
                word.extend(key_parts.iter().map(|&symbol| symbol.clone()));
                words.push(word);
            });
        }
        words
    }
}

impl<K: Ord + Clone> Default for Trie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> Extend<W> for Trie<K>
where
    K: Ord + Clone,
    W: IntoIterator<Item = K>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<K, W> FromIterator<W> for Trie<K>
where
    K: Ord + Clone,
    W: IntoIterator<Item = K>,
{
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrieNode<K> {
    /// `None` only for the root, which represents the empty prefix.
    label: Option<K>,
    is_terminal: bool,
    children: BTreeMap<K, TrieNode<K>>,
}

impl<K> TrieNode<K> {

    // Constructors:

    fn new(label: K) -> Self {
        TrieNode {
            label: Some(label),
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    fn empty_root() -> Self {
        TrieNode {
            label: None,
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }


    // Accessors:

    pub fn label(&self) -> Option<&K> {
        self.label.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The children of this node, in symbol order.
    pub fn children(&self) -> btree_map::Values<'_, K, TrieNode<K>> {
        self.children.values()
    }

    pub fn child(&self, symbol: &K) -> Option<&TrieNode<K>>
    where
        K: Ord,
    {
        self.children.get(symbol)
    }


    // Subtree statistics:

    /// Returns the number of words (i.e., terminal nodes) in this subtrie, including this node.
    /// O(n), where n is the number of nodes in the subtrie.
    pub fn len(&self) -> usize {
        usize::from(self.is_terminal) + self.children().map(Self::len).sum::<usize>()
    }

    /// Returns `true` if the subtrie contains no words.
    /// O(1), since every leaf other than the empty root is terminal.
    pub fn is_empty(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Returns the number of descendants of this node (not counting the node itself).
    pub fn node_count(&self) -> usize {
        self.children().map(|child| 1 + child.node_count()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertResult {
    Inserted,
    AlreadyPresent,
}

/// Decides when a search counts as a match, after all symbols of the word were found as a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// The path must also end at a terminal node, i.e., the word itself was inserted.
    #[default]
    Terminal,
    /// Any existing path matches, also prefixes of inserted words that were never inserted
    /// themselves.
    Path,
}

impl FromStr for MatchPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" | "terminal" => Ok(MatchPolicy::Terminal),
            "p" | "path" => Ok(MatchPolicy::Path),
            _ => Err("match policy must be either 'terminal' or 'path'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult<K> {
    pub matched: bool,
    /// Longest prefix of the queried word that exists as a path, even if not `matched`.
    pub matched_prefix: Vec<K>,
}

impl<K: Display> SearchResult<K> {
    pub fn prefix_string(&self) -> String {
        self.matched_prefix
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
