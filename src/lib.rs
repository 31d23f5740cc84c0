//! A prefix tree (trie) over words, i.e., sequences of symbols such as `char`s or grapheme
//! clusters, with insertion and exact-match search that also reports the longest matched prefix.

pub mod trie;

pub use trie::{InsertResult, MatchPolicy, SearchResult, Trie, TrieNode};
