use super::{Trie, TrieNode};

/// External pre-order depth-first iterator over the nodes of a (sub)trie, children in symbol order.
/// If `WORDS_ONLY`, non-terminal nodes are skipped (but still descended into).
pub struct Iter<'trie, K, const WORDS_ONLY: bool> {
    /// A worklist of nodes still to process, together with the symbol leading to them (`None`
    /// only for the start node).
    /// A `None` entry is used as a marker to pop the last symbol from `key_parts_stack`.
    node_stack: Vec<Option<(Option<&'trie K>, &'trie TrieNode<K>)>>,

    /// The symbols along the spine of the tree from the start node to the current node.
    key_parts_stack: Vec<&'trie K>,
}

// Cannot implement the `Iterator` trait from the standard library because `next` borrows from the
// iterator itself (when returning the key parts).
impl<'trie, K, const WORDS_ONLY: bool> Iter<'trie, K, WORDS_ONLY> {
    pub fn new(start: &'trie TrieNode<K>) -> Self {
        Self {
            node_stack: vec![Some((None, start))],
            key_parts_stack: Vec::new(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(&[&'trie K], &'trie TrieNode<K>)> {
        while let Some(entry) = self.node_stack.pop() {
            match entry {
                Some((symbol, node)) => {
                    if let Some(symbol) = symbol {
                        self.key_parts_stack.push(symbol);
                        // Pop from the key parts stack again after having processed this subtrie.
                        self.node_stack.push(None);
                    }
                    // Process the children next, i.e., depth-first traversal.
                    self.node_stack.extend(
                        node.children
                            .iter()
                            .rev()
                            .map(|(symbol, child)| Some((Some(symbol), child))),
                    );
                    if !WORDS_ONLY || node.is_terminal {
                        return Some((self.key_parts_stack.as_slice(), node));
                    }
                }
                None => {
                    self.key_parts_stack.pop();
                }
            }
        }
        None
    }
}

impl<K> TrieNode<K> {
    /// Generic internal pre-order depth-first traversal, optionally only over terminal nodes.
    fn internal_iter_generic<'trie, const WORDS_ONLY: bool, F>(
        &'trie self,
        key_parts_stack: &mut Vec<&'trie K>,
        f: &mut F,
    ) where
        F: FnMut(&[&'trie K], &'trie TrieNode<K>),
    {
        if !WORDS_ONLY || self.is_terminal {
            f(key_parts_stack.as_slice(), self);
        }
        for (symbol, child) in &self.children {
            key_parts_stack.push(symbol);
            child.internal_iter_generic::<WORDS_ONLY, F>(key_parts_stack, f);
            key_parts_stack.pop();
        }
    }

    /// Depth-first traversal of all nodes of this subtrie, including this node and interior nodes.
    /// The key parts passed to `f` are relative to this node, i.e., empty for this node itself.
    pub fn internal_iter_nodes<'trie>(
        &'trie self,
        mut f: impl FnMut(/* key_parts */ &[&'trie K], /* node */ &'trie TrieNode<K>),
    ) {
        self.internal_iter_generic::<false, _>(&mut Vec::new(), &mut f);
    }

    /// Depth-first traversal of the words in this subtrie, i.e., only the terminal nodes.
    pub fn internal_iter_words<'trie>(&'trie self, mut f: impl FnMut(/* key_parts */ &[&'trie K])) {
        self.internal_iter_generic::<true, _>(&mut Vec::new(), &mut |key_parts, _node| f(key_parts));
    }

    /// Returns a depth-first iterator over all nodes of this subtrie, including interior nodes.
    pub fn iter_nodes(&self) -> Iter<'_, K, false> {
        Iter::new(self)
    }

    /// Returns a depth-first iterator over the terminal nodes of this subtrie.
    pub fn iter_words(&self) -> Iter<'_, K, true> {
        Iter::new(self)
    }
}

impl<K: Ord + Clone> Trie<K> {
    /// Returns a depth-first iterator over all nodes, starting with the root.
    pub fn iter_nodes(&self) -> Iter<'_, K, false> {
        self.root.iter_nodes()
    }

    /// Returns a depth-first iterator over all words, in symbol order.
    pub fn iter_words(&self) -> Iter<'_, K, true> {
        self.root.iter_words()
    }

    /// Collects all words, in symbol order.
    pub fn words(&self) -> Vec<Vec<K>> {
        let mut words: Vec<Vec<K>> = Vec::with_capacity(self.len());
        self.root.internal_iter_words(|key_parts| {
            words.push(key_parts.iter().map(|&symbol| symbol.clone()).collect());
        });
        words
    }
}
