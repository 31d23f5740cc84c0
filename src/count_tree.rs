use std::fmt::Display;

use word_trie::trie::{Trie, TrieNode};

/// Display view of a trie, where each node knows how many words its subtrie contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The symbols this node stands for, i.e., one symbol, several after `compact`, or none for
    /// the root.
    pub str: String,
    /// Whether a word ends at this node.
    pub is_word: bool,
    /// Includes the counts of the children.
    pub count: u64,
    /// Empty if this is a leaf node.
    pub children: Vec<Node>,
}

impl<K: Ord + Clone + Display> From<&Trie<K>> for Node {
    fn from(trie: &Trie<K>) -> Self {
        fn from<K: Display>(trie_node: &TrieNode<K>) -> Node {
            let mut count = u64::from(trie_node.is_terminal());
            let mut children = Vec::new();
            for trie_node in trie_node.children() {
                let node = from(trie_node);
                count += node.count;
                children.push(node);
            }
            Node {
                str: trie_node.label().map(ToString::to_string).unwrap_or_default(),
                is_word: trie_node.is_terminal(),
                count,
                children,
            }
        }
        from(trie.root())
    }
}

impl Node {
    /// Merges every chain of nodes that neither end a word nor branch into a single node, except
    /// for the root, such that only "interesting" nodes remain.
    pub fn compact(&mut self) {
        for child in self.children.iter_mut() {
            child.compact_chain();
        }
    }

    fn compact_chain(&mut self) {
        while !self.is_word && self.children.len() == 1 {
            if let Some(only_child) = self.children.pop() {
                self.str.push_str(&only_child.str);
                self.is_word = only_child.is_word;
                self.children = only_child.children;
            }
        }
        for child in self.children.iter_mut() {
            child.compact_chain();
        }
    }

    pub fn sort_by_count_desc(&mut self) {
        self.sort_by_key(|node| std::cmp::Reverse(node.count));
    }

    pub fn sort_by_str(&mut self) {
        self.sort_by_key(|node| node.str.clone());
    }

    pub fn sort_by_key<F, K>(&mut self, mut f: F)
    where
        F: FnMut(&Node) -> K,
        K: Ord,
    {
        fn sort_by_key<F, K>(node: &mut Node, f: &mut F)
        where
            F: FnMut(&Node) -> K,
            K: Ord,
        {
            for child in node.children.iter_mut() {
                sort_by_key(child, f);
            }
            node.children.sort_by_key(|node| f(node));
        }
        sort_by_key(self, &mut f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn leaf(str: &str) -> Node {
        Node { str: str.into(), is_word: true, count: 1, children: Vec::new() }
    }

    fn interior(str: &str, is_word: bool, children: Vec<Node>) -> Node {
        let count = u64::from(is_word) + children.iter().map(|child| child.count).sum::<u64>();
        Node { str: str.into(), is_word, count, children }
    }

    fn test_trie() -> Trie {
        ["taco", "dog", "tank"].into_iter().map(str::chars).collect()
    }

    #[test]
    fn from_trie() {
        let node = Node::from(&test_trie());
        assert_eq!(node, interior("", false, vec![
            interior("d", false, vec![interior("o", false, vec![leaf("g")])]),
            interior("t", false, vec![interior("a", false, vec![
                interior("c", false, vec![leaf("o")]),
                interior("n", false, vec![leaf("k")]),
            ])]),
        ]));
        assert_eq!(node.count, 3);
    }

    #[test]
    fn compact() {
        let mut node = Node::from(&test_trie());
        node.compact();
        assert_eq!(node, interior("", false, vec![
            leaf("dog"),
            interior("ta", false, vec![leaf("co"), leaf("nk")]),
        ]));
    }

    #[test]
    fn compact_keeps_words_on_the_path() {
        let trie: Trie = ["tan", "tank", "tanks"].into_iter().map(str::chars).collect();
        let mut node = Node::from(&trie);
        node.compact();
        assert_eq!(node, interior("", false, vec![
            interior("tan", true, vec![interior("k", true, vec![leaf("s")])]),
        ]));
    }

    #[test]
    fn sort() {
        let mut node = Node::from(&test_trie());
        node.compact();
        node.sort_by_count_desc();
        let order: Vec<&str> = node.children.iter().map(|child| child.str.as_str()).collect();
        assert_eq!(order, ["ta", "dog"]);

        node.sort_by_str();
        let order: Vec<&str> = node.children.iter().map(|child| child.str.as_str()).collect();
        assert_eq!(order, ["dog", "ta"]);
    }
}
