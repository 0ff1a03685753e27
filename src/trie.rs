//! Prefix tree mapping processed word keys to the original words.
//!
//! Several original words can collapse onto one processed key (for example
//! two spellings with the same phonetic code), so every terminal node keeps
//! an ordered list of the words that end there.

use std::collections::hash_map;

use ahash::AHashMap;

/// Iterator over the outgoing edges of a node.
pub type Edges<'a> = hash_map::Iter<'a, char, TrieNode>;

/// One character position in the trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: AHashMap<char, TrieNode>,
    terminal_words: Option<Vec<String>>,
}

impl TrieNode {
    /// Outgoing edges of this node. Iteration order is unspecified.
    pub fn children(&self) -> &AHashMap<char, TrieNode> {
        &self.children
    }

    /// Iterate over `(letter, child)` edges. Iteration order is unspecified.
    pub fn edges(&self) -> Edges<'_> {
        self.children.iter()
    }

    /// The child reached through `letter`, if any.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Original words whose processed key ends at this node.
    pub fn words(&self) -> Option<&[String]> {
        self.terminal_words.as_deref()
    }

    /// Whether at least one word terminates here.
    pub fn is_terminal(&self) -> bool {
        self.terminal_words.is_some()
    }
}

/// The trie index. Owns the root node and every descendant.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
    node_count: usize,
    depth: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Insert `original` under `key`, creating nodes along the way.
    ///
    /// Re-inserting the same pair appends a duplicate entry.
    pub fn insert<S: Into<String>>(&mut self, original: S, key: &str) {
        let mut node = &mut self.root;
        let mut depth = 0;

        for letter in key.chars() {
            depth += 1;
            if !node.children.contains_key(&letter) {
                self.node_count += 1;
            }
            node = node.children.entry(letter).or_default();
        }

        node.terminal_words
            .get_or_insert_with(Vec::new)
            .push(original.into());
        self.word_count += 1;
        self.depth = self.depth.max(depth);
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Outgoing edges of `node`.
    pub fn children_of<'a>(&self, node: &'a TrieNode) -> &'a AHashMap<char, TrieNode> {
        node.children()
    }

    /// Terminal words stored at `node`.
    pub fn words_at<'a>(&self, node: &'a TrieNode) -> Option<&'a [String]> {
        node.words()
    }

    /// The node reached by following every character of `key`.
    pub fn get(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// Original words indexed under exactly `key`.
    pub fn words_for(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(TrieNode::words)
    }

    /// Whether some word was indexed under exactly `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some_and(TrieNode::is_terminal)
    }

    /// Number of inserted (original word, key) pairs.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length of the longest inserted key.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut trie = Trie::new();
        trie.insert("spell", "spell");
        trie.insert("spelling", "spelling");
        trie.insert("checker", "checker");

        assert!(trie.contains_key("spell"));
        assert!(trie.contains_key("spelling"));
        assert!(!trie.contains_key("spel"));
        assert!(!trie.contains_key("spellings"));
        assert_eq!(trie.words_for("checker"), Some(&["checker".to_string()][..]));
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.depth(), 8);
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let mut trie = Trie::new();
        trie.insert("spell", "spell");
        assert_eq!(trie.node_count(), 5);

        // "spelling" reuses the five "spell" nodes
        trie.insert("spelling", "spelling");
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn test_shared_key_keeps_insertion_order() {
        let mut trie = Trie::new();
        trie.insert("Robert", "R163");
        trie.insert("Rupert", "R163");

        let words = trie.words_for("R163").unwrap();
        assert_eq!(words, &["Robert".to_string(), "Rupert".to_string()]);
    }

    #[test]
    fn test_duplicates_accumulate() {
        let mut trie = Trie::new();
        trie.insert("hello", "hello");
        trie.insert("hello", "hello");

        assert_eq!(trie.words_for("hello").unwrap().len(), 2);
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_children_and_words_at() {
        let mut trie = Trie::new();
        trie.insert("ab", "ab");
        trie.insert("ac", "ac");

        let root = trie.root();
        assert_eq!(trie.children_of(root).len(), 1);
        assert!(trie.words_at(root).is_none());

        let a = root.child('a').unwrap();
        assert_eq!(trie.children_of(a).len(), 2);
        assert!(trie.words_at(a.child('b').unwrap()).is_some());
    }

    #[test]
    fn test_edges_cover_every_child() {
        let mut trie = Trie::new();
        trie.insert("ab", "ab");
        trie.insert("ac", "ac");

        let a = trie.root().child('a').unwrap();
        let mut letters: Vec<char> = a.edges().map(|(letter, _)| *letter).collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['b', 'c']);
        assert!(a.edges().all(|(_, child)| child.words().is_some()));
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.root().children().is_empty());
        assert!(!trie.contains_key(""));
        assert!(trie.get("").is_some());
    }
}
