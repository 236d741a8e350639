use std::collections::HashMap;

use super::tree::{HuffmanTree, TreeNode};
use super::Symbol;

/// Path assigned to the sole symbol of a single-leaf tree.
pub const DEGENERATE_PATH: &str = "0";

/// Depth first walk over a tree, yielding every leaf symbol with its path.
///
/// `'0'` selects the left child and `'1'` the right one. A single-leaf tree
/// yields its symbol with [`DEGENERATE_PATH`], so that every occurrence
/// still takes up one digit.
pub struct Paths<'a, S> {
    stack: Vec<(&'a TreeNode<S>, String)>,
}

impl<'a, S> Paths<'a, S> {
    pub(super) fn new(root: &'a TreeNode<S>) -> Self {
        Paths {
            stack: vec![(root, String::new())],
        }
    }
}

impl<'a, S> Iterator for Paths<'a, S> {
    type Item = (&'a S, String);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            match node {
                TreeNode::Leaf { symbol, .. } if path.is_empty() => {
                    return Some((symbol, DEGENERATE_PATH.to_string()));
                }
                TreeNode::Leaf { symbol, .. } => return Some((symbol, path)),
                TreeNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    // left is visited first
                    self.stack.push((right.as_ref(), right_path));
                    self.stack.push((left.as_ref(), left_path));
                }
            }
        }
        None
    }
}

/// Symbol to path lookup, derived once from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable<S: Symbol> {
    paths: HashMap<S, String>,
}

impl<S: Symbol> PathTable<S> {
    pub fn new(tree: &HuffmanTree<S>) -> Self {
        let paths = tree
            .paths()
            .map(|(symbol, path)| (symbol.clone(), path))
            .collect();
        PathTable { paths }
    }

    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.paths.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Entries ordered by symbol.
    pub fn sorted_entries(&self) -> Vec<(&S, &str)> {
        let mut entries: Vec<(&S, &str)> = self
            .paths
            .iter()
            .map(|(symbol, path)| (symbol, path.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<'a, S: Symbol> From<&'a HuffmanTree<S>> for PathTable<S> {
    fn from(tree: &'a HuffmanTree<S>) -> Self {
        Self::new(tree)
    }
}

#[cfg(test)]
pub(crate) fn assert_prefix_free<S: Symbol>(table: &PathTable<S>) {
    let entries = table.sorted_entries();
    for (symbol, path) in &entries {
        for (other_symbol, other_path) in &entries {
            if symbol != other_symbol {
                assert!(
                    !other_path.starts_with(path),
                    "Path {} of {:?} is a prefix of path {} of {:?}",
                    path,
                    symbol,
                    other_path,
                    other_symbol
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{assert_prefix_free, PathTable, DEGENERATE_PATH};
    use crate::huffman::{HuffmanTree, WeightedSymbol};

    #[test]
    fn test_paths_of_small_tree() {
        let tree = HuffmanTree::from_text("aabbbc").unwrap();
        let table = PathTable::new(&tree);
        assert_eq!(table.get(&'b'), Some("0"));
        assert_eq!(table.get(&'c'), Some("10"));
        assert_eq!(table.get(&'a'), Some("11"));
        assert_eq!(table.get(&'d'), None);
    }

    #[test]
    fn test_every_leaf_gets_exactly_one_path() {
        let text = "she sells sea shells by the sea shore";
        let tree = HuffmanTree::from_text(text).unwrap();
        let table = PathTable::from(&tree);
        assert_eq!(table.len(), tree.leaf_count());
        assert_eq!(tree.paths().count(), tree.leaf_count());
    }

    #[test]
    fn test_paths_are_prefix_free() {
        let tree = HuffmanTree::from_text("abracadabra, said the wizard to the lizard").unwrap();
        assert_prefix_free(&PathTable::new(&tree));
    }

    #[test]
    fn test_path_length_is_leaf_depth() {
        let weighted = [('a', 1), ('b', 2), ('c', 4), ('d', 8)].map(WeightedSymbol::from);
        let tree = HuffmanTree::new(&weighted).unwrap();
        let table = PathTable::new(&tree);
        let longest = table
            .sorted_entries()
            .iter()
            .map(|(_, path)| path.len())
            .max();
        assert_eq!(longest, Some(tree.depth()));
        assert_eq!(table.get(&'d').map(str::len), Some(1));
    }

    #[test]
    fn test_degenerate_tree_uses_single_digit_path() {
        let tree = HuffmanTree::from_text("zzz").unwrap();
        let table = PathTable::new(&tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'z'), Some(DEGENERATE_PATH));
    }

    #[test]
    fn test_traversal_visits_left_before_right() {
        let tree = HuffmanTree::from_text("aabbbc").unwrap();
        let visited: Vec<char> = tree.paths().map(|(symbol, _)| *symbol).collect();
        assert_eq!(visited, vec!['b', 'c', 'a']);
    }
}
