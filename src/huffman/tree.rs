use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::coding_error::CodingError;
use super::frequency::count_symbols;
use super::path::Paths;
use super::{Symbol, WeightedSymbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<TreeNode<S>>,
        right: Box<TreeNode<S>>,
    },
}

impl<S> TreeNode<S> {
    pub fn weight(&self) -> usize {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn children(&self) -> Option<(&TreeNode<S>, &TreeNode<S>)> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    fn merge(left: Self, right: Self) -> Result<Self, CodingError> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(CodingError::WeightOverflow(left.weight(), right.weight()))?;
        Ok(TreeNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl<S: Clone> TreeNode<S> {
    pub fn weighted_symbol(&self) -> WeightedSymbol<S> {
        match self {
            TreeNode::Leaf { symbol, weight } => WeightedSymbol::leaf(symbol.clone(), *weight),
            TreeNode::Internal { weight, .. } => WeightedSymbol::internal(*weight),
        }
    }
}

// Priority queue entry. Equal weights are served in the order the nodes
// entered the queue.
struct QueuedNode<S> {
    node: TreeNode<S>,
    sequence: usize,
}

impl<S> QueuedNode<S> {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.sequence)
    }
}

impl<S> Ord for QueuedNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<S> PartialOrd for QueuedNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for QueuedNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for QueuedNode<S> {}

/// A Huffman tree over the alphabet of a training text.
///
/// Leaves are pushed into the queue in ascending symbol order and merged
/// nodes in creation order; nodes of equal weight leave the queue first in
/// first out. The shape is therefore fully determined by the frequency
/// table, but other tie-breaking rules yield different, equally valid trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: TreeNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn new(weighted_symbols: &[WeightedSymbol<S>]) -> Result<HuffmanTree<S>, CodingError> {
        let mut leaves = Self::collect_leaves(weighted_symbols)?;
        leaves.sort_by(|a, b| a.0.cmp(&b.0));
        Self::ensure_unique_symbols(&leaves)?;

        let mut heap = BinaryHeap::new();
        let mut sequence = 0;
        for (symbol, weight) in leaves {
            heap.push(Reverse(QueuedNode {
                node: TreeNode::Leaf { symbol, weight },
                sequence,
            }));
            sequence += 1;
        }

        // merge nodes until one is left
        while heap.len() > 1 {
            let (Some(Reverse(first)), Some(Reverse(second))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Reverse(QueuedNode {
                node: TreeNode::merge(first.node, second.node)?,
                sequence,
            }));
            sequence += 1;
        }

        let root = heap.pop().ok_or(CodingError::EmptyInput)?.0.node;
        Ok(HuffmanTree { root })
    }

    pub fn from_symbols<I>(symbols: I) -> Result<HuffmanTree<S>, CodingError>
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(&count_symbols(symbols))
    }

    /// Weight of every leaf, ordered by symbol.
    pub fn leaf_weights(&self) -> Vec<WeightedSymbol<S>> {
        let mut leaves = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(left);
                    stack.push(right);
                }
                None => leaves.push(node.weighted_symbol()),
            }
        }
        leaves.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        leaves
    }

    fn collect_leaves(
        weighted_symbols: &[WeightedSymbol<S>],
    ) -> Result<Vec<(S, usize)>, CodingError> {
        weighted_symbols
            .iter()
            .map(|ws| match &ws.symbol {
                Some(symbol) => Ok((symbol.clone(), ws.weight)),
                None => Err(CodingError::MissingSymbol(ws.weight)),
            })
            .collect()
    }

    fn ensure_unique_symbols(sorted_leaves: &[(S, usize)]) -> Result<(), CodingError> {
        match sorted_leaves.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            Some(pair) => Err(CodingError::DuplicateSymbol(format!("{:?}", pair[0].0))),
            None => Ok(()),
        }
    }
}

impl HuffmanTree<char> {
    pub fn from_text(text: &str) -> Result<HuffmanTree<char>, CodingError> {
        Self::from_symbols(text.chars())
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &TreeNode<S> {
        &self.root
    }

    /// Total number of symbols the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// A tree with a single leaf and no internal nodes.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(left);
                    stack.push(right);
                }
                None => count += 1,
            }
        }
        count
    }

    /// Length of the longest root to leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => max_depth = max_depth.max(depth),
            }
        }
        max_depth
    }

    pub fn paths(&self) -> Paths<'_, S> {
        Paths::new(&self.root)
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Counts chars, not display columns, so double-width glyphs shift the
// connectors drawn above them.
fn center_of(line: &str) -> usize {
    let leading_spaces = line.chars().position(|c| c != ' ').unwrap_or(0);
    (leading_spaces * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl<S: fmt::Debug> TreeNode<S> {
    fn get_string(&self) -> Vec<String> {
        match self {
            TreeNode::Leaf { symbol, weight } => vec![format!("(s:{:?},f:{})", symbol, weight)],
            TreeNode::Internal { left, right, .. } => {
                let left_box = left.get_string();
                let right_box = right.get_string();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of(&left_box[0]);
                let right_pos = center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string().iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, TreeNode};
    use crate::huffman::{CodingError, WeightedSymbol};

    fn assert_weights_are_conserved<S>(node: &TreeNode<S>) {
        if let TreeNode::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(
                *weight,
                left.weight() + right.weight(),
                "Internal weight must be the sum of its children"
            );
            assert_weights_are_conserved(left);
            assert_weights_are_conserved(right);
        }
    }

    const SYMBOLS_AND_FREQUENCIES: &[(u8, usize); 7] =
        &[(1, 17), (2, 3), (3, 12), (4, 3), (5, 18), (6, 12), (7, 13)];

    #[test]
    fn test_weight_conservation() {
        let weighted = SYMBOLS_AND_FREQUENCIES.map(WeightedSymbol::from);
        let tree = HuffmanTree::new(&weighted).unwrap();
        assert_weights_are_conserved(tree.root());
        assert_eq!(tree.weight(), 78, "Root weight must be the total count");
    }

    #[test]
    fn test_leaf_count_matches_distinct_symbols() {
        let tree = HuffmanTree::from_text("the quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(tree.leaf_count(), 27);
    }

    #[test]
    fn test_single_symbol_yields_degenerate_tree() {
        let tree = HuffmanTree::from_text("aaaa").unwrap();
        assert!(tree.is_degenerate());
        assert_eq!(tree.depth(), 0);
        assert_eq!(
            tree.root(),
            &TreeNode::Leaf {
                symbol: 'a',
                weight: 4
            }
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(HuffmanTree::from_text(""), Err(CodingError::EmptyInput));
    }

    #[test]
    fn test_duplicate_symbol_is_rejected() {
        let weighted = [('x', 2), ('y', 1), ('x', 5)].map(WeightedSymbol::from);
        assert_eq!(
            HuffmanTree::new(&weighted),
            Err(CodingError::DuplicateSymbol("'x'".to_string()))
        );
    }

    #[test]
    fn test_entry_without_symbol_is_rejected() {
        let weighted = [WeightedSymbol::leaf('x', 2), WeightedSymbol::internal(3)];
        assert_eq!(
            HuffmanTree::new(&weighted),
            Err(CodingError::MissingSymbol(3))
        );
    }

    #[test]
    fn test_weight_overflow_is_rejected() {
        let weighted = [('a', usize::MAX), ('b', 1)].map(WeightedSymbol::from);
        assert_eq!(
            HuffmanTree::new(&weighted),
            Err(CodingError::WeightOverflow(1, usize::MAX))
        );
    }

    #[test]
    fn test_largest_representable_total_is_accepted() {
        let weighted = [('a', usize::MAX - 1), ('b', 1)].map(WeightedSymbol::from);
        let tree = HuffmanTree::new(&weighted).unwrap();
        assert_eq!(tree.weight(), usize::MAX);
    }

    #[test]
    fn test_ties_are_merged_first_in_first_out() {
        // c(1) and a(2) merge first, then b(3) beats the merged node of the
        // same weight because it entered the queue earlier.
        let tree = HuffmanTree::from_text("aabbbc").unwrap();
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left.symbol(), Some(&'b'));
        let (right_left, right_right) = right.children().unwrap();
        assert_eq!(right_left.symbol(), Some(&'c'));
        assert_eq!(right_right.symbol(), Some(&'a'));
    }

    #[test]
    fn test_shape_does_not_depend_on_input_order() {
        let forward = [('a', 5), ('b', 5), ('c', 5), ('d', 5)].map(WeightedSymbol::from);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            HuffmanTree::new(&forward).unwrap(),
            HuffmanTree::new(&backward).unwrap()
        );
    }

    #[test]
    fn test_leaf_weights_reproduce_frequencies() {
        let tree = HuffmanTree::from_text("aabbbc").unwrap();
        let expected = [('a', 2), ('b', 3), ('c', 1)].map(WeightedSymbol::from);
        let leaf_weights = tree.leaf_weights();
        assert!(leaf_weights.iter().all(WeightedSymbol::is_leaf));
        assert_eq!(leaf_weights, expected);
    }

    #[test]
    fn test_depth_of_skewed_tree() {
        let weighted = [('a', 1), ('b', 2), ('c', 4), ('d', 8)].map(WeightedSymbol::from);
        let tree = HuffmanTree::new(&weighted).unwrap();
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_node_reports_weighted_symbol() {
        let tree = HuffmanTree::from_text("ab").unwrap();
        assert_eq!(tree.root().weighted_symbol(), WeightedSymbol::internal(2));
        assert!(!tree.root().weighted_symbol().is_leaf());
        let (left, _) = tree.root().children().unwrap();
        assert_eq!(left.weighted_symbol(), WeightedSymbol::leaf('a', 1));
    }

    #[test]
    fn test_display_draws_every_leaf() {
        let tree = HuffmanTree::from_text("aab").unwrap();
        let drawing = tree.to_string();
        assert!(drawing.contains("(s:'a',f:2)"), "{}", drawing);
        assert!(drawing.contains("(s:'b',f:1)"), "{}", drawing);
        assert!(drawing.contains('╩'), "{}", drawing);
        assert_eq!(drawing.lines().count(), 4);
    }

    #[test]
    fn test_display_centers_by_char_count() {
        let tree = HuffmanTree::from_text("東東京").unwrap();
        let drawing = tree.to_string();
        let lines: Vec<&str> = drawing.lines().collect();
        let leaves = lines[3];
        let connectors = lines[2];
        // both leaf labels have the same char count, so the corners sit at
        // the same char offset inside each half
        let left_corner = connectors.chars().position(|c| c == '╔').unwrap();
        let right_corner = connectors.chars().position(|c| c == '╗').unwrap();
        let left_label = leaves.chars().position(|c| c == '(').unwrap();
        let right_label = leaves.chars().skip(1).position(|c| c == '(').unwrap() + 1;
        assert_eq!(left_corner - left_label, right_corner - right_label);
    }
}
