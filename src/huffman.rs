use std::fmt::Debug;
use std::hash::Hash;

mod coder;
mod coding_error;
mod frequency;
mod path;
mod tree;

pub use coder::HuffmanCoder;
pub use coding_error::CodingError;
pub use frequency::{count_symbols, SymbolCounter};
pub use path::{PathTable, Paths};
pub use tree::{HuffmanTree, TreeNode};

/// Anything that can be used as a unit of the alphabet.
///
/// `Ord` is needed so that the tree shape does not depend on hash map
/// iteration order, `Debug` for diagnostics and the tree diagram.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Ord + Debug {}

/// A symbol together with its weight.
///
/// `symbol` is `None` for merged (internal) nodes of a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedSymbol<S> {
    pub symbol: Option<S>,
    pub weight: usize,
}

impl<S> WeightedSymbol<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
        }
    }

    pub fn internal(weight: usize) -> Self {
        Self {
            symbol: None,
            weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

impl<S> From<(S, usize)> for WeightedSymbol<S> {
    fn from(value: (S, usize)) -> Self {
        Self::leaf(value.0, value.1)
    }
}
