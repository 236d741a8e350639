use std::ptr;

use super::coding_error::CodingError;
use super::path::PathTable;
use super::tree::{HuffmanTree, TreeNode};
use super::Symbol;

/// Encodes and decodes symbol sequences against one tree.
///
/// The path table is derived once on construction, so a coder may be
/// shared between threads and used for any number of messages.
#[derive(Debug, Clone)]
pub struct HuffmanCoder<S: Symbol> {
    tree: HuffmanTree<S>,
    path_table: PathTable<S>,
}

impl<S: Symbol> HuffmanCoder<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let path_table = PathTable::new(&tree);
        HuffmanCoder { tree, path_table }
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn path_table(&self) -> &PathTable<S> {
        &self.path_table
    }

    /// Concatenates the paths of all `symbols` in order.
    pub fn encode<'s, I>(&self, symbols: I) -> Result<String, CodingError>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let mut encoded = String::new();
        for (position, symbol) in symbols.into_iter().enumerate() {
            let path = self
                .path_table
                .get(symbol)
                .ok_or_else(|| CodingError::UnknownSymbol {
                    symbol: format!("{:?}", symbol),
                    position,
                })?;
            encoded.push_str(path);
        }
        Ok(encoded)
    }

    /// Walks the tree digit by digit, emitting a symbol whenever a leaf is
    /// reached. The digits must end on a code boundary.
    pub fn decode(&self, digits: &str) -> Result<Vec<S>, CodingError> {
        let root = self.tree.root();
        let mut cursor = root;
        let mut code_start = 0;
        let mut decoded = Vec::new();

        for (position, digit) in digits.chars().enumerate() {
            let take_right = match digit {
                '0' => false,
                '1' => true,
                _ => return Err(CodingError::InvalidDigit { digit, position }),
            };
            cursor = match cursor {
                TreeNode::Internal { left, right, .. } => {
                    if take_right {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                // only a single-leaf root is ever left under the cursor
                TreeNode::Leaf { .. } if take_right => {
                    return Err(CodingError::MalformedCode { position });
                }
                TreeNode::Leaf { .. } => cursor,
            };
            if let TreeNode::Leaf { symbol, .. } = cursor {
                decoded.push(symbol.clone());
                cursor = root;
                code_start = position + 1;
            }
        }

        if !ptr::eq(cursor, root) {
            return Err(CodingError::MalformedCode {
                position: code_start,
            });
        }
        Ok(decoded)
    }

    /// Number of digits `symbols` will take up once encoded.
    pub fn encoded_len<'s, I>(&self, symbols: I) -> Result<usize, CodingError>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| {
                self.path_table
                    .get(symbol)
                    .map(str::len)
                    .ok_or_else(|| CodingError::UnknownSymbol {
                        symbol: format!("{:?}", symbol),
                        position,
                    })
            })
            .sum()
    }
}

impl HuffmanCoder<char> {
    pub fn from_text(text: &str) -> Result<Self, CodingError> {
        Ok(Self::new(HuffmanTree::from_text(text)?))
    }

    pub fn encode_text(&self, text: &str) -> Result<String, CodingError> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    pub fn decode_text(&self, digits: &str) -> Result<String, CodingError> {
        Ok(self.decode(digits)?.into_iter().collect())
    }
}

impl<S: Symbol> From<HuffmanTree<S>> for HuffmanCoder<S> {
    fn from(tree: HuffmanTree<S>) -> Self {
        Self::new(tree)
    }
}
