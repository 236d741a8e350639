use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    EmptyInput,
    DuplicateSymbol(String),
    MissingSymbol(usize),
    UnknownSymbol { symbol: String, position: usize },
    MalformedCode { position: usize },
    InvalidDigit { digit: char, position: usize },
    WeightOverflow(usize, usize),
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Unable to build a Huffman tree without any symbols")
            }
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Symbol {} occurs more than once in the input", symbol)
            }
            Self::MissingSymbol(weight) => {
                write!(
                    f,
                    "Entry with weight {} carries no symbol and can't become a leaf",
                    weight
                )
            }
            Self::UnknownSymbol { symbol, position } => {
                write!(
                    f,
                    "Symbol {} at position {} is not part of the tree's alphabet",
                    symbol, position
                )
            }
            Self::MalformedCode { position } => {
                write!(
                    f,
                    "Code starting at digit {} does not lead to a symbol",
                    position
                )
            }
            Self::InvalidDigit { digit, position } => {
                write!(
                    f,
                    "Invalid digit {:?} at position {}, expected '0' or '1'",
                    digit, position
                )
            }
            Self::WeightOverflow(left, right) => {
                write!(
                    f,
                    "Merging nodes of weight {} and {} exceeds the largest representable weight",
                    left, right
                )
            }
        }
    }
}

impl std::error::Error for CodingError {}
