use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToReadInputFile(String, std::io::Error),
    UnableToReadEncodedFile(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    FailedToBuildTree(CodingError),
    FailedToEncodeLine(usize, CodingError),
    FailedToDecodeLine(usize, CodingError),
    WorkerDidNotDeliverLine(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToReadEncodedFile(path, error) => {
                write!(f, "Unable to read encoded file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::FailedToBuildTree(error) => {
                write!(f, "Failed to build Huffman tree: {}", error)
            }
            Self::FailedToEncodeLine(line_number, error) => {
                write!(f, "Failed to encode line {}: {}", line_number, error)
            }
            Self::FailedToDecodeLine(line_number, error) => {
                write!(f, "Failed to decode line {}: {}", line_number, error)
            }
            Self::WorkerDidNotDeliverLine(line_number) => {
                write!(f, "No result was delivered for line {}", line_number)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadInputFile(_, error)
            | Self::UnableToReadEncodedFile(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteOutputFile(_, error) => Some(error),
            Self::FailedToBuildTree(error)
            | Self::FailedToEncodeLine(_, error)
            | Self::FailedToDecodeLine(_, error) => Some(error),
            Self::WorkerDidNotDeliverLine(_) => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(value: CodingError) -> Self {
        Self::FailedToBuildTree(value)
    }
}
