//! Error types for tree building, encoding and decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffError {
    /// Tree building needs at least one byte of text
    #[error("input text is empty")]
    InvalidInput,

    /// Encoding needs at least two bytes of text
    #[error("text of length {len} is not encodable, at least 2 bytes are needed")]
    NotEncodable { len: usize },

    /// Only bytes in the range 0..128 can be coded
    #[error("byte {symbol:#04x} at position {position} is outside the range 0..128")]
    SymbolOutOfRange { symbol: u8, position: usize },

    /// The text holds a byte that has no leaf in the tree
    #[error("byte {symbol:#04x} at position {position} has no code in this tree")]
    SymbolNotInTree { symbol: u8, position: usize },

    /// Encoded input may only hold '0' and '1'
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// Encoded input ended before every symbol was decoded
    #[error("encoded input ended after {decoded} decoded symbols")]
    TruncatedCode { decoded: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for huffman operations
pub type Result<T> = std::result::Result<T, HuffError>;
