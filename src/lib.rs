//! Textbook Huffman coder for short ASCII texts.
//!
//! Counts how often each byte occurs, builds the Huffman tree from those counts, and uses the
//! root-to-leaf paths as a prefix-free code. Encoded output is a string of '0' and '1' characters.
//!
//! Basic usage:
//!
//! `$> huffman -e -d "abracadabra"`
//!
//! This prints the encoded and decoded forms of the text, followed by the tree.
//!
//! From code:
//!
//! ```
//! let tree = huffman::build_tree(b"aab").unwrap();
//! let bits = huffman::encode(&tree, b"aab").unwrap();
//! assert_eq!(bits, "001");
//! assert_eq!(huffman::decode(&tree, &bits).unwrap(), b"aab");
//! ```
//!
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{HuffError, Result};
pub use huffman_coding::codes::{decode, encode, CodeTable};
pub use huffman_coding::huffman::{build_tree, print_tree, HuffmanTree, Node, NodeData};
