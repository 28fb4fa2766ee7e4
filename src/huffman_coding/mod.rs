//! The huffman module builds the code tree for a text and does the encoding and decoding with it.
//!
//! Tree building is greedy: the two lightest nodes are merged again and again until a single root is left.
//! The lightest node of each pair is placed on the right. Ties are broken by build order, so building a tree
//! twice from the same text always gives the same shape and the same codes.
//!
//! Encoded data is kept human readable, one '0' or '1' character per bit.
//!

pub mod codes;
pub mod huffman;
