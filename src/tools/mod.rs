//! The tools module provides the helper functions around the huffman coder.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input text.
//!
pub mod cli;
pub mod freq_count;
