//! Turns text into a string of '0'/'1' characters using the paths of a Huffman tree, and back again.
//!
//! A left step is written as '0' and a right step as '1'. A symbol's code is the sequence of steps
//! from the root down to its leaf.

use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, Node, NodeData};
use crate::error::{HuffError, Result};

/// Symbol to code map for one tree.
pub type CodeTable = FxHashMap<u8, String>;

impl HuffmanTree {
    /// Walk the tree once and collect the code of every leaf.
    /// A single leaf tree gives its symbol the empty code.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = CodeTable::default();
        let mut path = String::new();
        collect_codes(&self.root, &mut path, &mut codes);
        codes
    }
}

/// Recursively walk the tree, pushing a step on the way down and popping it on the way back up.
fn collect_codes(node: &Node, path: &mut String, codes: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();
            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            codes.insert(*sym, path.clone());
        }
    }
}

/// Encode the text with the codes of the tree. The text needs at least 2 bytes and every
/// byte must have a leaf in the tree.
pub fn encode(tree: &HuffmanTree, text: &[u8]) -> Result<String> {
    if text.len() < 2 {
        return Err(HuffError::NotEncodable { len: text.len() });
    }

    let codes = tree.code_table();
    let mut encoded = String::with_capacity(tree.branch_sum());
    for (position, &symbol) in text.iter().enumerate() {
        let code = codes
            .get(&symbol)
            .ok_or(HuffError::SymbolNotInTree { symbol, position })?;
        encoded.push_str(code);
    }

    debug!(
        "Encoded {} bytes into {} bits ({} distinct codes)",
        text.len(),
        encoded.len(),
        codes.len()
    );
    Ok(encoded)
}

/// Decode a '0'/'1' string with the tree. Exactly as many symbols as the tree's leaves weigh
/// are produced; any bits after that are ignored.
pub fn decode(tree: &HuffmanTree, bits: &str) -> Result<Vec<u8>> {
    let expected = tree.leaf_sum();
    let mut decoded = Vec::with_capacity(expected);
    let mut stream = bits.chars().enumerate();

    while decoded.len() < expected {
        let sym = decode_symbol(&tree.root, &mut stream, decoded.len())?;
        decoded.push(sym);
    }

    let leftover = stream.count();
    if leftover > 0 {
        warn!("Ignoring {} bits after the last decoded symbol", leftover);
    }
    debug!("Decoded {} symbols", decoded.len());
    Ok(decoded)
}

/// Descend from node, one bit per step, until we land on a leaf.
fn decode_symbol<I>(node: &Node, stream: &mut I, decoded: usize) -> Result<u8>
where
    I: Iterator<Item = (usize, char)>,
{
    match &node.node_data {
        NodeData::Leaf(sym) => Ok(*sym),
        NodeData::Kids(left, right) => match stream.next() {
            Some((_, '0')) => decode_symbol(left, stream, decoded),
            Some((_, '1')) => decode_symbol(right, stream, decoded),
            Some((position, bit)) => Err(HuffError::InvalidBit { bit, position }),
            None => Err(HuffError::TruncatedCode { decoded }),
        },
    }
}
