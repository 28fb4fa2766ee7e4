use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::{freqs, FreqTable};
use std::cmp::Reverse;
use std::io::Write;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Occurrence count for a leaf, sum of the children for an internal node
    pub weight: usize,
    /// Build order. Leaves take 0..k in order of first appearance, merges follow.
    pub slot: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: usize, slot: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            slot,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Symbol held by a leaf, None for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Left and right child of an internal node, None for leaves.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((left, right)),
            NodeData::Leaf(_) => None,
        }
    }
}

/// Sort a forest by decreasing weight and decreasing slot, so the lightest
/// (and on a tie, the oldest) node sits at the end, ready to pop.
/// Only (weight, slot) is compared. Slots are unique within one build.
pub fn sort_forest(forest: &mut [Node]) {
    forest.sort_unstable_by_key(|node| Reverse((node.weight, node.slot)));
}

/// A Huffman tree over the bytes of one text. Built once, read only afterwards.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HuffmanTree {
    pub root: Node,
}

/// Build the Huffman tree for a text. Empty text is rejected.
pub fn build_tree(text: &[u8]) -> Result<HuffmanTree> {
    let table = freqs(text)?;
    HuffmanTree::from_freqs(&table)
}

impl HuffmanTree {
    /// Build the tree from a frequency table.
    ///
    /// Each round merges the two lightest remaining nodes. Ties go to the
    /// lower slot. The lightest node becomes the right child and the second
    /// lightest the left child of the new node, which then competes in the
    /// following rounds like any other node.
    pub fn from_freqs(table: &FreqTable) -> Result<HuffmanTree> {
        if table.total() == 0 {
            return Err(HuffError::InvalidInput);
        }

        // A single distinct symbol has nothing to branch on. The lone leaf carries the text length.
        if table.distinct() < 2 {
            let (sym, _) = table.symbols().next().ok_or(HuffError::InvalidInput)?;
            debug!(
                "Single symbol {:?} repeated {} times, tree is one leaf",
                sym as char,
                table.total()
            );
            return Ok(HuffmanTree {
                root: Node::new(table.total(), 0, NodeData::Leaf(sym)),
            });
        }

        // Turn the table into a forest of leaves
        let mut tree: Vec<Node> = table
            .symbols()
            .enumerate()
            .map(|(slot, (sym, count))| Node::new(count, slot, NodeData::Leaf(sym)))
            .collect();
        let leaves = tree.len();
        let mut next_slot = leaves;

        // ...then pare it down to one single node with child nodes
        let root = loop {
            // Keep the forest sorted by weight so we pop the lightest nodes.
            sort_forest(&mut tree);

            let right_child = tree.pop().ok_or(HuffError::InvalidInput)?;
            let Some(left_child) = tree.pop() else {
                break right_child;
            };
            trace!(
                "merge slot {} (w {}) + slot {} (w {}) -> slot {}",
                left_child.slot,
                left_child.weight,
                right_child.slot,
                right_child.weight,
                next_slot
            );
            tree.push(Node::new(
                left_child.weight + right_child.weight,
                next_slot,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ));
            next_slot += 1;
        };

        debug!(
            "Built tree: {} leaves, {} merges, root weight {}",
            leaves,
            next_slot - leaves,
            root.weight
        );
        Ok(HuffmanTree { root })
    }

    /// Sum of the weights of all internal nodes. Equal to the encoded length of the text.
    pub fn branch_sum(&self) -> usize {
        branch_sum(&self.root)
    }

    /// Sum of the weights of all leaves. Equal to the length of the text.
    pub fn leaf_sum(&self) -> usize {
        leaf_sum(&self.root)
    }

    /// Total number of nodes, 2k-1 for k distinct symbols.
    pub fn node_count(&self) -> usize {
        node_count(&self.root)
    }

    /// Write a pre-order dump of the tree, one tab of indent per level.
    pub fn write_tree<W: Write>(&self, out: &mut W) -> Result<()> {
        write_node(&self.root, 0, out)
    }
}

/// Print the tree to stdout.
pub fn print_tree(tree: &HuffmanTree) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tree.write_tree(&mut out)
}

fn branch_sum(node: &Node) -> usize {
    match &node.node_data {
        NodeData::Kids(left, right) => node.weight + branch_sum(left) + branch_sum(right),
        NodeData::Leaf(_) => 0,
    }
}

fn leaf_sum(node: &Node) -> usize {
    match &node.node_data {
        NodeData::Kids(left, right) => leaf_sum(left) + leaf_sum(right),
        NodeData::Leaf(_) => node.weight,
    }
}

fn node_count(node: &Node) -> usize {
    match &node.node_data {
        NodeData::Kids(left, right) => 1 + node_count(left) + node_count(right),
        NodeData::Leaf(_) => 1,
    }
}

/// Recursively print a node, then its left subtree, then its right subtree.
fn write_node<W: Write>(node: &Node, depth: usize, out: &mut W) -> Result<()> {
    for _ in 0..depth {
        write!(out, "\t")?;
    }
    match &node.node_data {
        NodeData::Kids(left, right) => {
            writeln!(out, "Node: Value: '', Frequency: {}", node.weight)?;
            write_node(left, depth + 1, out)?;
            write_node(right, depth + 1, out)?;
        }
        NodeData::Leaf(sym) => {
            writeln!(
                out,
                "Node: Value: '{}', Frequency: {}",
                *sym as char, node.weight
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    /// Checks the full-tree and weight invariants, returns the leaves' (symbol, depth).
    fn check_node(node: &Node, depth: usize, leaves: &mut Vec<(u8, usize)>) {
        match node.children() {
            Some((left, right)) => {
                assert_eq!(node.weight, left.weight + right.weight);
                assert!(node.symbol().is_none());
                check_node(left, depth + 1, leaves);
                check_node(right, depth + 1, leaves);
            }
            None => leaves.push((node.symbol().unwrap(), depth)),
        }
    }

    #[test]
    fn aab_shape_test() {
        let tree = build_tree(b"aab").unwrap();
        assert_eq!(tree.root.weight, 3);
        let (left, right) = tree.root.children().unwrap();
        assert_eq!((left.symbol(), left.weight), (Some(b'a'), 2));
        assert_eq!((right.symbol(), right.weight), (Some(b'b'), 1));
    }

    #[test]
    fn aaabbc_merge_order_test() {
        let tree = build_tree(b"aaabbc").unwrap();
        assert_eq!(tree.root.weight, 6);
        // c and b merge first into a node of weight 3. It ties with a, and a is older.
        let (left, right) = tree.root.children().unwrap();
        assert_eq!(right.symbol(), Some(b'a'));
        assert_eq!(left.weight, 3);
        assert_eq!(left.slot, 3);
        let (bl, br) = left.children().unwrap();
        assert_eq!(bl.symbol(), Some(b'b'));
        assert_eq!(br.symbol(), Some(b'c'));
    }

    #[test]
    fn sort_forest_test() {
        // A merged node ties with an older leaf, two leaves tie at weight 1
        let mut forest = vec![
            Node::new(3, 0, NodeData::Leaf(b'a')),
            Node::new(1, 5, NodeData::Leaf(b'x')),
            Node::new(
                3,
                3,
                NodeData::Kids(
                    Box::new(Node::new(2, 1, NodeData::Leaf(b'b'))),
                    Box::new(Node::new(1, 2, NodeData::Leaf(b'c'))),
                ),
            ),
            Node::new(1, 4, NodeData::Leaf(b'y')),
        ];
        sort_forest(&mut forest);
        let order = forest.iter().map(|n| n.slot).collect::<Vec<_>>();
        assert_eq!(order, vec![3, 0, 5, 4]);
        assert_eq!(forest.pop().unwrap().symbol(), Some(b'y'));
    }

    #[test]
    fn invariants_test() {
        let text = b"the quick brown fox jumps over the lazy dog, again and again";
        let tree = build_tree(text).unwrap();
        let mut leaves = vec![];
        check_node(&tree.root, 0, &mut leaves);

        let distinct = freqs(text).unwrap().distinct();
        assert_eq!(leaves.len(), distinct);
        assert_eq!(tree.node_count(), 2 * distinct - 1);
        assert_eq!(tree.root.weight, text.len());
        assert_eq!(tree.leaf_sum(), text.len());

        let mut syms = leaves.iter().map(|(s, _)| *s).collect::<Vec<_>>();
        syms.sort_unstable();
        syms.dedup();
        assert_eq!(syms.len(), distinct);

        // Every occurrence pays one unit per internal node above its leaf
        let weighted_depth: usize = leaves
            .iter()
            .map(|&(s, d)| d * text.iter().filter(|&&c| c == s).count())
            .sum();
        assert_eq!(tree.branch_sum(), weighted_depth);
    }

    #[test]
    fn single_symbol_test() {
        let tree = build_tree(b"a").unwrap();
        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.symbol(), Some(b'a'));
        assert_eq!(tree.root.weight, 1);

        let tree = build_tree(b"zzzz").unwrap();
        assert_eq!(tree.root.symbol(), Some(b'z'));
        assert_eq!(tree.root.weight, 4);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.branch_sum(), 0);
    }

    #[test]
    fn empty_test() {
        assert!(matches!(build_tree(b""), Err(HuffError::InvalidInput)));
    }

    #[test]
    fn rebuild_is_identical_test() {
        let text = b"mississippi river";
        assert_eq!(build_tree(text).unwrap(), build_tree(text).unwrap());
    }

    #[test]
    fn write_tree_test() {
        let tree = build_tree(b"aab").unwrap();
        let mut out = Vec::new();
        tree.write_tree(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Node: Value: '', Frequency: 3\n\
             \tNode: Value: 'a', Frequency: 2\n\
             \tNode: Value: 'b', Frequency: 1\n"
        );
    }
}
