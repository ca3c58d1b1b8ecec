use crate::code_table::{Code, CodeTable};
use crate::counts::ByteCounts;
use crate::priority_queue::PriorityQueue;
use crate::sortable::Sortable;
use crate::{LEFT_BIT, RIGHT_BIT};
use biterator::Bit;
use log::{debug, trace};

/// Errors that can occur while building a Huffman tree
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("Need at least two distinct bytes to build a Huffman tree, got {distinct}")]
    NotEnoughSymbols { distinct: usize },
}

/// A node of a Huffman tree. Internal nodes own both of their children, and
/// their count is the sum of their children's counts.
///
/// Nodes can be inspected but only built by [`HuffmanTree::from_counts`].
#[derive(Debug, Clone, PartialEq)]
pub enum HuffmanNode {
    #[non_exhaustive]
    Leaf {
        byte: u8,
        count: usize,
    },
    #[non_exhaustive]
    Internal {
        count: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// The number of occurrences this node accounts for.
    pub fn count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { count, .. } | HuffmanNode::Internal { count, .. } => *count,
        }
    }

    fn join(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn fill_table(&self, table: &mut CodeTable, prefix: &mut Vec<Bit>) {
        match self {
            HuffmanNode::Leaf { byte, .. } => table.insert(*byte, Code::from(prefix.clone())),
            HuffmanNode::Internal { left, right, .. } => {
                prefix.push(LEFT_BIT);
                left.fill_table(table, prefix);
                prefix.pop();

                prefix.push(RIGHT_BIT);
                right.fill_table(table, prefix);
                prefix.pop();
            }
        }
    }
}

/// Nodes are ordered by count alone; equal counts come out in whatever order
/// the heap yields them.
impl Sortable for HuffmanNode {
    fn comes_before(&self, other: &Self) -> bool {
        self.count() < other.count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build a tree by repeatedly merging the two lowest-count nodes.
    ///
    /// Bytes with a zero count are left out of the tree entirely. At least
    /// two distinct bytes must have a non-zero count.
    pub fn from_counts(counts: &ByteCounts) -> Result<Self, BuildError> {
        let distinct = counts.distinct();
        if distinct < 2 {
            return Err(BuildError::NotEnoughSymbols { distinct });
        }

        let mut queue: PriorityQueue<HuffmanNode> = counts
            .iter_nonzero()
            .map(|(byte, count)| HuffmanNode::Leaf { byte, count })
            .collect();
        debug!("Building Huffman tree from {distinct} leaves");

        let take = |queue: &mut PriorityQueue<HuffmanNode>| {
            queue
                .remove()
                .ok_or(BuildError::NotEnoughSymbols { distinct })
        };

        // The first node removed becomes the right child, the second the left.
        let mut right = take(&mut queue)?;
        let mut left = take(&mut queue)?;
        while !queue.is_empty() {
            let parent = HuffmanNode::join(left, right);
            trace!("Merged two nodes into an internal node of count {}", parent.count());
            queue.add(parent);

            right = take(&mut queue)?;
            left = take(&mut queue)?;
        }

        let root = HuffmanNode::join(left, right);
        debug!("Built Huffman tree with root count {}", root.count());
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// The total count of every byte in the tree.
    pub fn weight(&self) -> usize {
        self.root.count()
    }

    /// Walk the tree from the root, assigning each leaf's byte the path that
    /// leads to it. Left descents append [`LEFT_BIT`], right descents
    /// [`RIGHT_BIT`].
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        self.root.fill_table(&mut table, &mut Vec::new());
        debug!("Derived codes for {} bytes", table.len());
        table
    }
}
