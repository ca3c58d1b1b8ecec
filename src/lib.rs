//! A binary heap over values with a caller-supplied ordering, a priority
//! queue on top of it, and Huffman code construction driven by that queue.
//!
//! ```
//! use huffman_heap::{ByteCounts, HuffmanTree};
//!
//! let counts = ByteCounts::from_bytes(b"abracadabra");
//! let table = HuffmanTree::from_counts(&counts)?.code_table();
//! assert_eq!(table.get(b'a').map(|code| code.len()), Some(1));
//! # Ok::<(), huffman_heap::BuildError>(())
//! ```
pub mod code_table;
pub mod counts;
pub mod encoder;
pub mod heap;
pub mod huffman;
pub mod priority_queue;
pub mod sortable;

pub use code_table::{Code, CodeTable};
pub use counts::ByteCounts;
pub use encoder::{EncodeError, encode};
pub use heap::Heap;
pub use huffman::{BuildError, HuffmanNode, HuffmanTree};
pub use priority_queue::PriorityQueue;
pub use sortable::Sortable;

use biterator::Bit;

/// The number of distinct byte values.
pub const SYMBOL_COUNT: usize = 256;
/// Appended to a code when descending to a left child.
pub const LEFT_BIT: Bit = Bit::One;
/// Appended to a code when descending to a right child.
pub const RIGHT_BIT: Bit = Bit::Zero;
