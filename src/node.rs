/*!
# Node Representation

We choose `Node = u32` as graphs handled here stay far below `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly manipulate node values without abstracting over them.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed by `node as usize`
pub type NodeBitSet = FixedBitSet;
