//! Tree nodes and the digest rules that label them.
//!
//! Hash domain separation:
//! - Leaf nodes:     `hash(0x00 || block_bytes)`
//! - Internal nodes: `hash(0x01 || left_hex || right_hex)`
//!
//! where `left_hex`/`right_hex` are the children's hex digest strings as
//! ASCII bytes. The 0x00/0x01 domain tags prevent second-preimage attacks
//! where a crafted block could reproduce an internal node's hash input.

use crate::crypto::{Digest, Hasher};

/// Domain tag prepended to leaf hash inputs.
pub(crate) const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal hash inputs.
pub(crate) const INTERNAL_TAG: u8 = 0x01;

/// Digest of a leaf committing to one data block.
pub(crate) fn leaf_digest(hasher: &Hasher, block: &[u8]) -> Digest {
    let mut input = Vec::with_capacity(1 + block.len());
    input.push(LEAF_TAG);
    input.extend_from_slice(block);
    hasher.digest(&input)
}

/// Digest of an internal node over its two children's digests, in order.
pub(crate) fn internal_digest(hasher: &Hasher, left: &str, right: &str) -> Digest {
    let mut input = Vec::with_capacity(1 + left.len() + right.len());
    input.push(INTERNAL_TAG);
    input.extend_from_slice(left.as_bytes());
    input.extend_from_slice(right.as_bytes());
    hasher.digest(&input)
}

/// An immutable Merkle tree node.
///
/// A node exclusively owns its children, so the whole tree is a single owned
/// acyclic value dropped with its owning scope. Leaves have height 0 and no
/// children; an internal node has exactly two children one level below it and
/// a digest covering their digests in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    digest: Digest,
    height: u32,
    children: Vec<Node>,
}

impl Node {
    /// Create a leaf committing to `block`.
    pub(crate) fn leaf(hasher: &Hasher, block: &[u8]) -> Self {
        Node {
            digest: leaf_digest(hasher, block),
            height: 0,
            children: Vec::new(),
        }
    }

    /// Create an internal node one level above its two children.
    pub(crate) fn internal(hasher: &Hasher, left: Node, right: Node) -> Self {
        Node {
            digest: internal_digest(hasher, &left.digest, &right.digest),
            height: left.height + 1,
            children: vec![left, right],
        }
    }

    /// The node's digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Height of the node: 0 for leaves, `child height + 1` otherwise.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The node's children, in order. Empty for leaves, two entries otherwise.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
