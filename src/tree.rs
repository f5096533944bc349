//! Tree construction: padding policy, full build, and the root-only fast path.

use crate::crypto::{Digest, Hasher};
use crate::node::{internal_digest, leaf_digest, Node};
use crate::{Error, Result};

/// Maximum supported tree height.
///
/// Validated before any `1 << height` shift; 2^31 leaves is already far
/// beyond what an in-memory tree can hold.
pub(crate) const MAX_HEIGHT: u32 = 31;

/// Construction options: hash function, forced height, padding block.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Hash function used at every level. Defaults to SHA-256.
    pub hasher: Hasher,
    /// Force the tree to exactly this many levels. The block list is padded
    /// with the default data block until it holds `2^height` leaves; fails if
    /// more blocks are supplied than the height can hold.
    pub height: Option<u32>,
    /// Block used to fill empty leaf slots when padding is required.
    pub default_data_block: Option<Vec<u8>>,
}

impl TreeOptions {
    /// Set the hash function.
    pub fn with_hasher(mut self, hasher: impl Into<Hasher>) -> Self {
        self.hasher = hasher.into();
        self
    }

    /// Force the tree height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the default data block used for padding.
    pub fn with_default_data_block(mut self, block: impl Into<Vec<u8>>) -> Self {
        self.default_data_block = Some(block.into());
        self
    }
}

/// An immutable Merkle tree over an ordered, padded block list.
///
/// Built once by [`MerkleTree::new`] and never mutated afterwards, so shared
/// references can be used from multiple threads without locking. The tree
/// retains the padded blocks and the full node tree; when only the root
/// digest is needed, [`MerkleTree::fast_root`] avoids both.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    blocks: Vec<Vec<u8>>,
    hasher: Hasher,
    root: Node,
}

impl MerkleTree {
    /// Build a tree from `blocks`.
    ///
    /// The block list is padded on the right to the target leaf count: `2 ^
    /// options.height` when a height is forced, otherwise the smallest power
    /// of two that holds `blocks` (a single block yields a one-leaf tree
    /// whose leaf is the root). Padding uses `options.default_data_block`;
    /// if padding would be required and no default is configured, the build
    /// is rejected.
    pub fn new<I, B>(blocks: I, options: TreeOptions) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let blocks = pad_blocks(collect_blocks(blocks), &options)?;
        let root = build_from_padded(&blocks, &options.hasher)?;
        Ok(MerkleTree {
            blocks,
            hasher: options.hasher,
            root,
        })
    }

    /// Build only the root [`Node`] of the tree, without retaining blocks.
    pub fn build<I, B>(blocks: I, options: TreeOptions) -> Result<Node>
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let blocks = pad_blocks(collect_blocks(blocks), &options)?;
        build_from_padded(&blocks, &options.hasher)
    }

    /// Compute the root digest without materializing any nodes.
    ///
    /// Bit-identical to `MerkleTree::build(..)?.digest()`, but each level's
    /// digests are dropped as soon as the next level is computed, so peak
    /// memory is bounded by the widest level instead of the whole tree.
    pub fn fast_root<I, B>(blocks: I, options: TreeOptions) -> Result<Digest>
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let blocks = pad_blocks(collect_blocks(blocks), &options)?;
        let mut level: Vec<Digest> = blocks
            .iter()
            .map(|block| leaf_digest(&options.hasher, block))
            .collect();
        while level.len() > 1 {
            level = level
                .chunks_exact(2)
                .map(|pair| internal_digest(&options.hasher, &pair[0], &pair[1]))
                .collect();
        }
        // Padding guarantees at least one leaf.
        level.pop().ok_or(Error::EmptyBlocks)
    }

    /// The padded block list the tree commits to.
    pub fn blocks(&self) -> &[Vec<u8>] {
        &self.blocks
    }

    /// The hash function the tree was built with.
    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The root digest.
    pub fn root_digest(&self) -> &str {
        self.root.digest()
    }

    /// Number of leaves (padded block count, always a power of two).
    pub fn leaf_count(&self) -> usize {
        self.blocks.len()
    }

    /// Generate an inclusion proof for the leaf at `index`.
    ///
    /// See [`prove`](crate::prove).
    pub fn prove(&self, index: usize) -> Result<crate::Proof> {
        crate::proof::prove(self, index)
    }
}

fn collect_blocks<I, B>(blocks: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = B>,
    B: Into<Vec<u8>>,
{
    blocks.into_iter().map(Into::into).collect()
}

/// Pad `blocks` on the right to the target leaf count.
///
/// Target: `2^height` when a height is forced, else the smallest power of two
/// that holds the supplied blocks. Every error path leaves no partial result.
fn pad_blocks(mut blocks: Vec<Vec<u8>>, options: &TreeOptions) -> Result<Vec<Vec<u8>>> {
    let target = match options.height {
        Some(height) => {
            if height > MAX_HEIGHT {
                return Err(Error::HeightTooLarge {
                    height,
                    max: MAX_HEIGHT,
                });
            }
            let capacity = 1usize << height;
            if blocks.len() > capacity {
                return Err(Error::HeightTooSmall {
                    height,
                    capacity: capacity as u64,
                    supplied: blocks.len(),
                });
            }
            capacity
        }
        None => {
            if blocks.is_empty() && options.default_data_block.is_none() {
                return Err(Error::EmptyBlocks);
            }
            blocks.len().max(1).next_power_of_two()
        }
    };

    if blocks.len() < target {
        let default = options
            .default_data_block
            .as_ref()
            .ok_or(Error::MissingDefaultBlock {
                target: target as u64,
            })?;
        blocks.resize(target, default.clone());
    }
    Ok(blocks)
}

/// Reduce a padded (power-of-two) block list bottom-up into the root node.
///
/// Every level has an even node count, so the pairwise combine never leaves
/// an odd node behind.
fn build_from_padded(blocks: &[Vec<u8>], hasher: &Hasher) -> Result<Node> {
    let mut level: Vec<Node> = blocks
        .iter()
        .map(|block| Node::leaf(hasher, block))
        .collect();
    while level.len() > 1 {
        let mut parents = Vec::with_capacity(level.len() / 2);
        let mut nodes = level.into_iter();
        while let (Some(left), Some(right)) = (nodes.next(), nodes.next()) {
            parents.push(Node::internal(hasher, left, right));
        }
        level = parents;
    }
    level.pop().ok_or(Error::EmptyBlocks)
}
