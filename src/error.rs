use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from tree construction and proof generation.
///
/// Proof verification never fails — a malformed proof simply verifies to
/// `false` — so none of these variants are produced by [`proven`](crate::proven).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A hash algorithm was requested by a name this crate does not know.
    #[error("unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),
    /// No blocks were supplied and no default data block is configured, so
    /// not even one leaf can be formed.
    #[error("no blocks supplied and no default data block configured")]
    EmptyBlocks,
    /// A forced height cannot hold the supplied number of blocks.
    #[error("height {height} holds at most {capacity} blocks, got {supplied}")]
    HeightTooSmall {
        /// The requested tree height.
        height: u32,
        /// Leaf capacity at that height (`2^height`).
        capacity: u64,
        /// Number of blocks actually supplied.
        supplied: usize,
    },
    /// A forced height above the supported maximum.
    #[error("height {height} exceeds the maximum supported height {max}")]
    HeightTooLarge {
        /// The requested tree height.
        height: u32,
        /// The maximum height this crate supports.
        max: u32,
    },
    /// The block list must be padded to reach the target leaf count, but no
    /// default data block is configured to pad with.
    #[error("padding to {target} leaves requires a default data block")]
    MissingDefaultBlock {
        /// The power-of-two leaf count the block list must be padded to.
        target: u64,
    },
    /// A proof was requested for a leaf index outside the tree.
    #[error("index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
}
