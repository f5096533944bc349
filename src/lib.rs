//! Padded binary Merkle tree over ordered data blocks.
//!
//! Every block is committed to by a leaf digest, every internal digest covers
//! its two children, and a single root digest commits to the whole sequence.
//! Digests are lowercase hex strings — the hex text is the wire format used
//! for display, comparison, and shipping proofs between processes.
//!
//! The block list is padded on the right to a power-of-two leaf count (with a
//! configured default block), so every level has an even node count and the
//! reduction never has to promote a lone leftover node.
//!
//! # Core types
//!
//! - [`MerkleTree`] — build a tree from blocks ([`MerkleTree::new`]), or get
//!   just the root ([`MerkleTree::build`], [`MerkleTree::fast_root`]).
//! - [`TreeOptions`] — hash function, forced height, default padding block.
//! - [`Node`] — immutable tree node (digest, height, children).
//! - [`Hasher`] / [`HashAlgorithm`] — the pluggable hash capability; built-in
//!   algorithms selectable by name, or any custom `fn(&[u8]) -> Digest`.
//! - [`prove`] / [`proven`] — generate and verify inclusion proofs.
//!
//! # Example
//!
//! ```
//! use block_merkle_tree::{proven, MerkleTree, TreeOptions};
//!
//! let tree = MerkleTree::new(["a", "b", "c", "d"], TreeOptions::default())?;
//! let proof = tree.prove(1)?;
//! assert!(proven(b"b", 1, tree.root_digest(), tree.hasher(), &proof));
//! # Ok::<(), block_merkle_tree::Error>(())
//! ```

#![warn(missing_docs)]

mod crypto;
mod error;
mod node;
mod proof;
mod tree;


pub use crypto::{Digest, HashAlgorithm, Hasher};
pub use error::{Error, Result};
pub use node::Node;
pub use proof::{prove, proven, Proof};
pub use tree::{MerkleTree, TreeOptions};
