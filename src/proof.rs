//! Inclusion proof generation and verification.
//!
//! A proof is the minimal ordered sibling-digest sequence a verifier needs to
//! recompute the root from one block and its leaf index. Proofs are produced
//! top-down (index 0 is the sibling nearest the root) and consumed in reverse
//! by the verifier, which folds leaf-upward by index parity.
//!
//! Verification is a pure function over untrusted input: it never fails, a
//! malformed proof simply verifies to `false`.

use crate::crypto::{Digest, Hasher};
use crate::node::{internal_digest, leaf_digest};
use crate::tree::MerkleTree;
use crate::{Error, Result};

/// An inclusion proof: sibling digests ordered from the level nearest the
/// root down to the level nearest the leaf.
///
/// Transient — carries no reference back to the tree it came from, so it can
/// be shipped to an independent verifier as plain hex strings.
pub type Proof = Vec<Digest>;

/// Generate a proof that the leaf at `index` is part of `tree`.
///
/// Walks from the root down to the target leaf; at each level the digest of
/// the child *not* containing the target is appended, so the finished proof
/// has one entry per tree level, root-adjacent first.
///
/// Fails with [`Error::IndexOutOfRange`] when `index >= tree.leaf_count()`.
pub fn prove(tree: &MerkleTree, index: usize) -> Result<Proof> {
    if index >= tree.leaf_count() {
        return Err(Error::IndexOutOfRange {
            index,
            leaf_count: tree.leaf_count(),
        });
    }

    let mut node = tree.root();
    let mut siblings = Vec::with_capacity(node.height() as usize);
    let mut index = index;
    while let [left, right] = node.children() {
        // Each child subtree spans 2^(height - 1) leaves.
        let span = 1usize << (node.height() - 1);
        if index < span {
            siblings.push(right.digest().to_owned());
            node = left;
        } else {
            siblings.push(left.digest().to_owned());
            node = right;
            index -= span;
        }
    }
    Ok(siblings)
}

/// Verify that `block` sits at leaf `index` under `root_digest`.
///
/// Starts from the leaf digest of `block` and consumes `proof` in reverse
/// (leaf-adjacent sibling first): an even index means the current digest is a
/// left child, odd means right; after each combine the index halves. The
/// result is `true` iff the final digest equals `root_digest`.
///
/// Pure and infallible by design — proofs arrive from untrusted peers, so
/// wrong-length proofs, corrupted digests, or a mismatched index all just
/// produce a digest that fails the final comparison.
pub fn proven(
    block: &[u8],
    index: usize,
    root_digest: &str,
    hasher: &Hasher,
    proof: &[Digest],
) -> bool {
    let mut current = leaf_digest(hasher, block);
    let mut index = index;
    for sibling in proof.iter().rev() {
        current = if index % 2 == 0 {
            internal_digest(hasher, &current, sibling)
        } else {
            internal_digest(hasher, sibling, &current)
        };
        index /= 2;
    }
    current == root_digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeOptions;

    const ABCD_ROOT: &str = "9dc1674ae1ee61c90ba50b6261e8f9a47f7ea07d92612158edfe3c2a37c6d74c";

    fn abcd_tree() -> MerkleTree {
        MerkleTree::new(["a", "b", "c", "d"], TreeOptions::default())
            .expect("four blocks build without padding")
    }

    #[test]
    fn test_prove_reference_vector() {
        let tree = abcd_tree();
        assert_eq!(tree.root_digest(), ABCD_ROOT);
        let proof = prove(&tree, 1).expect("index 1 is in range");
        assert_eq!(
            proof,
            vec![
                "40e2511a6323177e537acb2e90886e0da1f84656fd6334b89f60d742a3967f09".to_string(),
                "022a6979e6dab7aa5ae4c3e5e45f7e977112a7e63593820dbec1ec738a24f93c".to_string(),
            ]
        );
        assert!(proven(b"b", 1, ABCD_ROOT, tree.hasher(), &proof));
    }

    #[test]
    fn test_prove_is_top_down() {
        let tree = abcd_tree();
        let proof = prove(&tree, 2).expect("index 2 is in range");
        // First entry is the opposite half of the tree, last is the leaf
        // sibling "d".
        assert_eq!(
            proof,
            vec![
                "4c64254e6636add7f281ff49278beceb26378bd0021d1809974994e6e233ec35".to_string(),
                "d070dc5b8da9aea7dc0f5ad4c29d89965200059c9a0ceca3abd5da2492dcb71d".to_string(),
            ]
        );
        assert!(proven(b"c", 2, tree.root_digest(), tree.hasher(), &proof));
    }

    #[test]
    fn test_prove_all_leaves_of_eight() {
        let blocks = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let tree = MerkleTree::new(blocks, TreeOptions::default()).expect("power-of-two build");
        assert_eq!(
            tree.root_digest(),
            "1d295224db01021123c4c0c052e415c00a4c329b752eaf16764dbf6837366ccd"
        );
        for (index, block) in blocks.iter().enumerate() {
            let proof = prove(&tree, index).expect("index in range");
            assert_eq!(proof.len(), 3);
            assert!(
                proven(
                    block.as_bytes(),
                    index,
                    tree.root_digest(),
                    tree.hasher(),
                    &proof
                ),
                "proof for index {index} should verify"
            );
        }
    }

    #[test]
    fn test_proof_for_single_leaf_tree_is_empty() {
        let tree = MerkleTree::new(["a"], TreeOptions::default()).expect("single block build");
        let proof = prove(&tree, 0).expect("index 0 is in range");
        assert!(proof.is_empty());
        assert!(proven(b"a", 0, tree.root_digest(), tree.hasher(), &proof));
    }

    #[test]
    fn test_prove_index_out_of_range() {
        let tree = abcd_tree();
        assert_eq!(
            prove(&tree, 4),
            Err(Error::IndexOutOfRange {
                index: 4,
                leaf_count: 4
            })
        );
    }

    #[test]
    fn test_proven_rejects_wrong_block() {
        let tree = abcd_tree();
        let proof = prove(&tree, 1).expect("index 1 is in range");
        assert!(!proven(b"x", 1, tree.root_digest(), tree.hasher(), &proof));
    }

    #[test]
    fn test_proven_rejects_wrong_index() {
        let tree = abcd_tree();
        let proof = prove(&tree, 1).expect("index 1 is in range");
        assert!(!proven(b"b", 2, tree.root_digest(), tree.hasher(), &proof));
    }

    #[test]
    fn test_proven_rejects_tampered_digest() {
        let tree = abcd_tree();
        let proof = prove(&tree, 1).expect("index 1 is in range");

        // Flip one character of each entry in turn.
        for entry in 0..proof.len() {
            for position in 0..proof[entry].len() {
                let mut tampered = proof.clone();
                let mut chars: Vec<char> = tampered[entry].chars().collect();
                chars[position] = if chars[position] == '0' { '1' } else { '0' };
                tampered[entry] = chars.into_iter().collect();
                assert!(
                    !proven(b"b", 1, tree.root_digest(), tree.hasher(), &tampered),
                    "tampering entry {entry} at {position} should fail verification"
                );
            }
        }
    }

    #[test]
    fn test_proven_absorbs_malformed_proofs() {
        let tree = abcd_tree();
        let proof = prove(&tree, 1).expect("index 1 is in range");
        let root = tree.root_digest();
        let hasher = tree.hasher();

        // Truncated, extended, reordered, and empty proofs all verify false.
        assert!(!proven(b"b", 1, root, hasher, &proof[..1]));
        let mut extended = proof.clone();
        extended.push(proof[0].clone());
        assert!(!proven(b"b", 1, root, hasher, &extended));
        let reversed: Vec<_> = proof.iter().rev().cloned().collect();
        assert!(!proven(b"b", 1, root, hasher, &reversed));
        assert!(!proven(b"b", 1, root, hasher, &[]));
        assert!(!proven(b"b", 1, root, hasher, &["not hex at all".to_string()]));
    }
}
