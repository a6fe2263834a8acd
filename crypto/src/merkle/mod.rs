// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::hash::Hasher;
use std::collections::{BTreeSet, HashMap};

mod proofs;
pub use proofs::BatchMerkleProof;

#[cfg(test)]
mod tests;

// MERKLE TREE
// ================================================================================================

/// A fully-balanced Merkle tree.
///
/// ```text
///      o        <- tree root
///    /    \
///   o      o    <- internal nodes
///  / \    / \
/// *   *  *   *  <- leaves
/// ```
///
/// All leaves are expected to be digests already; callers hash their values
/// before constructing a tree.
#[derive(Debug)]
pub struct MerkleTree<H: Hasher> {
    nodes: Vec<H::Digest>,
    leaves: Vec<H::Digest>,
}

impl<H: Hasher> MerkleTree<H> {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a new Merkle tree built from the provided leaves using the
    /// hash function specified by the `H` type parameter.
    ///
    /// # Panics
    /// Panics if:
    /// * Fewer than two leaves were provided.
    /// * Number of leaves is not a power of two.
    pub fn new(leaves: Vec<H::Digest>) -> Self {
        assert!(leaves.len().is_power_of_two(), "number of leaves must be a power of 2");
        assert!(leaves.len() >= 2, "a tree must contain at least 2 leaves");

        let nodes = build_merkle_nodes::<H>(&leaves);
        MerkleTree { nodes, leaves }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the root of the tree.
    pub fn root(&self) -> &H::Digest {
        &self.nodes[1]
    }

    /// Returns depth of the tree.
    pub fn depth(&self) -> usize {
        self.leaves.len().trailing_zeros() as usize
    }

    /// Returns leaf nodes of the tree.
    pub fn leaves(&self) -> &[H::Digest] {
        &self.leaves
    }

    // PROVING METHODS
    // --------------------------------------------------------------------------------------------

    /// Computes Merkle paths for the provided indexes and compresses the
    /// paths into a single proof by including every shared interior node
    /// only once. The `values` of the returned proof are aligned with the
    /// order of the provided indexes.
    ///
    /// # Panics
    /// Panics if:
    /// * Any of the provided indexes is greater than or equal to the number
    ///   of leaves in the tree.
    /// * The list of indexes contains duplicates.
    pub fn prove_batch(&self, indexes: &[usize]) -> BatchMerkleProof<H> {
        let n = self.leaves.len();

        let index_map = map_indexes(indexes, n - 1);
        let indexes = normalize_indexes(indexes);
        let mut values = vec![H::Digest::default(); index_map.len()];
        let mut nodes: Vec<Vec<H::Digest>> = Vec::with_capacity(indexes.len());

        // populate the proof with leaf node values
        let mut next_indexes: Vec<usize> = Vec::new();
        for index in indexes {
            let missing: Vec<H::Digest> = (index..index + 2)
                .flat_map(|i| {
                    let v = self.leaves[i];
                    if let Some(idx) = index_map.get(&i) {
                        values[*idx] = v;
                        None
                    } else {
                        Some(v)
                    }
                })
                .collect();
            nodes.push(missing);

            next_indexes.push((index + n) >> 1);
        }

        // add required internal nodes to the proof, skipping redundancies
        let depth = self.depth() as u8;
        for _ in 1..depth {
            let indexes = next_indexes.clone();
            next_indexes.truncate(0);

            let mut i = 0;
            while i < indexes.len() {
                let sibling_index = indexes[i] ^ 1;
                if i + 1 < indexes.len() && indexes[i + 1] == sibling_index {
                    i += 1;
                } else {
                    nodes[i].push(self.nodes[sibling_index]);
                }

                // add parent index to the set of next indexes
                next_indexes.push(sibling_index >> 1);

                i += 1;
            }
        }

        BatchMerkleProof { values, nodes, depth }
    }

    // VERIFICATION METHODS
    // --------------------------------------------------------------------------------------------

    /// Checks whether the batch proof contains Merkle paths for the
    /// specified indexes against the specified root.
    pub fn verify_batch(root: &H::Digest, indexes: &[usize], proof: &BatchMerkleProof<H>) -> bool {
        match proof.get_root(indexes) {
            Some(proof_root) => *root == proof_root,
            None => false,
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns the internal nodes of a Merkle tree defined by the specified
/// leaves.
///
/// The internal nodes are returned as a vector where the root is stored at
/// position 1, its children are stored at positions 2, 3, their children at
/// positions 4, 5, 6, 7 etc.
pub fn build_merkle_nodes<H: Hasher>(leaves: &[H::Digest]) -> Vec<H::Digest> {
    let n = leaves.len() / 2;

    let mut nodes = vec![H::Digest::default(); 2 * n];

    // build the first row of internal nodes (parents of leaves)
    for (i, j) in (0..n).zip(n..nodes.len()) {
        nodes[j] = H::merge(&[leaves[i * 2], leaves[i * 2 + 1]]);
    }

    // calculate all other tree nodes moving up toward the root
    for i in (1..n).rev() {
        nodes[i] = H::merge(&[nodes[i * 2], nodes[i * 2 + 1]]);
    }

    nodes
}

fn map_indexes(indexes: &[usize], max_valid: usize) -> HashMap<usize, usize> {
    let mut map = HashMap::new();
    for (i, index) in indexes.iter().cloned().enumerate() {
        map.insert(index, i);
        assert!(index <= max_valid, "invalid index {}", index);
    }
    assert_eq!(indexes.len(), map.len(), "repeating indexes detected");
    map
}

fn normalize_indexes(indexes: &[usize]) -> Vec<usize> {
    let mut set = BTreeSet::new();
    for &index in indexes {
        set.insert(index - (index & 1));
    }
    set.into_iter().collect()
}
