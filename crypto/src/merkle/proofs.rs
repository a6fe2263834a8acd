// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::hash::Hasher;
use std::collections::HashMap;
use utils::{ByteReader, DeserializationError, SliceReader};

// BATCH MERKLE PROOF
// ================================================================================================

/// Multiple Merkle paths aggregated into a single proof.
///
/// The aggregation strategy exploits the fact that paths to a set of leaves
/// share interior nodes: every shared node is recorded only once, and the
/// verifier reconstructs the traversal deterministically from the sorted
/// position set and the tree depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchMerkleProof<H: Hasher> {
    /// Leaf digests, aligned with the order of the queried positions.
    pub values: Vec<H::Digest>,
    /// Interior sibling digests, one vector per normalized leaf pair.
    pub nodes: Vec<Vec<H::Digest>>,
    /// Depth of the tree the proof was generated from.
    pub depth: u8,
}

impl<H: Hasher> BatchMerkleProof<H> {
    /// Computes the node to which all Merkle paths aggregated in this proof
    /// resolve; returns None if the proof does not contain enough information
    /// to resolve the specified indexes.
    pub fn get_root(&self, indexes: &[usize]) -> Option<H::Digest> {
        let mut buf = [H::Digest::default(); 2];
        let mut v = HashMap::new();

        // replace odd indexes, offset, and sort in ascending order
        let offset = usize::pow(2, self.depth as u32);
        let index_map = super::map_indexes(indexes, offset - 1);
        let indexes = super::normalize_indexes(indexes);
        if indexes.len() != self.nodes.len() {
            return None;
        }

        // for each index use values to compute parent nodes
        let mut next_indexes: Vec<usize> = Vec::new();
        let mut proof_pointers: Vec<usize> = Vec::with_capacity(indexes.len());
        for (i, index) in indexes.into_iter().enumerate() {
            // copy values of sibling leaf nodes into the buffer
            match index_map.get(&index) {
                Some(&index1) => {
                    if self.values.len() <= index1 {
                        return None;
                    }
                    buf[0] = self.values[index1];
                    match index_map.get(&(index + 1)) {
                        Some(&index2) => {
                            if self.values.len() <= index2 {
                                return None;
                            }
                            buf[1] = self.values[index2];
                            proof_pointers.push(0);
                        }
                        None => {
                            if self.nodes[i].is_empty() {
                                return None;
                            }
                            buf[1] = self.nodes[i][0];
                            proof_pointers.push(1);
                        }
                    }
                }
                None => {
                    if self.nodes[i].is_empty() {
                        return None;
                    }
                    buf[0] = self.nodes[i][0];
                    match index_map.get(&(index + 1)) {
                        Some(&index2) => {
                            if self.values.len() <= index2 {
                                return None;
                            }
                            buf[1] = self.values[index2];
                        }
                        None => return None,
                    }
                    proof_pointers.push(1);
                }
            }

            // hash sibling nodes into their parent
            let parent = H::merge(&buf);

            let parent_index = (offset + index) >> 1;
            v.insert(parent_index, parent);
            next_indexes.push(parent_index);
        }

        // iteratively move up, until we get to the root
        for _ in 1..self.depth {
            let indexes = next_indexes.clone();
            next_indexes.truncate(0);

            let mut i = 0;
            while i < indexes.len() {
                let node_index = indexes[i];
                let sibling_index = node_index ^ 1;

                // determine the sibling
                let sibling: H::Digest;
                if i + 1 < indexes.len() && indexes[i + 1] == sibling_index {
                    sibling = match v.get(&sibling_index) {
                        Some(sibling) => *sibling,
                        None => return None,
                    };
                    i += 1;
                } else {
                    let pointer = proof_pointers[i];
                    if self.nodes[i].len() <= pointer {
                        return None;
                    }
                    sibling = self.nodes[i][pointer];
                    proof_pointers[i] += 1;
                }

                // get the node from the map of hashed nodes
                let node = match v.get(&node_index) {
                    Some(node) => node,
                    None => return None,
                };

                // compute parent node from node and sibling
                if node_index & 1 != 0 {
                    buf[0] = sibling;
                    buf[1] = *node;
                } else {
                    buf[0] = *node;
                    buf[1] = sibling;
                }
                let parent = H::merge(&buf);

                // add the parent node to the next set of nodes
                let parent_index = node_index >> 1;
                v.insert(parent_index, parent);
                next_indexes.push(parent_index);

                i += 1;
            }
        }

        v.remove(&1)
    }

    // SERIALIZATION / DESERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Converts all internal proof nodes into a vector of bytes.
    ///
    /// The encoding is: number of node vectors (1 byte), then for each node
    /// vector its digest count (1 byte) followed by the digests themselves.
    ///
    /// # Panics
    /// Panics if the proof contains more than 255 node vectors or a node
    /// vector with more than 255 digests.
    pub fn serialize_nodes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // record total number of node vectors
        assert!(self.nodes.len() <= u8::MAX as usize, "too many paths");
        result.push(self.nodes.len() as u8);

        // record each node vector as individual bytes
        for nodes in self.nodes.iter() {
            assert!(nodes.len() <= u8::MAX as usize, "too many nodes");
            // record the number of nodes, and append all nodes to the buffer
            result.push(nodes.len() as u8);
            for node in nodes.iter() {
                result.extend_from_slice(node.as_ref());
            }
        }

        result
    }

    /// Parses internal nodes from the provided byte stream, and constructs
    /// a batch Merkle proof from these nodes, the provided leaf values, and
    /// the provided tree depth.
    pub fn deserialize(
        bytes: &[u8],
        leaves: Vec<H::Digest>,
        depth: u8,
    ) -> Result<Self, DeserializationError> {
        let mut reader = SliceReader::new(bytes);

        let num_node_vectors = reader.read_u8()? as usize;
        let mut nodes = Vec::with_capacity(num_node_vectors);
        for _ in 0..num_node_vectors {
            let num_digests = reader.read_u8()? as usize;
            let digests = reader.read_many::<H::Digest>(num_digests)?;
            nodes.push(digests);
        }

        if reader.has_more_bytes() {
            return Err(DeserializationError::UnconsumedBytes);
        }

        Ok(BatchMerkleProof { values: leaves, nodes, depth })
    }
}
