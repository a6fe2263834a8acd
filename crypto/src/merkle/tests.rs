// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{BatchMerkleProof, MerkleTree};
use crate::hash::{ByteDigest, Hasher, Sha2_256};

type Tree = MerkleTree<Sha2_256>;

fn make_leaves(n: usize) -> Vec<ByteDigest<32>> {
    (0..n as u64).map(|i| Sha2_256::hash(&i.to_le_bytes())).collect()
}

#[test]
fn build_tree() {
    let leaves = make_leaves(4);
    let tree = Tree::new(leaves.clone());

    // recompute the root by hand
    let n01 = Sha2_256::merge(&[leaves[0], leaves[1]]);
    let n23 = Sha2_256::merge(&[leaves[2], leaves[3]]);
    let root = Sha2_256::merge(&[n01, n23]);

    assert_eq!(&root, tree.root());
    assert_eq!(2, tree.depth());
    assert_eq!(leaves, tree.leaves());
}

#[test]
#[should_panic]
fn build_tree_with_odd_leaf_count() {
    Tree::new(make_leaves(6));
}

#[test]
fn prove_verify_batch() {
    let leaves = make_leaves(64);
    let tree = Tree::new(leaves);

    // various position patterns: adjacent pairs, spread-out, single
    for indexes in [vec![2usize, 3], vec![1, 10, 21, 42, 63], vec![7], vec![0, 32, 16, 48]] {
        let proof = tree.prove_batch(&indexes);
        assert!(Tree::verify_batch(tree.root(), &indexes, &proof));

        // values must be aligned with the order of the queried positions
        for (i, &index) in indexes.iter().enumerate() {
            assert_eq!(tree.leaves()[index], proof.values[i]);
        }
    }
}

#[test]
fn verify_batch_fails_on_tampering() {
    let leaves = make_leaves(32);
    let tree = Tree::new(leaves);
    let indexes = vec![3usize, 8, 17];
    let proof = tree.prove_batch(&indexes);

    // flip a bit in one of the leaf values
    let mut tampered = proof.clone();
    let mut bytes = *tampered.values[1].as_bytes();
    bytes[0] ^= 1;
    tampered.values[1] = ByteDigest::new(bytes);
    assert!(!Tree::verify_batch(tree.root(), &indexes, &tampered));

    // flip a bit in one of the interior nodes
    let mut tampered = proof.clone();
    let mut bytes = *tampered.nodes[0][0].as_bytes();
    bytes[7] ^= 1;
    tampered.nodes[0][0] = ByteDigest::new(bytes);
    assert!(!Tree::verify_batch(tree.root(), &indexes, &tampered));

    // wrong positions
    assert!(!Tree::verify_batch(tree.root(), &[3, 8, 18], &proof));

    // wrong root
    let other_root = Sha2_256::hash(b"not the root");
    assert!(!Tree::verify_batch(&other_root, &indexes, &proof));
}

#[test]
fn serialize_nodes_roundtrip() {
    let leaves = make_leaves(16);
    let tree = Tree::new(leaves);
    let indexes = vec![1usize, 6, 7, 12];
    let proof = tree.prove_batch(&indexes);

    let node_bytes = proof.serialize_nodes();
    let parsed =
        BatchMerkleProof::<Sha2_256>::deserialize(&node_bytes, proof.values.clone(), proof.depth)
            .unwrap();

    assert_eq!(proof, parsed);
    assert!(Tree::verify_batch(tree.root(), &indexes, &parsed));
}

#[test]
fn deserialize_rejects_trailing_bytes() {
    let leaves = make_leaves(8);
    let tree = Tree::new(leaves);
    let proof = tree.prove_batch(&[2]);

    let mut node_bytes = proof.serialize_nodes();
    node_bytes.push(0xff);
    assert!(BatchMerkleProof::<Sha2_256>::deserialize(&node_bytes, proof.values, proof.depth)
        .is_err());
}
