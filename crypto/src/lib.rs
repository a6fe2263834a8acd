// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Cryptographic primitives used in Glacier proof generation and verification:
//!
//! * **Hash functions** defined via the [Hasher] trait, with SHA-256 and
//!   BLAKE2s-256 implementations.
//! * **Merkle trees** used as the commitment scheme of the protocol; the
//!   [MerkleTree] implementation supports compact aggregation of multiple
//!   Merkle paths into a single [BatchMerkleProof].
//! * **Random coin** implementing the Fiat-Shamir transform: pseudo-random
//!   field elements and query positions derived deterministically from
//!   commitments.

mod hash;
pub use hash::{Blake2s_256, ByteDigest, Hasher, Sha2_256};

mod merkle;
pub use merkle::{build_merkle_nodes, BatchMerkleProof, MerkleTree};

mod random;
pub use random::RandomCoin;

mod errors;
pub use errors::RandomCoinError;
