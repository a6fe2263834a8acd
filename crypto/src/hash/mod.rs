// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use blake2::Blake2s256;
use core::{fmt::Debug, slice};
use math::FieldElement;
use sha2::{Digest, Sha256};
use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};


// HASHER TRAIT
// ================================================================================================

/// Defines a cryptographic hash function.
///
/// All commitments in the protocol are built from the three operations below:
/// hashing of raw bytes (leaf construction), merging of two digests (Merkle
/// tree nodes), and merging of a digest with an integer (pseudo-random
/// stream generation for the Fiat-Shamir transform).
pub trait Hasher: Send + Sync {
    /// Digest generated by this hasher.
    type Digest: Debug
        + Default
        + Copy
        + Clone
        + Eq
        + PartialEq
        + Send
        + Sync
        + AsRef<[u8]>
        + Serializable
        + Deserializable;

    /// Returns a hash of the provided sequence of bytes.
    fn hash(bytes: &[u8]) -> Self::Digest;

    /// Returns a hash of two digests; this is used to compute Merkle tree
    /// interior nodes.
    fn merge(values: &[Self::Digest; 2]) -> Self::Digest;

    /// Returns a hash of the provided sequence of digests.
    fn merge_many(values: &[Self::Digest]) -> Self::Digest;

    /// Returns a hash of the seed digest and an integer value; this is used
    /// to draw pseudo-random values from a seed.
    fn merge_with_int(seed: Self::Digest, value: u64) -> Self::Digest;

    /// Returns a hash of the canonical byte encoding of the provided field
    /// elements.
    fn hash_elements<E: FieldElement>(elements: &[E]) -> Self::Digest {
        Self::hash(E::elements_as_bytes(elements))
    }
}

// BYTE DIGEST
// ================================================================================================

/// A digest consisting of `N` raw bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ByteDigest<const N: usize>([u8; N]);

impl<const N: usize> ByteDigest<N> {
    /// Wraps the provided bytes into a digest.
    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes of this digest.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Re-interprets a slice of digests as a slice of bytes.
    #[inline(always)]
    pub fn digests_as_bytes(digests: &[ByteDigest<N>]) -> &[u8] {
        let p = digests.as_ptr();
        let len = digests.len() * N;
        unsafe { slice::from_raw_parts(p as *const u8, len) }
    }
}

impl<const N: usize> Default for ByteDigest<N> {
    fn default() -> Self {
        ByteDigest([0; N])
    }
}

impl<const N: usize> AsRef<[u8]> for ByteDigest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for ByteDigest<N> {
    fn from(bytes: [u8; N]) -> Self {
        ByteDigest(bytes)
    }
}

impl<const N: usize> Serializable for ByteDigest<N> {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.0);
    }
}

impl<const N: usize> Deserializable for ByteDigest<N> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(ByteDigest(source.read_array()?))
    }
}

// SHA2 WITH 256-BIT OUTPUT
// ================================================================================================

/// Implementation of the [Hasher] trait for the SHA-256 hash function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sha2_256;

impl Hasher for Sha2_256 {
    type Digest = ByteDigest<32>;

    fn hash(bytes: &[u8]) -> Self::Digest {
        ByteDigest(Sha256::digest(bytes).into())
    }

    fn merge(values: &[Self::Digest; 2]) -> Self::Digest {
        ByteDigest(Sha256::digest(ByteDigest::digests_as_bytes(values)).into())
    }

    fn merge_many(values: &[Self::Digest]) -> Self::Digest {
        ByteDigest(Sha256::digest(ByteDigest::digests_as_bytes(values)).into())
    }

    fn merge_with_int(seed: Self::Digest, value: u64) -> Self::Digest {
        let mut data = [0; 40];
        data[..32].copy_from_slice(&seed.0);
        data[32..].copy_from_slice(&value.to_le_bytes());
        ByteDigest(Sha256::digest(data).into())
    }
}

// BLAKE2S WITH 256-BIT OUTPUT
// ================================================================================================

/// Implementation of the [Hasher] trait for the BLAKE2s hash function with
/// 256-bit output.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blake2s_256;

impl Hasher for Blake2s_256 {
    type Digest = ByteDigest<32>;

    fn hash(bytes: &[u8]) -> Self::Digest {
        ByteDigest(Blake2s256::digest(bytes).into())
    }

    fn merge(values: &[Self::Digest; 2]) -> Self::Digest {
        ByteDigest(Blake2s256::digest(ByteDigest::digests_as_bytes(values)).into())
    }

    fn merge_many(values: &[Self::Digest]) -> Self::Digest {
        ByteDigest(Blake2s256::digest(ByteDigest::digests_as_bytes(values)).into())
    }

    fn merge_with_int(seed: Self::Digest, value: u64) -> Self::Digest {
        let mut data = [0; 40];
        data[..32].copy_from_slice(&seed.0);
        data[32..].copy_from_slice(&value.to_le_bytes());
        ByteDigest(Blake2s256::digest(data).into())
    }
}
