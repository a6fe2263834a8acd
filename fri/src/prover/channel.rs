// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::marker::PhantomData;
use crypto::Hasher;
use math::StarkField;

// PROVER CHANNEL TRAIT
// ================================================================================================

/// Defines the side of the prover-verifier communication channel visible to
/// the FRI prover.
///
/// The prover writes layer commitments into the channel in the exact order
/// the verifier consumes them; all pseudo-randomness of the protocol is then
/// derived from these commitments.
pub trait ProverChannel<B: StarkField> {
    /// Hash function used to compute commitments.
    type Hasher: Hasher;

    /// Records a commitment to a folding layer.
    fn commit_fri_layer(&mut self, layer_root: <Self::Hasher as Hasher>::Digest);
}

// DEFAULT PROVER CHANNEL
// ================================================================================================

/// A minimal [ProverChannel] which simply accumulates layer commitments;
/// used when the FRI prover runs outside of the outer STARK protocol.
pub struct DefaultProverChannel<B: StarkField, H: Hasher> {
    commitments: Vec<H::Digest>,
    _base_field: PhantomData<B>,
}

impl<B: StarkField, H: Hasher> DefaultProverChannel<B, H> {
    /// Returns a new empty channel.
    pub fn new() -> Self {
        DefaultProverChannel { commitments: Vec::new(), _base_field: PhantomData }
    }

    /// Returns the commitments recorded so far.
    pub fn layer_commitments(&self) -> &[H::Digest] {
        &self.commitments
    }
}

impl<B: StarkField, H: Hasher> Default for DefaultProverChannel<B, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StarkField, H: Hasher> ProverChannel<B> for DefaultProverChannel<B, H> {
    type Hasher = H;

    fn commit_fri_layer(&mut self, layer_root: H::Digest) {
        self.commitments.push(layer_root);
    }
}
