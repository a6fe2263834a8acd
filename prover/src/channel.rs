// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use common::{
    proof::{Context, Queries, StarkProof},
    ComputationContext, PublicCoin,
};
use core::marker::PhantomData;
use crypto::{ByteDigest, Hasher};
use fri::LowDegreeProof;
use math::StarkField;

// PROVER CHANNEL
// ================================================================================================

/// Simulates the interaction between the prover and the verifier: all
/// commitments are recorded in the order the verifier will consume them, and
/// all verifier randomness is derived from them via the public coin.
pub struct ProverChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    context: ComputationContext,
    trace_root: Option<H::Digest>,
    fri_roots: Vec<H::Digest>,
    _base_field: PhantomData<B>,
}

impl<B, H> ProverChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    /// Creates a new prover channel for the specified proof context.
    pub fn new(context: &ComputationContext) -> Self {
        ProverChannel {
            context: context.clone(),
            trace_root: None,
            fri_roots: Vec::new(),
            _base_field: PhantomData,
        }
    }

    /// Commits the prover to the extended execution trace.
    ///
    /// # Panics
    /// Panics if a trace commitment has already been recorded.
    pub fn commit_trace(&mut self, trace_root: H::Digest) {
        assert!(self.trace_root.is_none(), "trace root has already been committed");
        self.trace_root = Some(trace_root);
    }

    /// Builds the proof object from the previously committed values and the
    /// provided query openings.
    pub fn build_proof(self, trace_queries: Queries, low_degree_proof: LowDegreeProof) -> StarkProof {
        StarkProof {
            context: Context::new::<B>(&self.context),
            trace_root: self.trace_root.expect("trace root was not committed"),
            trace_queries,
            low_degree_proof,
        }
    }
}

impl<B, H> fri::ProverChannel<B> for ProverChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    type Hasher = H;

    fn commit_fri_layer(&mut self, layer_root: H::Digest) {
        self.fri_roots.push(layer_root);
    }
}

impl<B, H> PublicCoin for ProverChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    type BaseField = B;
    type Hasher = H;

    fn context(&self) -> &ComputationContext {
        &self.context
    }

    fn composition_seed(&self) -> H::Digest {
        self.trace_root.expect("trace root was not committed")
    }
}
