// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::VerifierError;
use common::{proof::Queries, ComputationContext, PublicCoin};
use crypto::{BatchMerkleProof, ByteDigest, Hasher, MerkleTree};
use math::StarkField;

// VERIFIER CHANNEL
// ================================================================================================

/// Defines the side of the prover-verifier communication channel visible to
/// the STARK verifier: the trace commitment with its parsed query openings,
/// and the public-coin randomness derived from the commitment.
pub struct VerifierChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    context: ComputationContext,
    trace_root: H::Digest,
    trace_rows: Vec<Vec<B>>,
    trace_proof: BatchMerkleProof<H>,
}

impl<B, H> VerifierChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    /// Parses the trace openings of a proof into a new verifier channel.
    pub fn new(
        context: ComputationContext,
        trace_root: H::Digest,
        trace_queries: &Queries,
    ) -> Result<Self, VerifierError> {
        let (trace_rows, trace_proof) = trace_queries
            .parse::<H, B>(context.trace_width())
            .map_err(|err| VerifierError::ProofDeserializationError(err.to_string()))?;

        Ok(VerifierChannel { context, trace_root, trace_rows, trace_proof })
    }

    /// Returns trace rows at the specified positions, checking them against
    /// the trace commitment first.
    pub fn read_trace_rows(&self, positions: &[usize]) -> Result<&[Vec<B>], VerifierError> {
        if self.trace_rows.len() != positions.len()
            || !MerkleTree::verify_batch(&self.trace_root, positions, &self.trace_proof)
        {
            return Err(VerifierError::TraceQueryDoesNotMatchCommitment);
        }
        Ok(&self.trace_rows)
    }
}

impl<B, H> PublicCoin for VerifierChannel<B, H>
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
        self.trace_root
    }
}
