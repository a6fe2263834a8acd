// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{proof::LowDegreeProof, FriOptions, VerifierError};
use crypto::{BatchMerkleProof, ByteDigest, Hasher};
use math::StarkField;

// VERIFIER CHANNEL
// ================================================================================================

/// Defines the side of the prover-verifier communication channel visible to
/// the FRI verifier.
///
/// The channel parses a wire-format [LowDegreeProof] into typed layers:
/// query rows become field elements, and leaf digests re-computed from those
/// rows are combined with the interior proof nodes into verifiable batch
/// Merkle proofs.
pub struct VerifierChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    domain_size: usize,
    num_queries: usize,
    blowup_factor: usize,
    lc_root: H::Digest,
    lc_rows: Vec<[B; 4]>,
    lc_proof: BatchMerkleProof<H>,
    layers: Vec<VerifierLayer<B, H>>,
    remainder: Vec<B>,
}

/// Parsed commitment and query openings for a single folding layer.
pub(crate) struct VerifierLayer<B, H>
where
    B: StarkField,
    H: Hasher,
{
    pub column_root: H::Digest,
    pub column_rows: Vec<[B; 4]>,
    pub column_proof: BatchMerkleProof<H>,
    pub poly_rows: Vec<[B; 4]>,
    pub poly_proof: BatchMerkleProof<H>,
}

impl<B, H> VerifierChannel<B, H>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    /// Parses the provided proof for an evaluation domain of the specified
    /// size into a new verifier channel.
    ///
    /// # Errors
    /// Returns an error if the number of proof components does not match the
    /// domain size, or if any layer or the remainder fails to parse.
    pub fn new(
        proof: LowDegreeProof,
        domain_size: usize,
        options: &FriOptions,
    ) -> Result<Self, VerifierError> {
        let num_layers = options.num_fri_layers(domain_size);
        if proof.components.len() != num_layers {
            return Err(VerifierError::NumFriLayersMismatch(num_layers, proof.components.len()));
        }

        let (lc_rows, lc_proof) = proof
            .lc_proof
            .parse::<H, B>()
            .map_err(|err| VerifierError::LayerDeserializationError(0, err.to_string()))?;

        let mut layers = Vec::with_capacity(num_layers);
        for (depth, component) in proof.components.iter().enumerate() {
            let (column_rows, column_proof) = component
                .column_proof
                .parse::<H, B>()
                .map_err(|err| VerifierError::LayerDeserializationError(depth, err.to_string()))?;
            let (poly_rows, poly_proof) = component
                .poly_proof
                .parse::<H, B>()
                .map_err(|err| VerifierError::LayerDeserializationError(depth, err.to_string()))?;
            layers.push(VerifierLayer {
                column_root: component.column_root,
                column_rows,
                column_proof,
                poly_rows,
                poly_proof,
            });
        }

        let remainder = proof
            .parse_remainder::<B>()
            .map_err(|err| VerifierError::RemainderDeserializationError(err.to_string()))?;
        let expected_remainder_length = options.fri_remainder_length(domain_size);
        if remainder.len() != expected_remainder_length {
            return Err(VerifierError::RemainderDeserializationError(format!(
                "remainder must contain {} elements, but contained {}",
                expected_remainder_length,
                remainder.len()
            )));
        }

        Ok(VerifierChannel {
            domain_size,
            num_queries: options.num_queries(),
            blowup_factor: options.blowup_factor(),
            lc_root: proof.lc_root,
            lc_rows,
            lc_proof,
            layers,
            remainder,
        })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the size of the evaluation domain of the proof.
    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// Returns the number of queries spot-checked at each layer.
    pub fn num_queries(&self) -> usize {
        self.num_queries
    }

    /// Returns the Reed-Solomon blowup factor of the evaluation domain.
    pub fn blowup_factor(&self) -> usize {
        self.blowup_factor
    }

    /// Returns the commitment to the combined evaluation vector.
    pub fn lc_root(&self) -> H::Digest {
        self.lc_root
    }

    pub(crate) fn lc_rows(&self) -> &[[B; 4]] {
        &self.lc_rows
    }

    pub(crate) fn lc_proof(&self) -> &BatchMerkleProof<H> {
        &self.lc_proof
    }

    pub(crate) fn layers(&self) -> &[VerifierLayer<B, H>] {
        &self.layers
    }

    pub(crate) fn remainder(&self) -> &[B] {
        &self.remainder
    }
}
