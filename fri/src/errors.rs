// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::RandomCoinError;
use thiserror::Error;

// VERIFIER ERROR
// ================================================================================================

/// Defines errors which can occur during verification of a low-degree proof.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// The proof structure does not match the evaluation domain.
    #[error("number of FRI layers must be {0}, but was {1}")]
    NumFriLayersMismatch(usize, usize),
    /// A layer of the proof could not be deserialized.
    #[error("FRI queries at layer {0} could not be deserialized: {1}")]
    LayerDeserializationError(usize, String),
    /// A claimed combination value does not match the committed one.
    #[error("linear combination value at position {0} did not match the proof")]
    LinearCombinationMismatch(usize),
    /// The revealed combination rows do not resolve to the committed root.
    #[error("linear combination queries did not match the commitment")]
    LinearCombinationCommitmentMismatch,
    /// Revealed query rows do not resolve to a committed layer root.
    #[error("FRI queries did not match the commitment at layer {0}")]
    LayerCommitmentMismatch(usize),
    /// Folded values are inconsistent with the claimed row polynomials.
    #[error("FRI evaluations did not match query values at depth {0}")]
    LayerValuesNotConsistent(usize),
    /// The remainder could not be deserialized.
    #[error("FRI remainder could not be deserialized: {0}")]
    RemainderDeserializationError(String),
    /// The remainder does not hash to the last committed layer root.
    #[error("FRI remainder did not match the commitment")]
    RemainderCommitmentMismatch,
    /// The residual degree bound exceeds the number of remainder values.
    #[error("FRI remainder expected degree is greater than number of remainder values")]
    RemainderDegreeNotValid,
    /// The remainder failed the direct low-degree check.
    #[error("FRI remainder is not a valid degree {0} polynomial")]
    RemainderDegreeMismatch(usize),
    /// Failed to derive pseudo-random queries or folding randomness.
    #[error("failed to draw a pseudo-random value: {0}")]
    RandomCoinError(#[from] RandomCoinError),
}

// PROVER ERROR
// ================================================================================================

/// Defines errors which can occur during generation of a low-degree proof.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProverError {
    /// The prover's own remainder failed the direct low-degree check; this
    /// indicates an arithmetic bug rather than malicious input.
    #[error("remainder self-check failed: {0}")]
    RemainderSelfCheckFailed(VerifierError),
    /// Failed to derive pseudo-random queries or folding randomness.
    #[error("failed to draw a pseudo-random value: {0}")]
    RandomCoinError(#[from] RandomCoinError),
}
