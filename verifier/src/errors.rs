// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use common::errors::ConfigurationError;
use crypto::RandomCoinError;
use thiserror::Error;

// VERIFIER ERROR
// ================================================================================================

/// Defines errors which can occur during proof verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Protocol parameters carried by the proof are invalid.
    #[error("invalid proof configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The proof was generated over a different base field.
    #[error("base field of the proof does not match base field of the computation")]
    InconsistentBaseField,
    /// The proof context does not match the shape of the computation.
    #[error("proof context does not match the specified computation")]
    InconsistentContext,
    /// Parts of the proof could not be parsed.
    #[error("proof deserialization failed: {0}")]
    ProofDeserializationError(String),
    /// Revealed trace rows do not resolve to the trace commitment.
    #[error("trace query did not match the commitment")]
    TraceQueryDoesNotMatchCommitment,
    /// The low-degree proof was rejected.
    #[error("verification of low-degree proof failed: {0}")]
    FriVerificationFailed(#[from] fri::VerifierError),
    /// Failed to derive pseudo-random values from commitments.
    #[error("failed to draw a pseudo-random value: {0}")]
    RandomCoinError(#[from] RandomCoinError),
}
