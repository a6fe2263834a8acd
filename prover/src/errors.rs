// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use common::errors::ConfigurationError;
use crypto::RandomCoinError;
use thiserror::Error;

// PROVER ERROR
// ================================================================================================

/// Defines errors which can occur during proof generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProverError {
    /// Protocol parameters were rejected before any work was done.
    #[error("invalid proof configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The execution trace does not satisfy a boundary assertion.
    #[error("assertion for register {0} at step {1} was not satisfied")]
    AssertionNotSatisfied(usize, usize),
    /// The execution trace does not satisfy a transition constraint.
    #[error("a transition constraint was not satisfied at step {0}")]
    UnsatisfiedTransitionConstraint(usize),
    /// The FRI prover failed to produce a low-degree proof.
    #[error("failed to generate the low-degree proof: {0}")]
    FriProverFailed(#[from] fri::ProverError),
    /// Failed to derive pseudo-random values from commitments.
    #[error("failed to draw a pseudo-random value: {0}")]
    RandomCoinError(#[from] RandomCoinError),
}
