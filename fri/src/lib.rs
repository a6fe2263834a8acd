// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the FRI protocol (Fast Reed-Solomon Interactive
//! Oracle Proof of Proximity).
//!
//! FRI proves that a committed vector of field-element evaluations is close
//! to a polynomial of bounded degree. The prover recursively folds the
//! evaluations 4-to-1 — each fold interpolates rows of four evaluations into
//! cubic polynomials and evaluates them at a pseudo-random point derived from
//! the commitment to the current layer — until the residual codeword is small
//! enough to be checked directly. The verifier spot-checks each fold at
//! pseudo-random positions derived from the commitment to the folded layer.

pub mod folding;

mod options;
pub use options::{FriOptions, FOLDING_FACTOR, MAX_REMAINDER_LENGTH};

mod proof;
pub use proof::{FriComponent, LowDegreeProof, ProofLayer};

mod prover;
pub use prover::{DefaultProverChannel, FriProver, ProverChannel};

mod verifier;
pub use verifier::{verify, VerifierChannel};

mod errors;
pub use errors::{ProverError, VerifierError};

mod utils;
pub use self::utils::fold_positions;
