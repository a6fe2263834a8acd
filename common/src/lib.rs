// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Common components shared by the Glacier STARK prover and verifier: the
//! protocol configuration surface, the computation context binding a
//! constraint system to a concrete execution, the [Air] trait through which
//! computations are described, and the proof envelope.

pub mod errors;
pub mod proof;

mod options;
pub use options::{HashAlgorithm, ProofOptions};

mod context;
pub use context::ComputationContext;

mod air;
pub use air::{group_assertions, Air, Assertion, BoundaryConstraintGroup};

mod composition;
pub use composition::LinearCombination;

mod random;
pub use random::PublicCoin;
