// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A STARK prover and verifier built around a quartic FRI low-degree test.
//!
//! A computation is described through the [Air] trait: a set of transition
//! constraints over trace registers plus boundary assertions tying trace
//! cells to public values. Given such a description and a matching execution
//! trace, [prove] produces a [StarkProof] which anybody can check with
//! [verify] in time which is logarithmic in the length of the computation.
//!
//! # Usage
//! ```no_run
//! use glacier::{
//!     fields::f32::BaseElement, prove, verify, Air, Assertion, FieldElement, ProofOptions,
//!     TraceTable,
//! };
//!
//! struct DoublingAir {
//!     result: BaseElement,
//!     trace_length: usize,
//! }
//!
//! impl Air for DoublingAir {
//!     type BaseField = BaseElement;
//!
//!     fn trace_width(&self) -> usize {
//!         1
//!     }
//!
//!     fn num_constraints(&self) -> usize {
//!         1
//!     }
//!
//!     fn max_constraint_degree(&self) -> usize {
//!         1
//!     }
//!
//!     fn evaluate_transition(
//!         &self,
//!         current: &[BaseElement],
//!         next: &[BaseElement],
//!         result: &mut [BaseElement],
//!     ) {
//!         result[0] = next[0] - current[0].double();
//!     }
//!
//!     fn get_assertions(&self) -> Vec<Assertion<BaseElement>> {
//!         vec![
//!             Assertion::new(0, 0, BaseElement::ONE),
//!             Assertion::new(0, self.trace_length - 1, self.result),
//!         ]
//!     }
//! }
//!
//! // run the computation
//! let trace_length = 1024;
//! let mut trace = TraceTable::new(1, trace_length);
//! trace.fill(
//!     |state| state[0] = BaseElement::ONE,
//!     |_, state| state[0] = state[0].double(),
//! );
//!
//! // prove and verify
//! let air = DoublingAir { result: trace.get(0, trace_length - 1), trace_length };
//! let proof = prove(&air, trace, ProofOptions::default_for_degree(1)).unwrap();
//! verify(&air, proof).unwrap();
//! ```

pub use common::{
    errors::ConfigurationError,
    proof::StarkProof,
    Air, Assertion, ComputationContext, HashAlgorithm, ProofOptions,
};
pub use crypto::{Blake2s_256, ByteDigest, Hasher, MerkleTree, Sha2_256};
pub use fri::{FriOptions, LowDegreeProof};
pub use math::{fields, FieldElement, StarkField};
pub use prover::{prove, ProverError, TraceTable};
pub use verifier::{verify, VerifierError};

#[cfg(test)]
mod tests;
