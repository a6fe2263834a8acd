// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{domain::StarkDomain, errors::ProverError};
use common::{proof::Queries, Air, ComputationContext};
use crypto::{Hasher, MerkleTree};
use math::{fft, StarkField};

#[cfg(test)]
mod tests;

// EXECUTION TRACE TABLE
// ================================================================================================

/// An execution trace of a computation: a column per register, a row per
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTable<B: StarkField> {
    registers: Vec<Vec<B>>,
}

impl<B: StarkField> TraceTable<B> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new trace table of the specified shape with all cells set
    /// to ZERO.
    ///
    /// # Panics
    /// Panics if the width is zero or the length is not a power of two of at
    /// least [ComputationContext::MIN_TRACE_LENGTH] steps.
    pub fn new(width: usize, length: usize) -> Self {
        assert!(width > 0, "trace width must be greater than 0");
        assert!(
            length >= ComputationContext::MIN_TRACE_LENGTH,
            "trace length must be at least {}, but was {}",
            ComputationContext::MIN_TRACE_LENGTH,
            length
        );
        assert!(length.is_power_of_two(), "trace length must be a power of 2, but was {}", length);
        TraceTable { registers: vec![B::zeroed_vector(length); width] }
    }

    /// Fills the trace by running the computation: `init` populates the
    /// first state, and `update` advances the state by one step.
    pub fn fill<I, U>(&mut self, init: I, update: U)
    where
        I: FnOnce(&mut [B]),
        U: Fn(usize, &mut [B]),
    {
        let mut state = vec![B::ZERO; self.width()];
        init(&mut state);
        self.update_row(0, &state);

        for step in 0..self.len() - 1 {
            update(step, &mut state);
            self.update_row(step + 1, &state);
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of registers in the trace.
    pub fn width(&self) -> usize {
        self.registers.len()
    }

    /// Returns the number of steps in the trace.
    pub fn len(&self) -> usize {
        self.registers[0].len()
    }

    /// Returns true if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.registers[0].is_empty()
    }

    /// Returns the value of the specified register at the specified step.
    pub fn get(&self, register: usize, step: usize) -> B {
        self.registers[register][step]
    }

    /// Updates a single row of the trace with the provided state.
    pub fn update_row(&mut self, step: usize, state: &[B]) {
        for (register, &value) in self.registers.iter_mut().zip(state.iter()) {
            register[step] = value;
        }
    }

    /// Copies the values of all registers at the specified step into
    /// `target`.
    pub fn read_row_into(&self, step: usize, target: &mut [B]) {
        for (register, value) in self.registers.iter().zip(target.iter_mut()) {
            *value = register[step];
        }
    }

    // VALIDATION
    // --------------------------------------------------------------------------------------------

    /// Checks that this trace satisfies the boundary assertions of the
    /// specified computation; in debug builds the transition constraints
    /// are re-evaluated over the entire trace as well.
    pub fn validate<A: Air<BaseField = B>>(&self, air: &A) -> Result<(), ProverError> {
        for assertion in air.get_assertions() {
            if self.get(assertion.register, assertion.step) != assertion.value {
                return Err(ProverError::AssertionNotSatisfied(assertion.register, assertion.step));
            }
        }

        #[cfg(debug_assertions)]
        {
            let mut current = vec![B::ZERO; self.width()];
            let mut next = vec![B::ZERO; self.width()];
            let mut evaluations = vec![B::ZERO; air.num_constraints()];
            for step in 0..self.len() - 1 {
                self.read_row_into(step, &mut current);
                self.read_row_into(step + 1, &mut next);
                air.evaluate_transition(&current, &next, &mut evaluations);
                if evaluations.iter().any(|&e| e != B::ZERO) {
                    return Err(ProverError::UnsatisfiedTransitionConstraint(step));
                }
            }
        }

        Ok(())
    }

    // LOW-DEGREE EXTENSION
    // --------------------------------------------------------------------------------------------

    /// Interpolates every register into a polynomial and evaluates it over
    /// the low-degree extension domain.
    pub fn extend(&self, domain: &StarkDomain<B>) -> TraceLde<B> {
        assert_eq!(self.len(), domain.trace_length(), "inconsistent trace length");

        let registers = self
            .registers
            .iter()
            .map(|register| {
                let mut poly = register.clone();
                fft::interpolate_poly(&mut poly, domain.trace_inv_twiddles());
                fft::evaluate_poly_with_offset(
                    &poly,
                    domain.trace_twiddles(),
                    B::ONE,
                    domain.extension_factor(),
                )
            })
            .collect();

        TraceLde { registers }
    }
}

// EXTENDED EXECUTION TRACE
// ================================================================================================

/// Evaluations of all register polynomials over the low-degree extension
/// domain.
pub struct TraceLde<B: StarkField> {
    registers: Vec<Vec<B>>,
}

impl<B: StarkField> TraceLde<B> {
    /// Returns the number of registers in the trace.
    pub fn width(&self) -> usize {
        self.registers.len()
    }

    /// Returns the number of evaluations per register.
    pub fn len(&self) -> usize {
        self.registers[0].len()
    }

    /// Returns true if the extended trace is empty.
    pub fn is_empty(&self) -> bool {
        self.registers[0].is_empty()
    }

    /// Returns all evaluations of the specified register.
    pub fn register_values(&self, register: usize) -> &[B] {
        &self.registers[register]
    }

    /// Copies the values of all registers at the specified position into
    /// `target`.
    pub fn read_row_into(&self, position: usize, target: &mut [B]) {
        for (register, value) in self.registers.iter().zip(target.iter_mut()) {
            *value = register[position];
        }
    }

    /// Commits to the extended trace by hashing every row into a Merkle
    /// tree leaf.
    pub fn build_commitment<H: Hasher>(&self) -> MerkleTree<H> {
        let mut row = vec![B::ZERO; self.width()];
        let mut leaves = Vec::with_capacity(self.len());
        for position in 0..self.len() {
            self.read_row_into(position, &mut row);
            leaves.push(H::hash_elements(&row));
        }
        MerkleTree::new(leaves)
    }

    /// Returns openings of trace rows at the specified positions: the raw
    /// rows together with a batch Merkle proof against the trace commitment.
    pub fn query<H: Hasher>(&self, tree: &MerkleTree<H>, positions: &[usize]) -> Queries {
        assert_eq!(self.len(), tree.leaves().len(), "inconsistent trace commitment");

        let mut rows = Vec::with_capacity(positions.len());
        for &position in positions.iter() {
            let mut row = vec![B::ZERO; self.width()];
            self.read_row_into(position, &mut row);
            rows.push(row);
        }

        Queries::new(rows, tree.prove_batch(positions))
    }
}
