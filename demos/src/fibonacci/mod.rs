// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{Example, ExampleOptions};
use glacier::{
    fields::f32::BaseElement, prove, verify, Air, Assertion, ConfigurationError, FieldElement,
    ProofOptions, StarkProof, TraceTable, VerifierError,
};
use log::debug;


// FIBONACCI EXAMPLE
// ================================================================================================

/// Returns a Fibonacci example configured with the provided options.
pub fn get_example(
    options: &ExampleOptions,
    sequence_length: usize,
) -> Result<Box<dyn Example>, ConfigurationError> {
    let options = options.to_proof_options(1)?;
    Ok(Box::new(FibExample::new(sequence_length, options)))
}

pub struct FibExample {
    air: FibAir,
    options: ProofOptions,
}

impl FibExample {
    /// Creates a new instance of the example: the expected result is
    /// computed by running the sequence directly.
    pub fn new(trace_length: usize, options: ProofOptions) -> Self {
        assert!(trace_length.is_power_of_two(), "sequence length must be a power of 2");

        let mut s0 = BaseElement::ONE;
        let mut s1 = BaseElement::ONE;
        for _ in 0..trace_length - 1 {
            let t0 = s0 + s1;
            let t1 = s0 + s1.double();
            s0 = t0;
            s1 = t1;
        }

        FibExample { air: FibAir { trace_length, result: s1 }, options }
    }
}

impl Example for FibExample {
    fn prove(&self) -> StarkProof {
        debug!(
            "Generating a proof for computing a double-step Fibonacci sequence of {} terms\n\
            ---------------------",
            self.air.trace_length * 2
        );

        let trace = build_fib_trace(self.air.trace_length);
        prove(&self.air, trace, self.options.clone()).expect("failed to generate the proof")
    }

    fn verify(&self, proof: StarkProof) -> Result<(), VerifierError> {
        verify(&self.air, proof)
    }

    fn verify_with_wrong_inputs(&self, proof: StarkProof) -> Result<(), VerifierError> {
        let air = FibAir {
            trace_length: self.air.trace_length,
            result: self.air.result + BaseElement::ONE,
        };
        verify(&air, proof)
    }
}

// FIBONACCI AIR
// ================================================================================================
// Two registers advance the Fibonacci sequence two terms per step:
// r0' = r0 + r1, r1' = r0 + 2 * r1.

struct FibAir {
    trace_length: usize,
    result: BaseElement,
}

impl Air for FibAir {
    type BaseField = BaseElement;

    fn trace_width(&self) -> usize {
        2
    }

    fn num_constraints(&self) -> usize {
        2
    }

    fn max_constraint_degree(&self) -> usize {
        1
    }

    fn evaluate_transition(
        &self,
        current: &[BaseElement],
        next: &[BaseElement],
        result: &mut [BaseElement],
    ) {
        result[0] = next[0] - (current[0] + current[1]);
        result[1] = next[1] - (current[0] + current[1].double());
    }

    fn get_assertions(&self) -> Vec<Assertion<BaseElement>> {
        vec![
            Assertion::new(0, 0, BaseElement::ONE),
            Assertion::new(1, 0, BaseElement::ONE),
            Assertion::new(1, self.trace_length - 1, self.result),
        ]
    }
}

/// Builds an execution trace of the sequence.
fn build_fib_trace(length: usize) -> TraceTable<BaseElement> {
    let mut trace = TraceTable::new(2, length);
    trace.fill(
        |state| {
            state[0] = BaseElement::ONE;
            state[1] = BaseElement::ONE;
        },
        |_, state| {
            let s0 = state[0] + state[1];
            let s1 = state[0] + state[1].double();
            state[0] = s0;
            state[1] = s1;
        },
    );
    trace
}
