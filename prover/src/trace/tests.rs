// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::TraceTable;
use crate::domain::StarkDomain;
use common::{Air, Assertion, ComputationContext, ProofOptions};
use math::{fft, fields::f32::BaseElement, FieldElement};

// TEST COMPUTATION
// ================================================================================================

struct TestAir;

impl Air for TestAir {
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
        vec![Assertion::new(0, 0, BaseElement::ONE), Assertion::new(1, 0, BaseElement::ONE)]
    }
}

fn build_trace(length: usize) -> TraceTable<BaseElement> {
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

// TESTS
// ================================================================================================

#[test]
fn fill_and_read() {
    let trace = build_trace(16);
    assert_eq!(2, trace.width());
    assert_eq!(16, trace.len());
    assert_eq!(BaseElement::ONE, trace.get(0, 0));
    assert_eq!(BaseElement::new(2), trace.get(0, 1));
    assert_eq!(BaseElement::new(3), trace.get(1, 1));

    let mut row = [BaseElement::ZERO; 2];
    trace.read_row_into(1, &mut row);
    assert_eq!([BaseElement::new(2), BaseElement::new(3)], row);
}

#[test]
fn validate_trace() {
    let trace = build_trace(16);
    assert!(trace.validate(&TestAir).is_ok());

    // break an assertion
    let mut bad_trace = trace.clone();
    bad_trace.update_row(0, &[BaseElement::new(7), BaseElement::ONE]);
    assert!(bad_trace.validate(&TestAir).is_err());
}

#[test]
fn extend_trace() {
    let trace = build_trace(16);
    let options = ProofOptions::default_for_degree(1);
    let context = ComputationContext::new(2, 16, 2, 1, options).unwrap();
    let domain = StarkDomain::new(&context);

    let trace_lde = trace.extend(&domain);
    assert_eq!(trace.width(), trace_lde.width());
    assert_eq!(trace.len() * context.extension_factor(), trace_lde.len());

    // the trace domain is embedded in the extension domain at stride
    // positions
    let blowup = context.extension_factor();
    for register in 0..trace.width() {
        for step in 0..trace.len() {
            assert_eq!(
                trace.get(register, step),
                trace_lde.register_values(register)[step * blowup]
            );
        }
    }

    // extension must not raise the degree of any register polynomial
    for register in 0..trace.width() {
        let degree = fft::infer_degree(trace_lde.register_values(register), BaseElement::ONE);
        assert!(degree < trace.len());
    }
}
