// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::{polynom, FieldElement, StarkField};
use std::collections::BTreeMap;
use utils::log2;

// AIR TRAIT
// ================================================================================================

/// Describes a computation as an algebraic intermediate representation: a
/// set of transition constraints over trace registers together with boundary
/// assertions tying specific trace cells to public values.
///
/// The same implementation drives both proving and verification: the prover
/// evaluates transition constraints over the entire extended domain, while
/// the verifier re-evaluates them only at the spot-checked positions.
pub trait Air: Send + Sync {
    /// Base field over which the computation is defined.
    type BaseField: StarkField;

    /// Returns the number of registers in the execution trace.
    fn trace_width(&self) -> usize;

    /// Returns the number of transition constraints.
    fn num_constraints(&self) -> usize;

    /// Returns the maximum algebraic degree of the transition constraints.
    fn max_constraint_degree(&self) -> usize;

    /// Evaluates transition constraints over the provided pair of
    /// consecutive trace states and saves the result into `result`; a
    /// constraint evaluates to ZERO when the transition is valid.
    ///
    /// The slice lengths are `trace_width` for `current` and `next`, and
    /// `num_constraints` for `result`.
    fn evaluate_transition(
        &self,
        current: &[Self::BaseField],
        next: &[Self::BaseField],
        result: &mut [Self::BaseField],
    );

    /// Returns boundary assertions of the computation; every register
    /// referenced by an assertion must exist in the trace, and at least one
    /// assertion must be specified.
    fn get_assertions(&self) -> Vec<Assertion<Self::BaseField>>;
}

// ASSERTION
// ================================================================================================

/// An assertion that a specific register holds a specific value at a
/// specific step of the execution trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion<B: StarkField> {
    /// Index of the asserted register.
    pub register: usize,
    /// Step at which the assertion applies.
    pub step: usize,
    /// The asserted value.
    pub value: B,
}

impl<B: StarkField> Assertion<B> {
    /// Returns a new assertion for the specified register, step, and value.
    pub fn new(register: usize, step: usize, value: B) -> Self {
        Assertion { register, step, value }
    }
}

// BOUNDARY CONSTRAINT GROUPS
// ================================================================================================

/// All assertions against a single register, folded into one boundary
/// constraint: the quotient (P(x) - I(x)) / Z_b(x), where I interpolates the
/// asserted values over the asserted steps and Z_b vanishes exactly on those
/// steps, is a polynomial iff every assertion holds.
#[derive(Debug, Clone)]
pub struct BoundaryConstraintGroup<B: StarkField> {
    register: usize,
    interpolant: Vec<B>,
    xs: Vec<B>,
}

impl<B: StarkField> BoundaryConstraintGroup<B> {
    /// Returns the index of the constrained register.
    pub fn register(&self) -> usize {
        self.register
    }

    /// Evaluates the numerator P(x) - I(x) at the specified coordinate,
    /// given the value of the register polynomial there.
    pub fn evaluate_numerator_at(&self, x: B, trace_value: B) -> B {
        trace_value - polynom::eval(&self.interpolant, x)
    }

    /// Evaluates the divisor Z_b at the specified coordinate.
    pub fn evaluate_divisor_at(&self, x: B) -> B {
        self.xs.iter().fold(B::ONE, |acc, &root| acc * (x - root))
    }
}

/// Groups boundary assertions of the specified computation by register and
/// builds a boundary constraint for every register with at least one
/// assertion; groups are returned in ascending register order.
///
/// # Panics
/// Panics if:
/// * The computation specifies no assertions.
/// * An assertion references a register or step outside of the trace.
/// * Two assertions reference the same register and step.
pub fn group_assertions<A: Air>(
    air: &A,
    trace_length: usize,
) -> Vec<BoundaryConstraintGroup<A::BaseField>> {
    let assertions = air.get_assertions();
    assert!(!assertions.is_empty(), "at least one assertion must be specified");

    let mut groups: BTreeMap<usize, Vec<(usize, A::BaseField)>> = BTreeMap::new();
    for assertion in assertions {
        assert!(
            assertion.register < air.trace_width(),
            "assertion register {} is out of bounds",
            assertion.register
        );
        assert!(
            assertion.step < trace_length,
            "assertion step {} is outside of the trace",
            assertion.step
        );
        let group = groups.entry(assertion.register).or_default();
        assert!(
            group.iter().all(|&(step, _)| step != assertion.step),
            "duplicate assertion for register {} at step {}",
            assertion.register,
            assertion.step
        );
        group.push((assertion.step, assertion.value));
    }

    let g_trace = A::BaseField::get_root_of_unity(log2(trace_length));
    groups
        .into_iter()
        .map(|(register, assertions)| {
            let xs = assertions.iter().map(|&(step, _)| g_trace.exp((step as u64).into())).collect::<Vec<_>>();
            let ys = assertions.iter().map(|&(_, value)| value).collect::<Vec<_>>();
            let interpolant = polynom::interpolate(&xs, &ys, true);
            BoundaryConstraintGroup { register, interpolant, xs }
        })
        .collect()
}
