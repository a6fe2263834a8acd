// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::ComputationContext;
use math::FieldElement;

// LINEAR COMBINATION
// ================================================================================================

/// Describes how trace, boundary, and transition quotient evaluations are
/// batched into a single low-degree target.
///
/// All inner vectors are combined with pseudo-random coefficients into one
/// vector whose claimed degree bound is the composition degree of the
/// context. Since the inner vectors sit at different degrees, some of them
/// are lifted by a power of x first:
/// * when the composition degree exceeds the trace length, trace and
///   boundary vectors are included twice — once as-is and once lifted to the
///   composition degree;
/// * otherwise the transition quotients (which sit well below the trace
///   degree for linear constraint systems) are lifted instead.
///
/// The prover and the verifier construct this scheme independently from the
/// shared context, which fixes the coefficient ordering on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination {
    num_registers: usize,
    num_boundary_groups: usize,
    num_constraints: usize,
    raise_trace: bool,
    lift_exponent: usize,
}

impl LinearCombination {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a combination scheme for the specified context and number of
    /// boundary constraint groups.
    pub fn new(context: &ComputationContext, num_boundary_groups: usize) -> Self {
        let trace_length = context.trace_length();
        let target_degree = context.composition_degree();

        let (raise_trace, lift_exponent) = if target_degree > trace_length {
            // lift trace and boundary vectors up to the target degree
            (true, target_degree - trace_length)
        } else {
            // lift transition quotients instead; for constraint degree 1 the
            // quotients are near-constant and get the full lift, while for
            // degree 2 they already sit at the target degree
            let lift = (trace_length - 1) * 2usize.saturating_sub(context.max_constraint_degree());
            (false, lift)
        };

        LinearCombination {
            num_registers: context.trace_width(),
            num_boundary_groups,
            num_constraints: context.num_constraints(),
            raise_trace,
            lift_exponent,
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of pseudo-random coefficients the combination
    /// consumes.
    pub fn num_coefficients(&self) -> usize {
        if self.raise_trace {
            2 * (self.num_registers + self.num_boundary_groups) + self.num_constraints
        } else {
            self.num_registers + self.num_boundary_groups + self.num_constraints
        }
    }

    /// Returns the exponent of the degree-adjustment power of x.
    pub fn lift_exponent(&self) -> usize {
        self.lift_exponent
    }

    // COMBINATION
    // --------------------------------------------------------------------------------------------

    /// Combines evaluations of all inner vectors at a single domain
    /// position; `lift_power` must be x^[Self::lift_exponent] at that
    /// position.
    ///
    /// # Panics
    /// Panics if slice lengths don't match the scheme, or if fewer
    /// coefficients are provided than [Self::num_coefficients].
    pub fn combine<B: FieldElement>(
        &self,
        trace_values: &[B],
        boundary_values: &[B],
        transition_values: &[B],
        coefficients: &[B],
        lift_power: B,
    ) -> B {
        debug_assert_eq!(self.num_registers, trace_values.len());
        debug_assert_eq!(self.num_boundary_groups, boundary_values.len());
        debug_assert_eq!(self.num_constraints, transition_values.len());
        assert!(coefficients.len() >= self.num_coefficients(), "not enough coefficients");

        let mut coefficients = coefficients.iter();
        let mut next = || *coefficients.next().expect("coefficient count already checked");

        let mut result = B::ZERO;
        if self.raise_trace {
            for &value in trace_values {
                result += next() * value * lift_power;
            }
            for &value in boundary_values {
                result += next() * value * lift_power;
            }
            for &value in trace_values {
                result += next() * value;
            }
            for &value in boundary_values {
                result += next() * value;
            }
            for &value in transition_values {
                result += next() * value;
            }
        } else {
            for &value in trace_values {
                result += next() * value;
            }
            for &value in boundary_values {
                result += next() * value;
            }
            for &value in transition_values {
                result += next() * value * lift_power;
            }
        }
        result
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::LinearCombination;
    use crate::{ComputationContext, ProofOptions};
    use math::fields::f32::BaseElement;

    fn build_context(trace_length: usize, max_constraint_degree: usize) -> ComputationContext {
        let options = ProofOptions::default_for_degree(max_constraint_degree);
        ComputationContext::new(2, trace_length, 2, max_constraint_degree, options).unwrap()
    }

    #[test]
    fn scheme_for_linear_constraints() {
        // for degree-1 systems the transition quotients get the full lift
        let scheme = LinearCombination::new(&build_context(64, 1), 2);
        assert_eq!(2 + 2 + 2, scheme.num_coefficients());
        assert_eq!(63, scheme.lift_exponent());
    }

    #[test]
    fn scheme_for_quadratic_constraints() {
        // degree-2 quotients already sit at the target degree
        let scheme = LinearCombination::new(&build_context(64, 2), 1);
        assert_eq!(2 + 1 + 2, scheme.num_coefficients());
        assert_eq!(0, scheme.lift_exponent());
    }

    #[test]
    fn scheme_for_cubic_constraints() {
        // above degree 2 the trace and boundary vectors are lifted instead
        // and included twice
        let scheme = LinearCombination::new(&build_context(64, 3), 1);
        assert_eq!(2 * (2 + 1) + 2, scheme.num_coefficients());
        assert_eq!(64, scheme.lift_exponent());
    }

    #[test]
    fn combine_matches_manual_sum() {
        let scheme = LinearCombination::new(&build_context(64, 1), 1);
        let coefficients =
            (1u32..=5).map(BaseElement::new).collect::<Vec<_>>();

        let p = [BaseElement::new(7), BaseElement::new(11)];
        let b = [BaseElement::new(13)];
        let d = [BaseElement::new(17), BaseElement::new(19)];
        let lift = BaseElement::new(23);

        let expected = coefficients[0] * p[0]
            + coefficients[1] * p[1]
            + coefficients[2] * b[0]
            + coefficients[3] * d[0] * lift
            + coefficients[4] * d[1] * lift;
        assert_eq!(expected, scheme.combine(&p, &b, &d, &coefficients, lift));
    }
}
