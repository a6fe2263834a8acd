// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{domain::StarkDomain, trace::TraceLde};
use common::LinearCombination;
use math::{get_power_series, StarkField};

// EVALUATION COMBINER
// ================================================================================================

/// Combines trace, boundary quotient, and transition quotient evaluations
/// into a single vector over the low-degree extension domain; this vector is
/// the input to the FRI low-degree test.
///
/// The combination scheme (coefficient ordering and degree lifts) is shared
/// with the verifier through [LinearCombination]; here it is applied
/// position-by-position over the whole domain, with the lift powers computed
/// as a power series of g^lift_exponent.
pub fn combine_evaluations<B: StarkField>(
    scheme: &LinearCombination,
    coefficients: &[B],
    trace: &TraceLde<B>,
    boundary_quotients: &[Vec<B>],
    transition_quotients: &[Vec<B>],
    domain: &StarkDomain<B>,
) -> Vec<B> {
    let n = domain.lde_domain_size();

    // x^lift at position i is (g^lift)^i
    let lift_base = domain.lde_values()[1].exp((scheme.lift_exponent() as u64).into());
    let lift_powers = get_power_series(lift_base, n);

    let mut trace_row = vec![B::ZERO; trace.width()];
    let mut boundary_row = vec![B::ZERO; boundary_quotients.len()];
    let mut transition_row = vec![B::ZERO; transition_quotients.len()];

    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        trace.read_row_into(i, &mut trace_row);
        for (value, quotient) in boundary_row.iter_mut().zip(boundary_quotients.iter()) {
            *value = quotient[i];
        }
        for (value, quotient) in transition_row.iter_mut().zip(transition_quotients.iter()) {
            *value = quotient[i];
        }

        result.push(scheme.combine(
            &trace_row,
            &boundary_row,
            &transition_row,
            coefficients,
            lift_powers[i],
        ));
    }

    result
}
