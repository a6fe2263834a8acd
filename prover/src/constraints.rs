// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{domain::StarkDomain, trace::TraceLde};
use common::{Air, BoundaryConstraintGroup};
use math::{batch_inversion, get_power_series, StarkField};

// TRANSITION CONSTRAINTS
// ================================================================================================

/// Evaluates transition constraint quotients over the entire low-degree
/// extension domain; the result contains one evaluation vector per
/// constraint.
///
/// For every position, constraints are evaluated over the trace row at that
/// position and the row one execution step later, and the result is divided
/// by the transition vanishing polynomial
/// Z(x) = (x^steps - 1) / (x - x_last). The division is performed pointwise
/// via batch inversion; at positions where the trace domain is embedded in
/// the extension domain the denominator vanishes and the quotient is left at
/// ZERO. These positions are never queried.
pub fn evaluate_transition_quotients<A, B>(
    air: &A,
    trace: &TraceLde<B>,
    domain: &StarkDomain<B>,
) -> Vec<Vec<B>>
where
    A: Air<BaseField = B>,
    B: StarkField,
{
    let n = domain.lde_domain_size();
    let steps = domain.trace_length();
    let blowup = domain.extension_factor();
    let lde = domain.lde_values();

    // x^steps cycles over the extension domain with period equal to the
    // blowup factor, so only `blowup` distinct denominators exist
    let x_to_steps = lde[1].exp((steps as u64).into());
    let denominators = get_power_series(x_to_steps, blowup)
        .into_iter()
        .map(|z| z - B::ONE)
        .collect::<Vec<_>>();
    let denominator_invs = batch_inversion(&denominators);

    // transitions are not enforced at the last execution step
    let x_last = lde[(steps - 1) * blowup];

    let mut quotients = vec![B::zeroed_vector(n); air.num_constraints()];
    let mut current = vec![B::ZERO; trace.width()];
    let mut next = vec![B::ZERO; trace.width()];
    let mut evaluations = vec![B::ZERO; air.num_constraints()];

    for i in 0..n {
        trace.read_row_into(i, &mut current);
        trace.read_row_into((i + blowup) % n, &mut next);
        air.evaluate_transition(&current, &next, &mut evaluations);

        let adjustment = (lde[i] - x_last) * denominator_invs[i % blowup];
        for (quotient, &evaluation) in quotients.iter_mut().zip(evaluations.iter()) {
            quotient[i] = evaluation * adjustment;
        }
    }

    quotients
}

// BOUNDARY CONSTRAINTS
// ================================================================================================

/// Evaluates boundary constraint quotients over the entire low-degree
/// extension domain; the result contains one evaluation vector per
/// constraint group.
///
/// For every group, the quotient is (P(x) - I(x)) / Z_b(x), where P is the
/// constrained register polynomial, I interpolates the asserted values, and
/// Z_b vanishes on the asserted steps. As with transition quotients, the
/// division is pointwise and positions where Z_b vanishes are left at ZERO.
pub fn evaluate_boundary_quotients<B: StarkField>(
    groups: &[BoundaryConstraintGroup<B>],
    trace: &TraceLde<B>,
    domain: &StarkDomain<B>,
) -> Vec<Vec<B>> {
    let lde = domain.lde_values();

    groups
        .iter()
        .map(|group| {
            let divisors = lde.iter().map(|&x| group.evaluate_divisor_at(x)).collect::<Vec<_>>();
            let divisor_invs = batch_inversion(&divisors);

            let register = trace.register_values(group.register());
            lde.iter()
                .enumerate()
                .map(|(i, &x)| group.evaluate_numerator_at(x, register[i]) * divisor_invs[i])
                .collect()
        })
        .collect()
}
