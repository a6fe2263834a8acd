// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The Glacier STARK verifier.
//!
//! Verification mirrors proof generation without ever re-running the
//! computation: query positions and combination coefficients are re-derived
//! from the trace commitment, revealed trace rows are checked against that
//! commitment, transition and boundary constraints are re-evaluated at the
//! queried positions to compute the expected values of the combined vector,
//! and the low-degree proof ties those values to a polynomial of the
//! expected degree.

use common::{
    group_assertions, proof::augment_trace_positions, proof::StarkProof, Air, ComputationContext,
    HashAlgorithm, LinearCombination, PublicCoin,
};
use crypto::{Blake2s_256, ByteDigest, Hasher, Sha2_256};
use math::{FieldElement, StarkField};
use utils::log2;

mod channel;
pub use channel::VerifierChannel;

mod errors;
pub use errors::VerifierError;

// VERIFIER
// ================================================================================================

/// Verifies that the specified proof attests to a valid execution of the
/// computation described by `air`.
///
/// Verification either succeeds with Ok(()) or fails with an error
/// describing the first check that did not pass; it never reports failure
/// through a return value.
pub fn verify<A: Air>(air: &A, proof: StarkProof) -> Result<(), VerifierError> {
    // make sure the proof was generated over the expected field and for the
    // expected computation shape
    if proof.context.field_modulus_bytes() != A::BaseField::get_modulus_le_bytes() {
        return Err(VerifierError::InconsistentBaseField);
    }
    if proof.context.trace_width() != air.trace_width()
        || proof.context.num_constraints() != air.num_constraints()
        || proof.context.max_constraint_degree() != air.max_constraint_degree()
    {
        return Err(VerifierError::InconsistentContext);
    }
    let trace_length = proof.context.trace_length();
    let extension_factor = proof.context.options().extension_factor();
    if trace_length < ComputationContext::MIN_TRACE_LENGTH
        || log2(trace_length) + log2(extension_factor) > A::BaseField::TWO_ADICITY
    {
        return Err(VerifierError::InconsistentContext);
    }

    let context = ComputationContext::new(
        air.trace_width(),
        trace_length,
        air.num_constraints(),
        air.max_constraint_degree(),
        proof.context.options().clone(),
    )?;

    // static dispatch over the commitment hash function
    match context.options().hash_algorithm() {
        HashAlgorithm::Sha2_256 => perform_verification::<A, Sha2_256>(air, proof, context),
        HashAlgorithm::Blake2s_256 => perform_verification::<A, Blake2s_256>(air, proof, context),
    }
}

// VERIFICATION PROCEDURE
// ================================================================================================

fn perform_verification<A, H>(
    air: &A,
    proof: StarkProof,
    context: ComputationContext,
) -> Result<(), VerifierError>
where
    A: Air,
    H: Hasher<Digest = ByteDigest<32>>,
{
    let StarkProof { trace_root, trace_queries, low_degree_proof, .. } = proof;
    let channel = VerifierChannel::<A::BaseField, H>::new(context.clone(), trace_root, &trace_queries)?;

    // 1 ----- re-derive query positions and check trace openings ---------------------------------
    let positions = channel.draw_query_positions()?;
    let trace_positions = augment_trace_positions(
        &positions,
        context.extension_factor(),
        context.lde_domain_size(),
    );
    let trace_rows = channel.read_trace_rows(&trace_positions)?;

    // 2 ----- re-evaluate constraints at the queried positions -----------------------------------
    let boundary_groups = group_assertions(air, context.trace_length());
    let scheme = LinearCombination::new(&context, boundary_groups.len());
    let coefficients = channel.draw_composition_coefficients(scheme.num_coefficients())?;

    let g_lde = context.get_lde_domain_generator::<A::BaseField>();
    let g_trace = context.get_trace_domain_generator::<A::BaseField>();
    let steps = context.trace_length();
    let x_last = g_trace.exp(((steps - 1) as u64).into());

    let mut transition_evaluations = vec![A::BaseField::ZERO; air.num_constraints()];
    let mut expected_evaluations = Vec::with_capacity(positions.len());
    for &position in positions.iter() {
        let x = g_lde.exp((position as u64).into());

        let row_idx = trace_positions
            .iter()
            .position(|&p| p == position)
            .expect("position is present by construction");
        let next_idx = trace_positions
            .iter()
            .position(|&p| p == (position + context.extension_factor()) % context.lde_domain_size())
            .expect("shifted position is present by construction");
        let current = &trace_rows[row_idx];
        let next = &trace_rows[next_idx];

        // transition quotients: D(x) = Q(x) * (x - x_last) / (x^steps - 1);
        // query positions never land on the execution domain, so the
        // denominator cannot vanish here
        air.evaluate_transition(current, next, &mut transition_evaluations);
        let adjustment = (x - x_last) * (x.exp((steps as u64).into()) - A::BaseField::ONE).inv();
        let transition_values = transition_evaluations
            .iter()
            .map(|&evaluation| evaluation * adjustment)
            .collect::<Vec<_>>();

        // boundary quotients: (P(x) - I(x)) / Z_b(x)
        let boundary_values = boundary_groups
            .iter()
            .map(|group| {
                group.evaluate_numerator_at(x, current[group.register()])
                    / group.evaluate_divisor_at(x)
            })
            .collect::<Vec<_>>();

        let lift_power = x.exp((scheme.lift_exponent() as u64).into());
        expected_evaluations.push(scheme.combine(
            current,
            &boundary_values,
            &transition_values,
            &coefficients,
            lift_power,
        ));
    }

    // 3 ----- verify the low-degree proof --------------------------------------------------------
    let fri_channel = fri::VerifierChannel::<A::BaseField, H>::new(
        low_degree_proof,
        context.lde_domain_size(),
        &context.options().to_fri_options(),
    )?;
    fri::verify(&fri_channel, &expected_evaluations, &positions, context.composition_degree())?;

    Ok(())
}
