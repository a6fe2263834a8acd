// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The Glacier STARK prover.
//!
//! Proof generation proceeds in stages: the execution trace is extended over
//! a larger evaluation domain and committed; transition and boundary
//! constraint quotients are evaluated over the same domain; all evaluation
//! vectors are batched into a single low-degree target with pseudo-random
//! coefficients; and the FRI protocol proves that this target is close to a
//! polynomial of the expected degree. Query positions for the commitments
//! are derived from the commitments themselves, which makes the protocol
//! non-interactive.

use common::{
    group_assertions, proof::augment_trace_positions, proof::StarkProof, Air, ComputationContext,
    HashAlgorithm, LinearCombination, ProofOptions, PublicCoin,
};
use crypto::{Blake2s_256, ByteDigest, Hasher, Sha2_256};
use fri::FriProver;
use log::debug;
use std::time::Instant;
use utils::log2;

mod channel;
pub use channel::ProverChannel;

mod composer;
use composer::combine_evaluations;

mod constraints;
use constraints::{evaluate_boundary_quotients, evaluate_transition_quotients};

mod domain;
pub use domain::StarkDomain;

mod errors;
pub use errors::ProverError;

mod trace;
pub use trace::{TraceLde, TraceTable};

// PROVER
// ================================================================================================

/// Generates a STARK proof attesting that the specified `trace` is a valid
/// execution trace of the computation described by `air`.
///
/// # Errors
/// Returns an error if the protocol parameters are invalid for the
/// computation, or if the trace does not satisfy the computation's
/// assertions.
pub fn prove<A: Air>(
    air: &A,
    trace: TraceTable<A::BaseField>,
    options: ProofOptions,
) -> Result<StarkProof, ProverError> {
    assert_eq!(air.trace_width(), trace.width(), "inconsistent trace width");

    // reject invalid parameter combinations before any work is done
    let context = ComputationContext::new(
        air.trace_width(),
        trace.len(),
        air.num_constraints(),
        air.max_constraint_degree(),
        options,
    )?;

    // make sure the trace actually satisfies the computation's assertions;
    // in debug builds transition constraints are re-checked as well
    trace.validate(air)?;

    // static dispatch over the commitment hash function
    match context.options().hash_algorithm() {
        HashAlgorithm::Sha2_256 => generate_proof::<A, Sha2_256>(air, trace, context),
        HashAlgorithm::Blake2s_256 => generate_proof::<A, Blake2s_256>(air, trace, context),
    }
}

// PROOF GENERATION PROCEDURE
// ================================================================================================

fn generate_proof<A, H>(
    air: &A,
    trace: TraceTable<A::BaseField>,
    context: ComputationContext,
) -> Result<StarkProof, ProverError>
where
    A: Air,
    H: Hasher<Digest = ByteDigest<32>>,
{
    // create a channel; this simulates the interaction between the prover
    // and the verifier: the channel is used to commit to values and to draw
    // randomness that should come from the verifier
    let mut channel = ProverChannel::<A::BaseField, H>::new(&context);

    // 1 ----- build the computation domain --------------------------------------------------------
    let now = Instant::now();
    let domain = StarkDomain::new(&context);
    debug!(
        "Built domain of 2^{} elements in {} ms",
        log2(domain.lde_domain_size()),
        now.elapsed().as_millis()
    );

    // 2 ----- extend the execution trace ----------------------------------------------------------
    let now = Instant::now();
    let trace_lde = trace.extend(&domain);
    debug!(
        "Extended execution trace of {} registers from 2^{} to 2^{} steps ({}x blowup) in {} ms",
        trace_lde.width(),
        log2(trace.len()),
        log2(trace_lde.len()),
        domain.extension_factor(),
        now.elapsed().as_millis()
    );

    // 3 ----- commit to the extended execution trace ----------------------------------------------
    let now = Instant::now();
    let trace_tree = trace_lde.build_commitment::<H>();
    channel.commit_trace(*trace_tree.root());
    debug!(
        "Committed to extended execution trace by building a Merkle tree of depth {} in {} ms",
        trace_tree.depth(),
        now.elapsed().as_millis()
    );

    // 4 ----- evaluate constraint quotients -------------------------------------------------------
    let now = Instant::now();
    let boundary_groups = group_assertions(air, context.trace_length());
    let transition_quotients = evaluate_transition_quotients(air, &trace_lde, &domain);
    let boundary_quotients = evaluate_boundary_quotients(&boundary_groups, &trace_lde, &domain);
    debug!(
        "Evaluated {} transition and {} boundary constraints over domain of 2^{} elements in {} ms",
        transition_quotients.len(),
        boundary_quotients.len(),
        log2(domain.lde_domain_size()),
        now.elapsed().as_millis()
    );

    // 5 ----- combine everything into a single low-degree target ----------------------------------
    let now = Instant::now();
    let scheme = LinearCombination::new(&context, boundary_groups.len());
    let coefficients = channel.draw_composition_coefficients(scheme.num_coefficients())?;
    let combined_evaluations = combine_evaluations(
        &scheme,
        &coefficients,
        &trace_lde,
        &boundary_quotients,
        &transition_quotients,
        &domain,
    );
    debug!(
        "Combined all evaluations into a single vector with degree bound {} in {} ms",
        context.composition_degree(),
        now.elapsed().as_millis()
    );

    // 6 ----- compute FRI layers for the combined vector ------------------------------------------
    let now = Instant::now();
    let mut fri_prover = FriProver::new(context.options().to_fri_options());
    fri_prover.build_layers(&mut channel, combined_evaluations, domain.lde_values())?;
    debug!(
        "Computed {} FRI layers from composition polynomial evaluations in {} ms",
        fri_prover.num_layers(),
        now.elapsed().as_millis()
    );

    // 7 ----- determine query positions -----------------------------------------------------------
    let now = Instant::now();
    let query_positions = channel.draw_query_positions()?;
    debug!(
        "Determined {} query positions in {} ms",
        query_positions.len(),
        now.elapsed().as_millis()
    );

    // 8 ----- build the proof object --------------------------------------------------------------
    let now = Instant::now();

    // generate the low-degree proof; this also bundles in the openings of
    // the combined vector at the query positions
    let low_degree_proof = fri_prover.build_proof(&query_positions, context.composition_degree())?;

    // query the extended trace at the selected positions; every query needs
    // the trace row at the position itself and one execution step later
    let trace_positions = augment_trace_positions(
        &query_positions,
        context.extension_factor(),
        context.lde_domain_size(),
    );
    let trace_queries = trace_lde.query(&trace_tree, &trace_positions);

    let proof = channel.build_proof(trace_queries, low_degree_proof);
    debug!("Built proof object in {} ms", now.elapsed().as_millis());

    Ok(proof)
}
