// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    folding::quartic,
    options::FOLDING_FACTOR,
    utils::fold_positions,
    VerifierError,
};
use crypto::{ByteDigest, Hasher, MerkleTree, RandomCoin};
use math::{get_power_series, polynom, StarkField};
use utils::log2;

mod channel;
pub use channel::VerifierChannel;

// VERIFICATION PROCEDURE
// ================================================================================================

/// Returns Ok(()) if the proof held by the `channel` attests that the
/// committed evaluation vector represents a polynomial of degree less than
/// `max_degree_plus_1` over its evaluation domain.
///
/// `evaluations` are the expected values of the combined vector at the
/// execution query `positions`; they are computed by the outer protocol from
/// the constraint system and cross-checked here against the committed rows,
/// which ties the low-degree claim to the committed polynomials.
///
/// Verification runs in three stages:
/// 1. the revealed combination rows are checked against `evaluations` and
///    against the combination commitment;
/// 2. for every folding layer, query positions are re-derived from the
///    commitment to the folded column, revealed rows are checked against
///    both layer commitments, and each fold is re-computed via quartic
///    interpolation at the pseudo-random folding point;
/// 3. the remainder is re-committed, compared against the last layer
///    commitment, and checked for low degree directly.
pub fn verify<B, H>(
    channel: &VerifierChannel<B, H>,
    evaluations: &[B],
    positions: &[usize],
    max_degree_plus_1: usize,
) -> Result<(), VerifierError>
where
    B: StarkField,
    H: Hasher<Digest = ByteDigest<32>>,
{
    assert_eq!(
        evaluations.len(),
        positions.len(),
        "number of positions must match the number of evaluations"
    );
    let domain_size = channel.domain_size();

    // 1 ----- check the combined evaluation vector against its commitment ------------------------

    let lc_positions = fold_positions(positions, domain_size);
    let lc_row_length = domain_size / FOLDING_FACTOR;
    for (&position, &evaluation) in positions.iter().zip(evaluations.iter()) {
        let row_idx = lc_positions
            .iter()
            .position(|&p| p == position % lc_row_length)
            .expect("position is present by construction");
        let value = channel.lc_rows()[row_idx][position / lc_row_length];
        if value != evaluation {
            return Err(VerifierError::LinearCombinationMismatch(position));
        }
    }
    if !MerkleTree::verify_batch(&channel.lc_root(), &lc_positions, channel.lc_proof()) {
        return Err(VerifierError::LinearCombinationCommitmentMismatch);
    }

    // 2 ----- verify the recursive components of the proof ---------------------------------------

    let mut p_root = channel.lc_root();
    let mut domain_generator = B::get_root_of_unity(log2(domain_size));
    let mut column_length = domain_size / FOLDING_FACTOR;
    let mut max_degree_plus_1 = max_degree_plus_1;

    for (depth, layer) in channel.layers().iter().enumerate() {
        // re-derive query positions from the commitment to the folded column
        let positions = RandomCoin::<B, H>::new(layer.column_root).draw_integers(
            channel.num_queries(),
            column_length,
            0,
        )?;
        let augmented_positions = fold_positions(&positions, column_length);

        // check that the folded column rows match their commitment
        if layer.column_rows.len() != augmented_positions.len()
            || !MerkleTree::verify_batch(
                &layer.column_root,
                &augmented_positions,
                &layer.column_proof,
            )
        {
            return Err(VerifierError::LayerCommitmentMismatch(depth));
        }

        // look up the folded value for each queried position
        let column_row_length = column_length / FOLDING_FACTOR;
        let column_values = positions
            .iter()
            .map(|&position| {
                let row_idx = augmented_positions
                    .iter()
                    .position(|&p| p == position % column_row_length)
                    .expect("position is present by construction");
                layer.column_rows[row_idx][position / column_row_length]
            })
            .collect::<Vec<_>>();

        // check that the current-layer rows match the previous commitment
        if layer.poly_rows.len() != positions.len()
            || !MerkleTree::verify_batch(&p_root, &positions, &layer.poly_proof)
        {
            return Err(VerifierError::LayerCommitmentMismatch(depth));
        }

        // compute the X coordinates of every queried row on the current
        // domain: row p holds evaluations at x, zeta * x, zeta^2 * x,
        // zeta^3 * x, where x = g^p and zeta is a primitive 4th root of unity
        let folding_roots: [B; FOLDING_FACTOR] = [
            B::ONE,
            domain_generator.exp((column_length as u64).into()),
            domain_generator.exp((2 * column_length as u64).into()),
            domain_generator.exp((3 * column_length as u64).into()),
        ];
        let xs = positions
            .iter()
            .map(|&position| {
                let xe = domain_generator.exp((position as u64).into());
                [
                    xe * folding_roots[0],
                    xe * folding_roots[1],
                    xe * folding_roots[2],
                    xe * folding_roots[3],
                ]
            })
            .collect::<Vec<_>>();

        // interpolate the rows and check that evaluating each row polynomial
        // at the folding point reproduces the committed folded value
        let alpha = RandomCoin::<B, H>::new(p_root).draw()?;
        let row_polys = quartic::interpolate_batch(&xs, &layer.poly_rows);
        let folded_values = quartic::evaluate_batch(&row_polys, alpha);
        if folded_values != column_values {
            return Err(VerifierError::LayerValuesNotConsistent(depth));
        }

        // update variables for the next layer
        p_root = layer.column_root;
        domain_generator = domain_generator.exp((FOLDING_FACTOR as u64).into());
        max_degree_plus_1 /= FOLDING_FACTOR;
        column_length /= FOLDING_FACTOR;
    }

    // 3 ----- verify the remainder of the proof --------------------------------------------------

    if max_degree_plus_1 > channel.remainder().len() {
        return Err(VerifierError::RemainderDegreeNotValid);
    }

    // re-commit to the remainder and make sure the root matches the last
    // committed layer
    let remainder = channel.remainder().to_vec();
    let remainder_values = quartic::transpose(&remainder, 1);
    let hashed_values = quartic::hash_values::<H, B>(&remainder_values);
    let remainder_tree = MerkleTree::<H>::new(hashed_values);
    if *remainder_tree.root() != p_root {
        return Err(VerifierError::RemainderCommitmentMismatch);
    }

    verify_remainder(remainder, max_degree_plus_1, domain_generator, channel.blowup_factor())
}

// REMAINDER DEGREE VERIFICATION
// ================================================================================================

/// Returns Ok(()) if values in the `remainder` slice represent evaluations
/// of a polynomial with degree smaller than `max_degree_plus_1` against the
/// domain generated by `domain_generator`.
///
/// Positions divisible by the blowup factor coincide with the execution
/// domain, where quotient evaluations are undefined; they are skipped both
/// when selecting interpolation points and when checking the rest.
pub(crate) fn verify_remainder<B: StarkField>(
    remainder: Vec<B>,
    max_degree_plus_1: usize,
    domain_generator: B,
    blowup_factor: usize,
) -> Result<(), VerifierError> {
    if max_degree_plus_1 > remainder.len() {
        return Err(VerifierError::RemainderDegreeNotValid);
    }

    // exclude positions which fall on the execution domain
    let mut positions = Vec::new();
    for i in 0..remainder.len() {
        if blowup_factor == 0 || i % blowup_factor != 0 {
            positions.push(i);
        }
    }

    // pick a subset of points from the remainder and interpolate them into
    // a polynomial
    let domain = get_power_series(domain_generator, remainder.len());
    let mut xs = Vec::with_capacity(max_degree_plus_1);
    let mut ys = Vec::with_capacity(max_degree_plus_1);
    for &p in positions.iter().take(max_degree_plus_1) {
        xs.push(domain[p]);
        ys.push(remainder[p]);
    }
    let poly = polynom::interpolate(&xs, &ys, false);

    // check that the polynomial evaluates correctly at all other positions
    for &p in positions.iter().skip(max_degree_plus_1) {
        if polynom::eval(&poly, domain[p]) != remainder[p] {
            return Err(VerifierError::RemainderDegreeMismatch(max_degree_plus_1 - 1));
        }
    }
    Ok(())
}
