// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{
    folding::quartic,
    options::{FriOptions, FOLDING_FACTOR},
    proof::{FriComponent, LowDegreeProof, ProofLayer},
    utils::fold_positions,
    ProverError,
};
use core::marker::PhantomData;
use crypto::{ByteDigest, Hasher, MerkleTree, RandomCoin};
use math::StarkField;

mod channel;
pub use channel::{DefaultProverChannel, ProverChannel};

#[cfg(test)]
mod tests;

// FRI PROVER
// ================================================================================================

/// Implements the commit and query phases of the FRI protocol.
///
/// The prover first builds a sequence of folding layers via
/// [FriProver::build_layers], committing to each layer through the channel,
/// and then assembles a self-contained [LowDegreeProof] via
/// [FriProver::build_proof].
pub struct FriProver<B, C, H>
where
    B: StarkField,
    C: ProverChannel<B, Hasher = H>,
    H: Hasher<Digest = ByteDigest<32>>,
{
    options: FriOptions,
    layers: Vec<FriLayer<B, H>>,
    _channel: PhantomData<C>,
}

struct FriLayer<B: StarkField, H: Hasher> {
    tree: MerkleTree<H>,
    evaluations: Vec<[B; FOLDING_FACTOR]>,
}

impl<B, C, H> FriProver<B, C, H>
where
    B: StarkField,
    C: ProverChannel<B, Hasher = H>,
    H: Hasher<Digest = ByteDigest<32>>,
{
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a new prover instantiated with the provided options.
    pub fn new(options: FriOptions) -> Self {
        FriProver { options, layers: Vec::new(), _channel: PhantomData }
    }

    /// Returns the number of layers computed during the last execution of
    /// the [FriProver::build_layers] method.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    // COMMIT PHASE
    // --------------------------------------------------------------------------------------------

    /// Executes the commit phase of the FRI protocol.
    ///
    /// The degree-respecting projection is applied recursively: evaluations
    /// are transposed into a matrix of 4 columns so that 4 values can be
    /// de-committed with a single Merkle authentication path, the rows are
    /// hashed into a Merkle tree whose root is written into the channel, and
    /// the rows are then interpolated and collapsed into a 4x shorter
    /// codeword by evaluating the row polynomials at a pseudo-random point
    /// derived from the commitment. The process stops once the remaining
    /// codeword fits into the maximum remainder length; that final layer is
    /// also committed, and its commitment later authenticates the remainder.
    ///
    /// # Panics
    /// Panics if the number of evaluations does not match the domain size,
    /// or if a previous proof generation request has not been completed.
    pub fn build_layers(
        &mut self,
        channel: &mut C,
        mut evaluations: Vec<B>,
        domain: &[B],
    ) -> Result<(), ProverError> {
        assert_eq!(
            evaluations.len(),
            domain.len(),
            "number of evaluations must match the domain size"
        );
        assert!(self.layers.is_empty(), "a prior proof generation request has not been completed");

        for depth in 0..self.options.num_fri_layers(domain.len()) + 1 {
            let transposed_evaluations = quartic::transpose(&evaluations, 1);
            let hashed_evaluations = quartic::hash_values::<H, B>(&transposed_evaluations);
            let evaluation_tree = MerkleTree::<H>::new(hashed_evaluations);
            channel.commit_fri_layer(*evaluation_tree.root());

            // draw the folding randomness from the commitment to the current
            // layer and collapse the codeword by a factor of 4
            let alpha = RandomCoin::<B, H>::new(*evaluation_tree.root()).draw()?;
            evaluations = apply_drp(&transposed_evaluations, domain, depth, alpha);

            self.layers.push(FriLayer {
                tree: evaluation_tree,
                evaluations: transposed_evaluations,
            });
        }

        // make sure remainder length does not exceed the max allowed value
        let remainder_length = self.layers[self.layers.len() - 1].evaluations.len() * FOLDING_FACTOR;
        debug_assert!(
            remainder_length <= crate::MAX_REMAINDER_LENGTH,
            "last FRI layer cannot exceed {} elements, but was {} elements",
            crate::MAX_REMAINDER_LENGTH,
            remainder_length
        );

        Ok(())
    }

    // QUERY PHASE
    // --------------------------------------------------------------------------------------------

    /// Executes the query phase of the FRI protocol and returns a
    /// self-contained proof.
    ///
    /// `lc_positions` are the execution query positions at which the outer
    /// protocol reveals the combined evaluation vector; the batch proof for
    /// the corresponding depth-0 rows is bundled into the proof together
    /// with the layer commitment. Query positions for each folding layer are
    /// derived from the commitment to the folded column, so the proof does
    /// not depend on any external randomness beyond the committed roots.
    ///
    /// `max_degree_plus_1` is the claimed degree bound of the codeword; in
    /// debug builds the prover re-checks its own remainder against the
    /// residual bound before returning.
    ///
    /// # Panics
    /// Panics if layers have not been built yet.
    pub fn build_proof(
        &mut self,
        lc_positions: &[usize],
        max_degree_plus_1: usize,
    ) -> Result<LowDegreeProof, ProverError> {
        assert!(!self.layers.is_empty(), "FRI layers have not been built yet");

        let mut domain_size = self.layers[0].evaluations.len() * FOLDING_FACTOR;

        // record the commitment to the combined vector together with row
        // openings at the (folded) execution query positions
        let lc_root = *self.layers[0].tree.root();
        let lc_proof = query_layer(&self.layers[0], &fold_positions(lc_positions, domain_size));

        // for each folding step, record the commitment to the folded column
        // along with openings of the current layer at pseudo-random
        // positions and of the folded column at the same positions projected
        // onto its own leaf vector
        let mut components = Vec::with_capacity(self.layers.len() - 1);
        for i in 0..self.layers.len() - 1 {
            let column_length = domain_size / FOLDING_FACTOR;
            let column_root = *self.layers[i + 1].tree.root();

            let positions = RandomCoin::<B, H>::new(column_root).draw_integers(
                self.options.num_queries(),
                column_length,
                0,
            )?;
            let augmented_positions = fold_positions(&positions, column_length);

            components.push(FriComponent {
                column_root,
                column_proof: query_layer(&self.layers[i + 1], &augmented_positions),
                poly_proof: query_layer(&self.layers[i], &positions),
            });

            domain_size = column_length;
        }

        // use the values of the last layer directly as the proof remainder,
        // flattened back into original evaluation order
        let last_values = &self.layers[self.layers.len() - 1].evaluations;
        let n = last_values.len();
        let mut remainder = B::zeroed_vector(n * FOLDING_FACTOR);
        for i in 0..n {
            remainder[i] = last_values[i][0];
            remainder[i + n] = last_values[i][1];
            remainder[i + n * 2] = last_values[i][2];
            remainder[i + n * 3] = last_values[i][3];
        }

        // reduce the claimed degree bound to the remainder layer
        let mut remainder_degree_plus_1 = max_degree_plus_1;
        for _ in 0..self.layers.len() - 1 {
            remainder_degree_plus_1 /= FOLDING_FACTOR;
        }

        // re-check the remainder the same way the verifier will; a failure
        // here indicates an arithmetic bug, not malicious input
        #[cfg(debug_assertions)]
        crate::verifier::verify_remainder(
            remainder.clone(),
            remainder_degree_plus_1,
            B::get_root_of_unity(utils::log2(remainder.len())),
            self.options.blowup_factor(),
        )
        .map_err(ProverError::RemainderSelfCheckFailed)?;
        #[cfg(not(debug_assertions))]
        let _ = remainder_degree_plus_1;

        // clear layers so that another proof can be generated
        let remainder = B::elements_as_bytes(&remainder).to_vec();
        self.reset();

        Ok(LowDegreeProof { lc_root, lc_proof, components, remainder })
    }

    /// Clears the internally stored layers.
    pub fn reset(&mut self) {
        self.layers.clear();
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Applies degree-respecting projection to the `evaluations`, reducing the
/// implied degree by [FOLDING_FACTOR]. This is equivalent to the following:
/// * Let `evaluations` contain the evaluations of polynomial f(x) of degree k.
/// * Group coefficients of f so that f(x) = a(x^4) + x * b(x^4) + x^2 *
///   c(x^4) + x^3 * d(x^4).
/// * Compute a random linear combination of a, b, c, d as f'(x) = a + alpha *
///   b + alpha^2 * c + alpha^3 * d, where alpha is the pseudo-random folding
///   coefficient.
/// * Evaluate f'(x) on a domain which consists of x^4 from the original
///   domain (and is thus 1/4 the size).
fn apply_drp<B: StarkField>(
    evaluations: &[[B; FOLDING_FACTOR]],
    domain: &[B],
    depth: usize,
    alpha: B,
) -> Vec<B> {
    let domain_stride = usize::pow(FOLDING_FACTOR, depth as u32);
    let xs = quartic::transpose(domain, domain_stride);

    let polys = quartic::interpolate_batch(&xs, evaluations);

    quartic::evaluate_batch(&polys, alpha)
}

/// Builds a wire-format query layer: a batch Merkle proof over the rows of
/// the specified layer at the specified positions, with the proof values
/// replaced by the un-hashed rows.
fn query_layer<B: StarkField, H: Hasher<Digest = ByteDigest<32>>>(
    layer: &FriLayer<B, H>,
    positions: &[usize],
) -> ProofLayer {
    let proof = layer.tree.prove_batch(positions);

    let mut queried_values: Vec<[B; FOLDING_FACTOR]> = Vec::with_capacity(positions.len());
    for &position in positions.iter() {
        queried_values.push(layer.evaluations[position]);
    }

    ProofLayer::new(queried_values, proof)
}
