// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::ComputationContext;
use crypto::{Hasher, RandomCoin, RandomCoinError};
use math::StarkField;

// CONSTANTS
// ================================================================================================

/// Counter offsets decorrelating the pseudo-random streams derived from the
/// trace commitment.
const COMPOSITION_COEFF_OFFSET: u64 = 0;
const QUERY_POSITION_OFFSET: u64 = u32::MAX as u64;

// PUBLIC COIN
// ================================================================================================

/// Defines the pseudo-random derivations shared by the prover and the
/// verifier.
///
/// Both sides implement this trait over their channel objects; since every
/// draw is a pure function of the trace commitment and the computation
/// context, identical commitments yield identical coefficients and query
/// positions on both sides of the protocol.
pub trait PublicCoin {
    /// Base field of the computation.
    type BaseField: StarkField;

    /// Hash function used for commitments and randomness derivation.
    type Hasher: Hasher;

    // ABSTRACT METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns the context of the computation.
    fn context(&self) -> &ComputationContext;

    /// Returns the seed for all public-coin derivations; this is the
    /// commitment to the extended execution trace.
    fn composition_seed(&self) -> <Self::Hasher as Hasher>::Digest;

    // DRAW METHODS
    // --------------------------------------------------------------------------------------------

    /// Draws the specified number of composition coefficients.
    fn draw_composition_coefficients(
        &self,
        num_coefficients: usize,
    ) -> Result<Vec<Self::BaseField>, RandomCoinError> {
        let mut coin = RandomCoin::<Self::BaseField, Self::Hasher>::with_offset(
            self.composition_seed(),
            COMPOSITION_COEFF_OFFSET,
        );
        coin.draw_many(num_coefficients)
    }

    /// Draws a set of unique query positions in the low-degree extension
    /// domain, skipping positions which coincide with the execution domain.
    fn draw_query_positions(&self) -> Result<Vec<usize>, RandomCoinError> {
        let context = self.context();
        let mut coin = RandomCoin::<Self::BaseField, Self::Hasher>::with_offset(
            self.composition_seed(),
            QUERY_POSITION_OFFSET,
        );
        coin.draw_integers(
            context.options().exe_query_count(),
            context.lde_domain_size(),
            context.extension_factor(),
        )
    }
}
