// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{errors::RandomCoinError, Hasher};
use core::{convert::TryInto, marker::PhantomData};
use math::StarkField;

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Number of draws after which element or integer generation gives up.
const MAX_DRAWS: usize = 1000;

// RANDOM COIN
// ================================================================================================

/// Pseudo-random value generator implementing the Fiat-Shamir transform.
///
/// The internal state of the coin consists of a `seed` and a `counter`; the
/// i-th pseudo-random value is hash(`seed` || `i`). Since the seed is always
/// a commitment produced earlier in the protocol, the prover and the verifier
/// derive identical randomness by instantiating coins with identical
/// commitments.
///
/// A coin can be used to draw field elements (rejection-sampled from the hash
/// output) and to draw sets of distinct query positions from a power-of-two
/// domain, optionally skipping positions on a fixed stride.
pub struct RandomCoin<B, H>
where
    B: StarkField,
    H: Hasher,
{
    seed: H::Digest,
    counter: u64,
    _base_field: PhantomData<B>,
}

impl<B, H> RandomCoin<B, H>
where
    B: StarkField,
    H: Hasher,
{
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a new random coin instantiated with the provided seed.
    pub fn new(seed: H::Digest) -> Self {
        RandomCoin { seed, counter: 0, _base_field: PhantomData }
    }

    /// Returns a new random coin instantiated with the provided seed and
    /// counter offset; coins with different offsets produce independent
    /// streams from the same seed.
    pub fn with_offset(seed: H::Digest, offset: u64) -> Self {
        RandomCoin { seed, counter: offset, _base_field: PhantomData }
    }

    // DRAW METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns the next pseudo-random field element.
    ///
    /// # Errors
    /// Returns an error if a valid field element could not be generated
    /// within the allowed number of draws.
    pub fn draw(&mut self) -> Result<B, RandomCoinError> {
        for _ in 0..MAX_DRAWS {
            // get the next pseudo-random value and take ELEMENT_BYTES from it
            let value = self.next();
            let bytes = &value.as_ref()[..B::ELEMENT_BYTES];

            // check if the bytes can be converted into a valid field element;
            // if they can, return; otherwise try again
            if let Some(element) = B::from_random_bytes(bytes) {
                return Ok(element);
            }
        }

        Err(RandomCoinError::FailedToDrawFieldElement(MAX_DRAWS))
    }

    /// Returns a vector of `num_values` pseudo-random field elements.
    ///
    /// # Errors
    /// Returns an error if any of the elements could not be generated within
    /// the allowed number of draws.
    pub fn draw_many(&mut self, num_values: usize) -> Result<Vec<B>, RandomCoinError> {
        (0..num_values).map(|_| self.draw()).collect()
    }

    /// Returns a vector of `num_values` distinct integers selected from the
    /// range [0, `domain_size`).
    ///
    /// If `exclude_stride` is greater than zero, integers divisible by it are
    /// never returned; these are the positions at which the low-degree
    /// extension domain coincides with the execution domain.
    ///
    /// # Errors
    /// Returns an error if the specified number of distinct integers could
    /// not be generated within the allowed number of draws.
    ///
    /// # Panics
    /// Panics if:
    /// * `domain_size` is not a power of two.
    /// * `num_values` is greater than or equal to `domain_size`.
    pub fn draw_integers(
        &mut self,
        num_values: usize,
        domain_size: usize,
        exclude_stride: usize,
    ) -> Result<Vec<usize>, RandomCoinError> {
        assert!(domain_size.is_power_of_two(), "domain size must be a power of two");
        assert!(num_values < domain_size, "number of values must be smaller than domain size");

        // reduce every pseudo-random value modulo the domain size by keeping
        // only the bits which fit into the domain
        let v_mask = (domain_size - 1) as u64;

        // draw values from the PRNG until we accumulate enough distinct ones
        let mut values = Vec::new();
        for _ in 0..MAX_DRAWS {
            // take the first 8 bytes of the next pseudo-random value
            let bytes: [u8; 8] = self.next().as_ref()[..8].try_into().expect("digest too short");
            let value = (u64::from_le_bytes(bytes) & v_mask) as usize;

            if exclude_stride > 0 && value % exclude_stride == 0 {
                continue;
            }
            if values.contains(&value) {
                continue;
            }
            values.push(value);
            if values.len() == num_values {
                break;
            }
        }

        if values.len() < num_values {
            return Err(RandomCoinError::FailedToDrawIntegers(num_values, values.len(), MAX_DRAWS));
        }

        Ok(values)
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    /// Updates the coin state by incrementing the counter and returns
    /// hash(seed || counter).
    fn next(&mut self) -> H::Digest {
        self.counter += 1;
        H::merge_with_int(self.seed, self.counter)
    }
}
