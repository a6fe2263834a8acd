// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// CONSTANTS
// ================================================================================================

/// Factor by which codeword length (and claimed degree) shrinks at each
/// folding step.
pub const FOLDING_FACTOR: usize = 4;

/// Maximum number of elements the recursion may leave unfolded; once a layer
/// holds this many elements or fewer, it becomes the proof remainder and is
/// checked for low degree directly.
pub const MAX_REMAINDER_LENGTH: usize = 256;

// FRI OPTIONS
// ================================================================================================

/// FRI protocol parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriOptions {
    blowup_factor: usize,
    num_queries: usize,
}

impl FriOptions {
    /// Returns a new options struct for the specified Reed-Solomon blowup
    /// factor and number of queries per layer.
    ///
    /// # Panics
    /// Panics if:
    /// * `blowup_factor` is not a power of two.
    /// * `num_queries` is zero.
    pub fn new(blowup_factor: usize, num_queries: usize) -> Self {
        assert!(blowup_factor.is_power_of_two(), "blowup factor must be a power of 2");
        assert!(num_queries > 0, "number of queries must be greater than 0");
        FriOptions { blowup_factor, num_queries }
    }

    /// Returns the Reed-Solomon blowup factor of the evaluation domain.
    ///
    /// Positions divisible by this factor coincide with the execution domain
    /// and carry no meaningful quotient values; the remainder check skips
    /// them.
    pub fn blowup_factor(&self) -> usize {
        self.blowup_factor
    }

    /// Returns the number of positions spot-checked at each folding layer.
    pub fn num_queries(&self) -> usize {
        self.num_queries
    }

    /// Returns the number of folding layers (proof components) for an
    /// evaluation domain of the specified size.
    ///
    /// The count follows from the termination rule: folding continues while
    /// a layer holds more than [MAX_REMAINDER_LENGTH] elements.
    pub fn num_fri_layers(&self, mut domain_size: usize) -> usize {
        let mut result = 0;
        while domain_size > MAX_REMAINDER_LENGTH {
            domain_size /= FOLDING_FACTOR;
            result += 1;
        }
        result
    }

    /// Returns the length of the proof remainder for an evaluation domain of
    /// the specified size.
    pub fn fri_remainder_length(&self, mut domain_size: usize) -> usize {
        while domain_size > MAX_REMAINDER_LENGTH {
            domain_size /= FOLDING_FACTOR;
        }
        domain_size
    }
}
