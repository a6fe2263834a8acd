// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

// RANDOM COIN ERROR
// ================================================================================================

/// Defines errors which can occur when drawing values from a random coin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomCoinError {
    /// A valid field element could not be drawn from the coin.
    #[error("failed to generate a valid field element after {0} tries")]
    FailedToDrawFieldElement(usize),
    /// The required number of distinct integers could not be drawn.
    #[error("needed to draw {0} distinct integers, but drew only {1} after {2} tries")]
    FailedToDrawIntegers(usize, usize, usize),
}
