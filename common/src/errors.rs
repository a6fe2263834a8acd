// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

// CONFIGURATION ERROR
// ================================================================================================

/// Defines errors which can occur when validating protocol parameters.
///
/// All parameters are checked before any proving or verification work is
/// performed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The extension factor is not a power of two.
    #[error("extension factor must be a power of two, but was {0}")]
    ExtensionFactorNotPowerOfTwo(usize),
    /// The extension factor is outside of the supported range.
    #[error("extension factor must be in [2, 32] range, but was {0}")]
    ExtensionFactorOutOfRange(usize),
    /// The extension factor is too small for the constraint system.
    #[error("extension factor must be at least {0} for constraints of degree {1}, but was {2}")]
    ExtensionFactorTooSmall(usize, usize, usize),
    /// The number of execution spot checks is outside of the supported range.
    #[error("number of execution spot checks must be in [1, 128] range, but was {0}")]
    ExeQueryCountOutOfRange(usize),
    /// The number of FRI spot checks is outside of the supported range.
    #[error("number of FRI spot checks must be in [1, 64] range, but was {0}")]
    FriQueryCountOutOfRange(usize),
}
