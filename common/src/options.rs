// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ConfigurationError;
use fri::FriOptions;
use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};

// CONSTANTS
// ================================================================================================

const MIN_EXTENSION_FACTOR: usize = 2;
const MAX_EXTENSION_FACTOR: usize = 32;
const MAX_EXE_QUERY_COUNT: usize = 128;
const MAX_FRI_QUERY_COUNT: usize = 64;

const DEFAULT_EXE_QUERY_COUNT: usize = 80;
const DEFAULT_FRI_QUERY_COUNT: usize = 40;

// HASH ALGORITHM
// ================================================================================================

/// Defines the hash function used for all commitments and all Fiat-Shamir
/// derivations of a proof.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HashAlgorithm {
    /// SHA-256 hash function.
    Sha2_256 = 1,
    /// BLAKE2s hash function with 256-bit output.
    Blake2s_256 = 2,
}

impl Serializable for HashAlgorithm {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8(*self as u8);
    }
}

impl Deserializable for HashAlgorithm {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        match source.read_u8()? {
            1 => Ok(HashAlgorithm::Sha2_256),
            2 => Ok(HashAlgorithm::Blake2s_256),
            value => Err(DeserializationError::InvalidValue(format!(
                "value {} cannot be deserialized as a hash algorithm",
                value
            ))),
        }
    }
}

// PROOF OPTIONS
// ================================================================================================

/// STARK protocol security parameters.
///
/// These parameters have a direct impact on proof soundness and proof size:
/// * The extension factor is the Reed-Solomon blowup of the evaluation
///   domain; each execution spot check contributes roughly
///   log2(extension factor) bits of security.
/// * The execution spot check count is the number of positions at which the
///   committed trace and the combined constraint evaluations are revealed.
/// * The FRI spot check count is the number of positions checked at each
///   folding layer of the low-degree proof.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProofOptions {
    hash_algorithm: HashAlgorithm,
    extension_factor: u8,
    exe_query_count: u8,
    fri_query_count: u8,
}

impl ProofOptions {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new options struct constructed from the specified
    /// parameters, or a [ConfigurationError] if any parameter is outside of
    /// its supported range. Validation happens here so that no proving or
    /// verification work starts with invalid parameters.
    pub fn new(
        hash_algorithm: HashAlgorithm,
        extension_factor: usize,
        exe_query_count: usize,
        fri_query_count: usize,
    ) -> Result<Self, ConfigurationError> {
        if !extension_factor.is_power_of_two() {
            return Err(ConfigurationError::ExtensionFactorNotPowerOfTwo(extension_factor));
        }
        if !(MIN_EXTENSION_FACTOR..=MAX_EXTENSION_FACTOR).contains(&extension_factor) {
            return Err(ConfigurationError::ExtensionFactorOutOfRange(extension_factor));
        }
        if exe_query_count == 0 || exe_query_count > MAX_EXE_QUERY_COUNT {
            return Err(ConfigurationError::ExeQueryCountOutOfRange(exe_query_count));
        }
        if fri_query_count == 0 || fri_query_count > MAX_FRI_QUERY_COUNT {
            return Err(ConfigurationError::FriQueryCountOutOfRange(fri_query_count));
        }

        Ok(ProofOptions {
            hash_algorithm,
            extension_factor: extension_factor as u8,
            exe_query_count: exe_query_count as u8,
            fri_query_count: fri_query_count as u8,
        })
    }

    /// Returns options with default security parameters for a constraint
    /// system of the specified maximum degree: SHA-256 commitments, the
    /// smallest valid extension factor, 80 execution spot checks and 40 FRI
    /// spot checks.
    pub fn default_for_degree(max_constraint_degree: usize) -> Self {
        let extension_factor = default_extension_factor(max_constraint_degree);
        ProofOptions::new(
            HashAlgorithm::Sha2_256,
            extension_factor,
            DEFAULT_EXE_QUERY_COUNT,
            DEFAULT_FRI_QUERY_COUNT,
        )
        .expect("default options are always valid")
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the hash function used for commitments and randomness
    /// derivation.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// Returns the factor by which the execution trace domain is extended
    /// during low-degree extension.
    pub fn extension_factor(&self) -> usize {
        self.extension_factor as usize
    }

    /// Returns the number of positions at which committed evaluations are
    /// spot-checked.
    pub fn exe_query_count(&self) -> usize {
        self.exe_query_count as usize
    }

    /// Returns the number of positions spot-checked at each FRI layer.
    pub fn fri_query_count(&self) -> usize {
        self.fri_query_count as usize
    }

    /// Returns options for the FRI protocol instantiated with parameters
    /// from this struct.
    pub fn to_fri_options(&self) -> FriOptions {
        FriOptions::new(self.extension_factor(), self.fri_query_count())
    }
}

impl Serializable for ProofOptions {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        self.hash_algorithm.write_into(target);
        target.write_u8(self.extension_factor);
        target.write_u8(self.exe_query_count);
        target.write_u8(self.fri_query_count);
    }
}

impl Deserializable for ProofOptions {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let hash_algorithm = HashAlgorithm::read_from(source)?;
        let extension_factor = source.read_u8()? as usize;
        let exe_query_count = source.read_u8()? as usize;
        let fri_query_count = source.read_u8()? as usize;
        ProofOptions::new(hash_algorithm, extension_factor, exe_query_count, fri_query_count)
            .map_err(|err| DeserializationError::InvalidValue(err.to_string()))
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns the smallest valid extension factor for a constraint system of
/// the specified maximum degree.
fn default_extension_factor(max_constraint_degree: usize) -> usize {
    (2 * max_constraint_degree).next_power_of_two().max(MIN_EXTENSION_FACTOR)
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, ProofOptions};
    use crate::errors::ConfigurationError;
    use utils::{Deserializable, Serializable, SliceReader};

    #[test]
    fn validation() {
        assert!(ProofOptions::new(HashAlgorithm::Sha2_256, 8, 80, 40).is_ok());

        assert_eq!(
            Err(ConfigurationError::ExtensionFactorNotPowerOfTwo(6)),
            ProofOptions::new(HashAlgorithm::Sha2_256, 6, 80, 40)
        );
        assert_eq!(
            Err(ConfigurationError::ExtensionFactorOutOfRange(1)),
            ProofOptions::new(HashAlgorithm::Sha2_256, 1, 80, 40)
        );
        assert_eq!(
            Err(ConfigurationError::ExeQueryCountOutOfRange(0)),
            ProofOptions::new(HashAlgorithm::Sha2_256, 8, 0, 40)
        );
        assert_eq!(
            Err(ConfigurationError::FriQueryCountOutOfRange(65)),
            ProofOptions::new(HashAlgorithm::Sha2_256, 8, 80, 65)
        );
    }

    #[test]
    fn defaults() {
        let options = ProofOptions::default_for_degree(1);
        assert_eq!(HashAlgorithm::Sha2_256, options.hash_algorithm());
        assert_eq!(2, options.extension_factor());
        assert_eq!(80, options.exe_query_count());
        assert_eq!(40, options.fri_query_count());

        // degree 3 needs a blowup of at least 6, rounded up to 8
        assert_eq!(8, ProofOptions::default_for_degree(3).extension_factor());
    }

    #[test]
    fn serialization_roundtrip() {
        let options = ProofOptions::new(HashAlgorithm::Blake2s_256, 16, 48, 24).unwrap();
        let bytes = options.to_bytes();
        let parsed = ProofOptions::read_from(&mut SliceReader::new(&bytes)).unwrap();
        assert_eq!(options, parsed);
    }
}
