// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    convert::TryFrom,
    fmt::{Debug, Display},
    ops::{
        Add, AddAssign, BitAnd, Div, DivAssign, Mul, MulAssign, Neg, Shl, Shr, ShrAssign, Sub,
        SubAssign,
    },
};
use utils::{Deserializable, DeserializationError, Serializable};

// FIELD ELEMENT
// ================================================================================================

/// Defines an element in a finite field.
///
/// The trait binds together arithmetic operators and byte-level encoding of
/// field elements. Elements are always encoded as fixed-width little-endian
/// byte strings of [Self::ELEMENT_BYTES] bytes.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + for<'a> TryFrom<&'a [u8]>
    + Serializable
    + Deserializable
{
    /// An unsigned integer type large enough to hold any exponent used with
    /// elements of this field.
    type PositiveInteger: Debug
        + Copy
        + PartialEq
        + PartialOrd
        + ShrAssign
        + Shl<u32, Output = Self::PositiveInteger>
        + Shr<u32, Output = Self::PositiveInteger>
        + BitAnd<Output = Self::PositiveInteger>
        + From<u32>
        + From<u64>;

    /// Number of bytes needed to encode an element.
    const ELEMENT_BYTES: usize;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this field element added to itself.
    fn double(self) -> Self {
        self + self
    }

    /// Returns this field element raised to power 2.
    fn square(self) -> Self {
        self * self
    }

    /// Exponentiates this field element by `power` parameter.
    fn exp(self, power: Self::PositiveInteger) -> Self {
        let mut r = Self::ONE;
        let mut b = self;
        let mut p = power;

        let int_zero = Self::PositiveInteger::from(0u32);
        let int_one = Self::PositiveInteger::from(1u32);

        if p == int_zero {
            return Self::ONE;
        } else if b == Self::ZERO {
            return Self::ZERO;
        }

        while p > int_zero {
            if p & int_one == int_one {
                r *= b;
            }
            p >>= int_one;
            b = b.square();
        }

        r
    }

    /// Returns a multiplicative inverse of this field element. If this
    /// element is ZERO, ZERO is returned.
    fn inv(self) -> Self;

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns a random element drawn uniformly from the entire field.
    fn rand() -> Self;

    /// Returns a field element if the set of bytes forms a valid canonical
    /// element, otherwise returns None. This is intended for rejection
    /// sampling of field elements from a hash function output.
    fn from_random_bytes(bytes: &[u8]) -> Option<Self>;

    // SERIALIZATION / DESERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Converts a list of elements into a list of bytes by re-interpreting
    /// the underlying memory; no allocation is performed.
    fn elements_as_bytes(elements: &[Self]) -> &[u8];

    // INITIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns a vector of length `n` initialized with all ZERO elements.
    fn zeroed_vector(n: usize) -> Vec<Self> {
        vec![Self::ZERO; n]
    }
}

// STARK FIELD
// ================================================================================================

/// Defines a prime field suitable for STARK proofs.
///
/// The modulus must be of the form k * 2^n + 1 for a sufficiently large n;
/// this guarantees the existence of the power-of-two multiplicative subgroups
/// the protocol evaluates polynomials over.
pub trait StarkField: FieldElement {
    /// Prime modulus of the field.
    const MODULUS: Self::PositiveInteger;

    /// The number of bits needed to represent [Self::MODULUS].
    const MODULUS_BITS: u32;

    /// A multiplicative generator of the field.
    const GENERATOR: Self;

    /// Let MODULUS = k * 2^n + 1 with k odd; then TWO_ADICITY is n.
    const TWO_ADICITY: u32;

    /// A 2^[Self::TWO_ADICITY] root of unity, computed as GENERATOR^k.
    const TWO_ADIC_ROOT_OF_UNITY: Self;

    /// Returns a root of unity of order 2^n.
    ///
    /// # Panics
    /// Panics if n is zero or exceeds [Self::TWO_ADICITY].
    fn get_root_of_unity(n: u32) -> Self {
        assert!(n != 0, "cannot get root of unity for n = 0");
        assert!(n <= Self::TWO_ADICITY, "order cannot exceed 2^{}", Self::TWO_ADICITY);
        let power = Self::PositiveInteger::from(1u32) << (Self::TWO_ADICITY - n);
        Self::TWO_ADIC_ROOT_OF_UNITY.exp(power)
    }

    /// Returns byte representation of the field modulus in little-endian
    /// byte order.
    fn get_modulus_le_bytes() -> Vec<u8>;

    /// Returns the canonical integer representation of this field element.
    fn as_int(&self) -> Self::PositiveInteger;
}
