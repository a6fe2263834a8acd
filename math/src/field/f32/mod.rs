// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of a 32-bit STARK-friendly prime field with modulus
//! $2^{32} - 3 \cdot 2^{25} + 1$.
//!
//! Elements are stored in canonical form using `u32` as the backing type and
//! all arithmetic is performed through `u64` intermediates, so no operation
//! can overflow. The modulus has 2-adicity of 25, which supports evaluation
//! domains of up to 2^25 points.

use super::{FieldElement, StarkField};
use core::{
    convert::TryFrom,
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    slice,
};
use rand::Rng;
use utils::{ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Field modulus = 2^32 - 3 * 2^25 + 1
const M: u32 = 4194304001;

/// Number of bytes needed to represent a field element.
const ELEMENT_BYTES: usize = core::mem::size_of::<u32>();

/// 2^25 root of unity.
const G: u32 = 1177770062;

// FIELD ELEMENT
// ================================================================================================

/// Represents a base element in the field.
///
/// The internal value is always in the canonical [0, M) range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseElement(u32);

impl BaseElement {
    /// Creates a new field element from the provided `value`; if the value
    /// is greater than or equal to the field modulus, modular reduction is
    /// silently performed.
    pub const fn new(value: u32) -> Self {
        BaseElement(value % M)
    }
}

impl FieldElement for BaseElement {
    type PositiveInteger = u64;

    const ELEMENT_BYTES: usize = ELEMENT_BYTES;
    const ZERO: Self = BaseElement(0);
    const ONE: Self = BaseElement(1);

    fn inv(self) -> Self {
        // M is prime, so a^(M - 2) is the multiplicative inverse of a; for
        // a = 0 exponentiation returns 0, matching the trait contract
        self.exp((M - 2) as u64)
    }

    fn rand() -> Self {
        BaseElement(rand::thread_rng().gen_range(0..M))
    }

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ELEMENT_BYTES] = bytes.try_into().ok()?;
        let value = u32::from_le_bytes(bytes);
        if value >= M {
            return None;
        }
        Some(BaseElement(value))
    }

    fn elements_as_bytes(elements: &[Self]) -> &[u8] {
        let p = elements.as_ptr();
        let len = elements.len() * Self::ELEMENT_BYTES;
        unsafe { slice::from_raw_parts(p as *const u8, len) }
    }
}

impl StarkField for BaseElement {
    /// sage: MODULUS = 2^32 - 3 * 2^25 + 1 \
    /// sage: GF(MODULUS).is_prime_field() \
    /// True
    const MODULUS: Self::PositiveInteger = M as u64;
    const MODULUS_BITS: u32 = 32;

    /// sage: GF(MODULUS).primitive_element() \
    /// 3
    const GENERATOR: Self = BaseElement(3);

    /// sage: is_odd((MODULUS - 1) / 2^25) \
    /// True
    const TWO_ADICITY: u32 = 25;

    /// sage: GF(MODULUS).primitive_element()^((MODULUS - 1) / 2^25) \
    /// 1177770062
    const TWO_ADIC_ROOT_OF_UNITY: Self = BaseElement(G);

    fn get_modulus_le_bytes() -> Vec<u8> {
        M.to_le_bytes().to_vec()
    }

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        self.0 as u64
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let z = self.0 as u64 + rhs.0 as u64;
        BaseElement(if z >= M as u64 { (z - M as u64) as u32 } else { z as u32 })
    }
}

impl AddAssign for BaseElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for BaseElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 < rhs.0 {
            BaseElement(M - rhs.0 + self.0)
        } else {
            BaseElement(self.0 - rhs.0)
        }
    }
}

impl SubAssign for BaseElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        BaseElement((self.0 as u64 * rhs.0 as u64 % M as u64) as u32)
    }
}

impl MulAssign for BaseElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for BaseElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl DivAssign for BaseElement {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for BaseElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            BaseElement(M - self.0)
        }
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into a field element; values greater than or
    /// equal to the field modulus are silently reduced.
    fn from(value: u64) -> Self {
        BaseElement((value % M as u64) as u32)
    }
}

impl From<u32> for BaseElement {
    /// Converts a 32-bit value into a field element; values greater than or
    /// equal to the field modulus are silently reduced.
    fn from(value: u32) -> Self {
        BaseElement::new(value)
    }
}

impl From<u16> for BaseElement {
    fn from(value: u16) -> Self {
        BaseElement(value as u32)
    }
}

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        BaseElement(value as u32)
    }
}

impl<'a> TryFrom<&'a [u8]> for BaseElement {
    type Error = DeserializationError;

    /// Converts a slice of exactly [ELEMENT_BYTES] bytes into a field
    /// element; the bytes are assumed to encode the element in the canonical
    /// representation in little-endian byte order.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ELEMENT_BYTES {
            return Err(DeserializationError::InvalidValue(format!(
                "expected {} bytes for a field element, but was {} bytes",
                ELEMENT_BYTES,
                bytes.len(),
            )));
        }
        let value = u32::from_le_bytes(bytes.try_into().expect("slice length already checked"));
        if value >= M {
            return Err(DeserializationError::InvalidValue(format!(
                "invalid field element: value {} is greater than or equal to the field modulus",
                value
            )));
        }
        Ok(BaseElement(value))
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for BaseElement {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.0.to_le_bytes());
    }
}

impl Deserializable for BaseElement {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let value = source.read_u32()?;
        if value >= M {
            return Err(DeserializationError::InvalidValue(format!(
                "invalid field element: value {} is greater than or equal to the field modulus",
                value
            )));
        }
        Ok(BaseElement(value))
    }
}
