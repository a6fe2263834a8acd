// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::FieldElement;
use utils::{uninit_vector, DeserializationError};

// MATH FUNCTIONS
// ================================================================================================

/// Returns a vector containing successive powers of a given base: for base
/// `b`, the result is [1, b, b^2, ..., b^(n-1)].
pub fn get_power_series<E: FieldElement>(b: E, n: usize) -> Vec<E> {
    let mut result = unsafe { uninit_vector(n) };
    fill_power_series(&mut result, b, E::ONE);
    result
}

/// Returns a vector containing successive powers of a given base offset by
/// the specified value: for base `b` and offset `s`, the result is
/// [s, s * b, s * b^2, ..., s * b^(n-1)].
pub fn get_power_series_with_offset<E: FieldElement>(b: E, s: E, n: usize) -> Vec<E> {
    let mut result = unsafe { uninit_vector(n) };
    fill_power_series(&mut result, b, s);
    result
}

/// Computes multiplicative inverses of a sequence of elements using the batch
/// inversion method. Any ZEROs in the provided sequence are mapped to ZERO.
///
/// This is significantly faster than inverting elements one-by-one because it
/// transforms `n` inversions into `3n` multiplications and one inversion.
pub fn batch_inversion<E: FieldElement>(values: &[E]) -> Vec<E> {
    let mut result: Vec<E> = unsafe { uninit_vector(values.len()) };

    let mut last = E::ONE;
    for (result, &value) in result.iter_mut().zip(values.iter()) {
        *result = last;
        if value != E::ZERO {
            last *= value;
        }
    }

    last = last.inv();

    for i in (0..values.len()).rev() {
        if values[i] == E::ZERO {
            result[i] = E::ZERO;
        } else {
            result[i] *= last;
            last *= values[i];
        }
    }

    result
}

/// Returns a copy of the polynomial with all leading ZERO coefficients
/// removed.
pub fn remove_leading_zeros<E: FieldElement>(values: &[E]) -> Vec<E> {
    for i in (0..values.len()).rev() {
        if values[i] != E::ZERO {
            return values[..=i].to_vec();
        }
    }
    vec![]
}

// SERIALIZATION HELPERS
// ================================================================================================

/// Reads a vector of field elements from the provided byte slice; the slice
/// is expected to contain a whole number of canonical element encodings.
pub fn read_elements_into_vec<E: FieldElement>(
    bytes: &[u8],
) -> Result<Vec<E>, DeserializationError> {
    if bytes.len() % E::ELEMENT_BYTES != 0 {
        return Err(DeserializationError::InvalidValue(format!(
            "number of bytes ({}) does not divide into whole number of field elements",
            bytes.len(),
        )));
    }

    let mut result = Vec::with_capacity(bytes.len() / E::ELEMENT_BYTES);
    for chunk in bytes.chunks(E::ELEMENT_BYTES) {
        let element = E::try_from(chunk).map_err(|_| {
            DeserializationError::InvalidValue("invalid field element encoding".to_string())
        })?;
        result.push(element);
    }
    Ok(result)
}

// HELPER FUNCTIONS
// ================================================================================================

#[inline(always)]
fn fill_power_series<E: FieldElement>(result: &mut [E], base: E, start: E) {
    if result.is_empty() {
        return;
    }
    result[0] = start;
    for i in 1..result.len() {
        result[i] = result[i - 1] * base;
    }
}

#[cfg(test)]
mod tests;
