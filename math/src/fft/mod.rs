// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! FFT-based polynomial evaluation and interpolation over multiplicative
//! subgroups of the field.
//!
//! As compared to the functions in the [crate::polynom] module, functions
//! here run in O(`n` log `n`) time, where `n` is the domain size, and are
//! used for all large-domain work: trace extension and degree inference.

use crate::{
    field::StarkField,
    utils::{get_power_series, remove_leading_zeros},
};
use utils::{log2, uninit_vector};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================
const MAX_LOOP: usize = 256;

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` in-place over a domain of length `p.len()` using
/// the FFT algorithm. The polynomial is expected to be in coefficient form.
///
/// # Panics
/// Panics if:
/// * Length of `p` is not a power of two.
/// * Length of `twiddles` is not `p.len()` / 2.
pub fn evaluate_poly<B: StarkField>(p: &mut [B], twiddles: &[B]) {
    assert!(p.len().is_power_of_two(), "number of coefficients must be a power of 2");
    assert_eq!(
        p.len(),
        twiddles.len() * 2,
        "invalid number of twiddles: expected {} but received {}",
        p.len() / 2,
        twiddles.len()
    );
    fft_in_place(p, twiddles, 1, 1, 0);
    permute(p);
}

/// Evaluates polynomial `p` over a domain of length `p.len()` *
/// `blowup_factor` shifted by `domain_offset`, and returns the result.
///
/// # Panics
/// Panics if:
/// * Length of `p` is not a power of two.
/// * `blowup_factor` is not a power of two.
/// * Length of `twiddles` is not `p.len()` / 2.
/// * `domain_offset` is ZERO.
pub fn evaluate_poly_with_offset<B: StarkField>(
    p: &[B],
    twiddles: &[B],
    domain_offset: B,
    blowup_factor: usize,
) -> Vec<B> {
    assert!(p.len().is_power_of_two(), "number of coefficients must be a power of 2");
    assert!(blowup_factor.is_power_of_two(), "blowup factor must be a power of 2");
    assert_eq!(
        p.len(),
        twiddles.len() * 2,
        "invalid number of twiddles: expected {} but received {}",
        p.len() / 2,
        twiddles.len()
    );
    assert_ne!(domain_offset, B::ZERO, "domain offset cannot be zero");

    let domain_size = p.len() * blowup_factor;
    let g = B::get_root_of_unity(log2(domain_size));
    let mut result = unsafe { uninit_vector(domain_size) };

    result.as_mut_slice().chunks_mut(p.len()).enumerate().for_each(|(i, chunk)| {
        let idx = permute_index(blowup_factor, i) as u64;
        let offset = g.exp(idx.into()) * domain_offset;
        let mut factor = B::ONE;
        for (d, c) in chunk.iter_mut().zip(p.iter()) {
            *d = *c * factor;
            factor *= offset;
        }
        fft_in_place(chunk, twiddles, 1, 1, 0);
    });

    permute(&mut result);
    result
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Interpolates `evaluations` over a domain of length `evaluations.len()`
/// into a polynomial in coefficient form. The interpolation is done in-place.
///
/// # Panics
/// Panics if:
/// * Length of `evaluations` is not a power of two.
/// * Length of `inv_twiddles` is not `evaluations.len()` / 2.
pub fn interpolate_poly<B: StarkField>(evaluations: &mut [B], inv_twiddles: &[B]) {
    assert!(evaluations.len().is_power_of_two(), "number of evaluations must be a power of 2");
    assert_eq!(
        evaluations.len(),
        inv_twiddles.len() * 2,
        "invalid number of twiddles: expected {} but received {}",
        evaluations.len() / 2,
        inv_twiddles.len()
    );

    fft_in_place(evaluations, inv_twiddles, 1, 1, 0);
    let inv_length = B::from(evaluations.len() as u64).inv();
    for e in evaluations.iter_mut() {
        *e *= inv_length;
    }
    permute(evaluations);
}

/// Interpolates `evaluations` over a domain of length `evaluations.len()`
/// shifted by `domain_offset` into a polynomial in coefficient form. The
/// interpolation is done in-place.
///
/// # Panics
/// Panics if:
/// * Length of `evaluations` is not a power of two.
/// * Length of `inv_twiddles` is not `evaluations.len()` / 2.
/// * `domain_offset` is ZERO.
pub fn interpolate_poly_with_offset<B: StarkField>(
    evaluations: &mut [B],
    inv_twiddles: &[B],
    domain_offset: B,
) {
    assert!(evaluations.len().is_power_of_two(), "number of evaluations must be a power of 2");
    assert_eq!(
        evaluations.len(),
        inv_twiddles.len() * 2,
        "invalid number of twiddles: expected {} but received {}",
        evaluations.len() / 2,
        inv_twiddles.len()
    );
    assert_ne!(domain_offset, B::ZERO, "domain offset cannot be zero");

    fft_in_place(evaluations, inv_twiddles, 1, 1, 0);
    permute(evaluations);

    let domain_offset = domain_offset.inv();
    let mut offset = B::from(evaluations.len() as u64).inv();
    for coeff in evaluations.iter_mut() {
        *coeff *= offset;
        offset *= domain_offset;
    }
}

// TWIDDLES
// ================================================================================================

/// Returns a set of twiddles for the specified domain size; these twiddles
/// can then be used for FFT-based polynomial evaluation.
pub fn get_twiddles<B: StarkField>(domain_size: usize) -> Vec<B> {
    assert!(domain_size.is_power_of_two(), "domain size must be a power of 2");
    let root = B::get_root_of_unity(log2(domain_size));
    let mut twiddles = get_power_series(root, domain_size / 2);
    permute(&mut twiddles);
    twiddles
}

/// Returns a set of inverse twiddles for the specified domain size; these
/// twiddles can then be used for FFT-based polynomial interpolation.
pub fn get_inv_twiddles<B: StarkField>(domain_size: usize) -> Vec<B> {
    assert!(domain_size.is_power_of_two(), "domain size must be a power of 2");
    let root = B::get_root_of_unity(log2(domain_size));
    let inv_root = root.exp(((domain_size - 1) as u64).into());
    let mut inv_twiddles = get_power_series(inv_root, domain_size / 2);
    permute(&mut inv_twiddles);
    inv_twiddles
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns the degree of a polynomial implied by the provided evaluations
/// over a multiplicative subgroup shifted by `domain_offset`.
pub fn infer_degree<B: StarkField>(evaluations: &[B], domain_offset: B) -> usize {
    assert!(evaluations.len().is_power_of_two(), "number of evaluations must be a power of 2");
    let mut poly = evaluations.to_vec();
    let inv_twiddles = get_inv_twiddles::<B>(evaluations.len());
    interpolate_poly_with_offset(&mut poly, &inv_twiddles, domain_offset);
    remove_leading_zeros(&poly).len().saturating_sub(1)
}

// PERMUTATIONS
// ================================================================================================

/// Computes the bit reverse of the specified index in a domain of the
/// specified size; the size is assumed to be a power of two.
pub fn permute_index(size: usize, index: usize) -> usize {
    const USIZE_BITS: u32 = 0_usize.count_zeros();

    debug_assert!(index < size);
    debug_assert!(size.is_power_of_two());

    let bits = size.trailing_zeros();
    index.reverse_bits().wrapping_shr(USIZE_BITS - bits)
}

fn permute<B: StarkField>(values: &mut [B]) {
    let n = values.len();
    for i in 0..n {
        let j = permute_index(n, i);
        if j > i {
            values.swap(i, j);
        }
    }
}

// CORE FFT ALGORITHM
// ================================================================================================

/// In-place recursive FFT with permuted output.
///
/// Adapted from: https://github.com/0xProject/OpenZKP/tree/master/algebra/primefield/src/fft
fn fft_in_place<B: StarkField>(
    values: &mut [B],
    twiddles: &[B],
    count: usize,
    stride: usize,
    offset: usize,
) {
    let size = values.len() / stride;
    debug_assert!(size.is_power_of_two());
    debug_assert!(offset < stride);
    debug_assert_eq!(values.len() % size, 0);

    // keep recursing until size is 2
    if size > 2 {
        if stride == count && count < MAX_LOOP {
            fft_in_place(values, twiddles, 2 * count, 2 * stride, offset);
        } else {
            fft_in_place(values, twiddles, count, 2 * stride, offset);
            fft_in_place(values, twiddles, count, 2 * stride, offset + stride);
        }
    }

    for offset in offset..(offset + count) {
        butterfly(values, offset, stride);
    }

    let last_offset = offset + size * stride;
    for (i, offset) in (offset..last_offset).step_by(2 * stride).enumerate().skip(1) {
        for j in offset..(offset + count) {
            butterfly_twiddle(values, twiddles[i], j, stride);
        }
    }
}

#[inline(always)]
fn butterfly<B: StarkField>(values: &mut [B], offset: usize, stride: usize) {
    let i = offset;
    let j = offset + stride;
    let temp = values[i];
    values[i] = temp + values[j];
    values[j] = temp - values[j];
}

#[inline(always)]
fn butterfly_twiddle<B: StarkField>(values: &mut [B], twiddle: B, offset: usize, stride: usize) {
    let i = offset;
    let j = offset + stride;
    let temp = values[i];
    values[j] *= twiddle;
    values[i] = temp + values[j];
    values[j] = temp - values[j];
}
