// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Low-level utilities shared by all Glacier crates.
//!
//! The bulk of this crate is a compact byte-oriented serialization layer
//! ([Serializable] / [Deserializable] together with [ByteWriter] and
//! [ByteReader]) which all proof wire formats are built on. A few slice
//! manipulation helpers used by the commitment and folding code live here
//! as well.

mod serde;
pub use serde::{ByteReader, ByteWriter, Deserializable, Serializable, SliceReader};

mod errors;
pub use errors::DeserializationError;

#[cfg(test)]
mod tests;

// VECTOR AND SLICE HELPERS
// ================================================================================================

/// Returns a vector of the specified length with un-initialized memory.
///
/// This is faster than requesting a vector with initialized memory when all
/// positions are overwritten right after allocation.
///
/// # Safety
/// Every element of the returned vector must be written before it is read.
pub unsafe fn uninit_vector<T>(length: usize) -> Vec<T> {
    let mut vector = Vec::with_capacity(length);
    vector.set_len(length);
    vector
}

/// Transmutes a vector of `n` elements into a vector of `n` / `N` arrays of
/// `N` elements each.
///
/// # Panics
/// Panics if `n` is not divisible by `N`.
pub fn group_vector_elements<T, const N: usize>(source: Vec<T>) -> Vec<[T; N]> {
    assert_eq!(source.len() % N, 0, "source length must be divisible by {}", N);

    let mut v = core::mem::ManuallyDrop::new(source);
    let p = v.as_mut_ptr();
    let len = v.len() / N;
    let cap = v.capacity() / N;
    unsafe { Vec::from_raw_parts(p as *mut [T; N], len, cap) }
}

/// Returns the base-2 logarithm of `value`.
///
/// # Panics
/// Panics if `value` is not a power of two.
pub fn log2(value: usize) -> u32 {
    assert!(value.is_power_of_two(), "value must be a power of 2, but was {}", value);
    value.trailing_zeros()
}
