// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Finite field arithmetic and polynomial math used by the Glacier STARK
//! prover and verifier.
//!
//! The crate exposes:
//! * [FieldElement] and [StarkField] traits together with a concrete 32-bit
//!   STARK-friendly field in [fields::f32];
//! * [polynom] for polynomial evaluation, interpolation, and division;
//! * [fft] for fast evaluation/interpolation over power-of-two domains;
//! * batch utilities such as [batch_inversion] and [get_power_series].

pub mod field;
pub use field::{FieldElement, StarkField};

pub mod fields {
    //! Concrete field implementations.
    pub use super::field::f32;
}

pub mod fft;
pub mod polynom;

mod utils;
pub use self::utils::{
    batch_inversion, get_power_series, get_power_series_with_offset, read_elements_into_vec,
};
